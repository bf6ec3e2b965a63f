//! Default placement constants (scene units, sized for ~3.5 unit text).
//!
//! House styles legitimately disagree on these, so every value is also a
//! public field of [`StandardConfig`] the host can override per project.

use crate::errors::ConfigError;
use crate::types::{DimensionStandard, non_negative_length};

/// Padding added to both text offsets so leaders clear the glyph ink.
pub const TEXT_OFFSET_FUDGE: f64 = 2.0;
/// Gap between a label edge and the joint of its leader.
pub const TEXT_HORIZONTAL_OFFSET: f64 = 4.0;
/// Gap between the dimension line and the label text above it.
pub const TEXT_VERTICAL_OFFSET: f64 = 4.0;
/// How far a reference line runs past its arrowhead.
pub const REFERENCE_LINE_OVERHANG: f64 = 8.0;
/// Length of the horizontal landing segment ASME leaders start with.
pub const HORIZONTAL_LEADER_LENGTH: f64 = 16.0;
/// Horizontal offset ASME adds between the label edge and the joint.
pub const ASME_LEADER_OVERHANG: f64 = 6.0;

/// Policy constants for one drafting standard.
///
/// Immutable per dimension instance; built from
/// [`StandardConfig::for_standard`] and adjusted field-by-field as needed.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardConfig {
    pub standard: DimensionStandard,
    pub text_offset_fudge: f64,
    pub text_horizontal_offset: f64,
    pub text_vertical_offset: f64,
    pub reference_line_overhang: f64,
    pub horizontal_leader_length: f64,
    /// Zero under ISO; ASME pushes the joint out by this much before the
    /// leader turns toward the target.
    pub leader_overhang: f64,
}

impl StandardConfig {
    pub fn iso() -> StandardConfig {
        StandardConfig {
            standard: DimensionStandard::Iso,
            text_offset_fudge: TEXT_OFFSET_FUDGE,
            text_horizontal_offset: TEXT_HORIZONTAL_OFFSET,
            text_vertical_offset: TEXT_VERTICAL_OFFSET,
            reference_line_overhang: REFERENCE_LINE_OVERHANG,
            horizontal_leader_length: HORIZONTAL_LEADER_LENGTH,
            leader_overhang: 0.0,
        }
    }

    pub fn asme() -> StandardConfig {
        StandardConfig {
            standard: DimensionStandard::Asme,
            leader_overhang: ASME_LEADER_OVERHANG,
            ..StandardConfig::iso()
        }
    }

    pub fn for_standard(standard: DimensionStandard) -> StandardConfig {
        match standard {
            DimensionStandard::Iso => StandardConfig::iso(),
            DimensionStandard::Asme => StandardConfig::asme(),
        }
    }

    /// Check host-overridden constants; call once at setup, not mid-placement.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("text_offset_fudge", self.text_offset_fudge),
            ("text_horizontal_offset", self.text_horizontal_offset),
            ("text_vertical_offset", self.text_vertical_offset),
            ("reference_line_overhang", self.reference_line_overhang),
            ("horizontal_leader_length", self.horizontal_leader_length),
            ("leader_overhang", self.leader_overhang),
        ];
        for (name, value) in fields {
            non_negative_length(value)
                .map_err(|source| ConfigError::InvalidConstant { name, source })?;
        }
        Ok(())
    }

    /// Clearance between the label edge and a joint point.
    #[inline]
    pub(crate) fn horizontal_clearance(&self) -> f64 {
        self.text_horizontal_offset + self.text_offset_fudge
    }

    /// Clearance between the label center line and the dimension line.
    #[inline]
    pub(crate) fn vertical_clearance(&self) -> f64 {
        self.text_vertical_offset + self.text_offset_fudge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standards_differ_only_in_overhang() {
        let iso = StandardConfig::iso();
        let asme = StandardConfig::asme();
        assert_eq!(iso.leader_overhang, 0.0);
        assert!(asme.leader_overhang > 0.0);
        assert_eq!(iso.text_vertical_offset, asme.text_vertical_offset);
        assert_eq!(iso.horizontal_leader_length, asme.horizontal_leader_length);
    }

    #[test]
    fn validate_rejects_bad_overrides() {
        let mut cfg = StandardConfig::iso();
        assert!(cfg.validate().is_ok());
        cfg.reference_line_overhang = -1.0;
        assert!(cfg.validate().is_err());
        cfg.reference_line_overhang = f64::NAN;
        assert!(cfg.validate().is_err());
    }
}
