//! Core value types shared by the placement components.

use std::fmt;
use std::str::FromStr;

use glam::DVec2;

use crate::errors::ConfigError;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Validate a strictly positive, finite length.
pub(crate) fn positive_length(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else if val == 0.0 {
        Err(NumericError::Zero)
    } else {
        Ok(val)
    }
}

/// Validate a finite, non-negative length.
pub(crate) fn non_negative_length(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Where a label sits relative to a measured arc.
///
/// Exactly one variant applies to any (point, arc, winding) triple; see
/// [`crate::placement::radial::classify_point_to_arc_position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sector {
    /// Within the swept angle, at or inside the radius.
    Inner,
    /// Within the swept angle, outside the radius.
    Outer,
    /// Within the mirror image of the swept angle.
    Opposite,
    /// Anywhere else.
    Complement,
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sector::Inner => write!(f, "inner"),
            Sector::Outer => write!(f, "outer"),
            Sector::Opposite => write!(f, "opposite"),
            Sector::Complement => write!(f, "complement"),
        }
    }
}

/// The drafting standard governing joint shapes and offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionStandard {
    Iso,
    Asme,
}

impl FromStr for DimensionStandard {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            s if s.eq_ignore_ascii_case("iso") => Ok(DimensionStandard::Iso),
            s if s.eq_ignore_ascii_case("asme") => Ok(DimensionStandard::Asme),
            other => Err(ConfigError::UnknownStandard {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for DimensionStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionStandard::Iso => write!(f, "ISO"),
            DimensionStandard::Asme => write!(f, "ASME"),
        }
    }
}

/// Axis-aligned footprint of a text label: center plus half extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelBox {
    pub center: DVec2,
    pub half_extents: DVec2,
}

impl LabelBox {
    /// Create a label box, validating that the extents are finite and
    /// strictly positive.
    pub fn try_new(center: DVec2, half_extents: DVec2) -> Result<LabelBox, ConfigError> {
        if !center.x.is_finite() || !center.y.is_finite() {
            return Err(ConfigError::InvalidExtents {
                source: NumericError::NaN,
            });
        }
        for axis in [half_extents.x, half_extents.y] {
            positive_length(axis).map_err(|source| ConfigError::InvalidExtents { source })?;
        }
        Ok(LabelBox { center, half_extents })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.half_extents.x * 2.0
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.half_extents.y * 2.0
    }

    /// Midpoint of the edge facing `target`; the fallback anchor when the
    /// exit-point direction is degenerate.
    pub fn nearest_edge_midpoint(&self, target: DVec2) -> DVec2 {
        let delta = target - self.center;
        if delta.x.abs() * self.half_extents.y >= delta.y.abs() * self.half_extents.x {
            let side = if delta.x >= 0.0 { 1.0 } else { -1.0 };
            self.center + DVec2::new(side * self.half_extents.x, 0.0)
        } else {
            let side = if delta.y >= 0.0 { 1.0 } else { -1.0 };
            self.center + DVec2::new(0.0, side * self.half_extents.y)
        }
    }
}
