//! Placement computation for dimension annotations.
//!
//! This module is organized into submodules:
//! - `defaults`: Per-standard policy constants
//! - `geometry`: Rectangle exit points, joint points, leader origins
//! - `linear`: Linear/angular dimension placement
//! - `radial`: Radius dimension placement and sector classification

pub mod defaults;
pub mod geometry;
pub mod linear;
pub mod radial;

// Re-export commonly used items
pub use defaults::StandardConfig;
pub use geometry::{
    asme_joint_point, compute_line_origin_point, iso_joint_point, joint_point,
    rectangle_exit_point,
};
pub use linear::{
    LineLabelAngles, LinearDimension, compute_line_and_label_angles, iso_standard_line_placement,
};
pub use radial::{RadialDimension, classify_point_to_arc_position};

use enum_dispatch::enum_dispatch;
use glam::DVec2;

use crate::angle::Angle;
use crate::label::DatumLabel;
use crate::types::Sector;

/// An arrowhead anchor: where the tip sits and which way it points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowPlacement {
    pub anchor: DVec2,
    pub direction: Angle,
}

/// Everything a rendering collaborator needs to draw one annotation.
///
/// Pure output, recomputed on every placement request; nothing in here is
/// cached across a measurement or label move.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementResult {
    /// The dimension/leader line proper.
    pub line: (DVec2, DVec2),
    /// Landing polyline connecting the label joint to the line; empty when
    /// the line itself reaches the label.
    pub leader: Vec<DVec2>,
    /// Extension/reference segments (witness lines, reference overhang).
    pub extensions: Vec<(DVec2, DVec2)>,
    /// One arrowhead for leader styles, two for distance dimensions.
    pub arrows: Vec<ArrowPlacement>,
    /// Where the label box should be centered.
    pub label_anchor: DVec2,
    /// Rotation applied to the label text; always right-reading.
    pub label_rotation: Angle,
    /// Resolved sector for radius dimensions, `None` otherwise.
    pub sector: Option<Sector>,
}

/// Compute placement geometry from measured inputs and the current label
/// state. Implementations are pure: no side effects, no caching, callable in
/// any order.
#[enum_dispatch]
pub trait Placement {
    fn compute(&self, label: &DatumLabel, config: &StandardConfig) -> PlacementResult;
}

/// The dimension kinds the engine places.
#[enum_dispatch(Placement)]
#[derive(Debug, Clone, PartialEq)]
pub enum Dimension {
    Linear(LinearDimension),
    Radial(RadialDimension),
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn dimension_enum_dispatches() {
        let label = DatumLabel::try_new(dvec2(40.0, 0.0), dvec2(5.0, 2.0)).unwrap();
        let cfg = StandardConfig::iso();

        let linear: Dimension = LinearDimension::try_new(dvec2(0.0, 0.0)).unwrap().into();
        let result = linear.compute(&label, &cfg);
        assert!(result.sector.is_none());

        let radial: Dimension = RadialDimension::try_new(
            dvec2(0.0, 0.0),
            10.0,
            Angle::new(0.0),
            Angle::new(1.0),
            false,
        )
        .unwrap()
        .into();
        let result = radial.compute(&label, &cfg);
        assert!(result.sector.is_some());
    }
}
