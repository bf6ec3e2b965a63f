//! Linear and angular dimension placement.
//!
//! The core problem: given the point being annotated and wherever the user
//! has dragged the label, find a line angle that honestly represents the
//! measurement and a label angle that keeps the text readable. The two are
//! coupled; picking them independently produces upside-down text or a line
//! that misses the label.

use std::f64::consts::FRAC_PI_2;

use glam::DVec2;

use crate::angle::{ANGLE_EPSILON, Angle};
use crate::errors::ConfigError;
use crate::label::DatumLabel;
use crate::log::debug;
use crate::types::NumericError;

use super::defaults::StandardConfig;
use super::geometry::{COINCIDENT_SQ, compute_line_origin_point, joint_point};
use super::{ArrowPlacement, Placement, PlacementResult};

/// Side selector from ISO 129-1: -1 places the line below upright text,
/// +1 flips the side for label directions where the text must be mirrored
/// to stay readable.
pub fn iso_standard_line_placement(label_angle: Angle) -> f64 {
    let a = label_angle.radians();
    if a > FRAC_PI_2 + ANGLE_EPSILON && a < 3.0 * FRAC_PI_2 - ANGLE_EPSILON {
        1.0
    } else {
        -1.0
    }
}

/// Rotate a line angle into the right-reading half-circle.
fn upright(line: Angle) -> Angle {
    if iso_standard_line_placement(line) > 0.0 {
        line.opposite()
    } else {
        line
    }
}

/// The coupled angles for a leader-style placement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LineLabelAngles {
    /// Angle of the dimension/leader line.
    pub line: Angle,
    /// Angle the label text is rotated by; always right-reading.
    pub label: Angle,
    /// Raw direction from the target to the label center; `None` when the
    /// two coincide and both angles fall back to horizontal.
    pub to_center: Option<Angle>,
}

/// Derive line and label angles from the vector between the annotated target
/// and the label center.
///
/// The line is tilted off the center ray just enough to pass at
/// `line_label_distance` from the label center, on the side
/// [`iso_standard_line_placement`] dictates, so the text ends up above the
/// line. If the label center is closer than the required distance the line
/// turns perpendicular to the center ray instead of chasing an impossible
/// tangent.
pub fn compute_line_and_label_angles(
    target: DVec2,
    label_center: DVec2,
    line_label_distance: f64,
) -> LineLabelAngles {
    let direction = label_center - target;
    if direction.length_squared() <= COINCIDENT_SQ {
        return LineLabelAngles::default();
    }
    let Some(to_center) = Angle::from_vector(direction) else {
        return LineLabelAngles::default();
    };
    let distance = direction.length();

    if distance <= line_label_distance {
        let line = to_center.add(Angle::new(FRAC_PI_2));
        return LineLabelAngles {
            line,
            label: upright(line),
            to_center: Some(to_center),
        };
    }

    let tilt = (line_label_distance / distance).asin();
    let placement = iso_standard_line_placement(to_center);
    let line = Angle::new(to_center.radians() + placement * tilt);
    let label = if placement > 0.0 { line.opposite() } else { line };
    LineLabelAngles {
        line,
        label,
        to_center: Some(to_center),
    }
}

/// A linear or angular dimension: one annotated target point, or two for a
/// distance dimension with a proper dimension line between them.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearDimension {
    target: DVec2,
    counter_target: Option<DVec2>,
}

fn check_point(p: DVec2) -> Result<DVec2, ConfigError> {
    if p.x.is_nan() || p.y.is_nan() {
        Err(ConfigError::InvalidPoint {
            source: NumericError::NaN,
        })
    } else if !p.x.is_finite() || !p.y.is_finite() {
        Err(ConfigError::InvalidPoint {
            source: NumericError::Infinite,
        })
    } else {
        Ok(p)
    }
}

impl LinearDimension {
    /// Leader-style dimension annotating a single point (also the angular
    /// case, whose vertex plays the target role).
    pub fn try_new(target: DVec2) -> Result<LinearDimension, ConfigError> {
        Ok(LinearDimension {
            target: check_point(target)?,
            counter_target: None,
        })
    }

    /// Distance dimension between two measured points.
    pub fn try_between(first: DVec2, second: DVec2) -> Result<LinearDimension, ConfigError> {
        Ok(LinearDimension {
            target: check_point(first)?,
            counter_target: Some(check_point(second)?),
        })
    }

    pub fn target(&self) -> DVec2 {
        self.target
    }

    pub fn counter_target(&self) -> Option<DVec2> {
        self.counter_target
    }

    fn compute_leader(&self, label: &DatumLabel, cfg: &StandardConfig) -> PlacementResult {
        let rect = label.rect();
        let gap = cfg.vertical_clearance() + label.tol_adjust();
        let angles = compute_line_and_label_angles(self.target, rect.center, gap);

        let line_dir = angles.line.unit();
        let projected = (rect.center - self.target).dot(line_dir);
        let direction = if projected >= 0.0 { 1.0 } else { -1.0 };
        let origin = compute_line_origin_point(
            self.target,
            projected,
            angles.line,
            rect.width(),
            direction,
            cfg,
        );

        let jdir = if origin.x >= rect.center.x { 1.0 } else { -1.0 };
        let joint = joint_point(rect.center, rect.width(), jdir, cfg);

        let arrow_dir = Angle::from_vector(self.target - origin).unwrap_or(angles.line);
        debug!(
            "leader placement: line {} label {} origin ({}, {})",
            angles.line, angles.label, origin.x, origin.y
        );

        PlacementResult {
            line: (origin, self.target),
            leader: vec![joint, origin],
            extensions: Vec::new(),
            arrows: vec![ArrowPlacement {
                anchor: self.target,
                direction: arrow_dir,
            }],
            label_anchor: rect.center,
            label_rotation: angles.label,
            sector: None,
        }
    }

    fn compute_distance(&self, second: DVec2, label: &DatumLabel, cfg: &StandardConfig) -> PlacementResult {
        let first = self.target;
        let Some(line) = Angle::from_vector(second - first) else {
            // measured points coincide, degrade to a leader on the single point
            return self.compute_leader(label, cfg);
        };

        let rect = label.rect();
        let gap = cfg.vertical_clearance() + label.tol_adjust();
        let u = line.unit();
        let n = DVec2::new(-u.y, u.x);

        // offset the dimension line so the label clears it by `gap` on the
        // side of the measured segment the label was dragged to
        let side_raw = (rect.center - first).dot(n);
        let side = if side_raw >= 0.0 { 1.0 } else { -1.0 };
        let offset = side_raw - side * gap;
        let line_start = first + n * offset;
        let line_end = second + n * offset;

        let toward_line = n * side;
        let extensions = vec![
            (first, line_start + toward_line * cfg.reference_line_overhang),
            (second, line_end + toward_line * cfg.reference_line_overhang),
        ];

        debug!(
            "distance placement: line {} offset {} side {}",
            line, offset, side
        );

        PlacementResult {
            line: (line_start, line_end),
            leader: Vec::new(),
            extensions,
            arrows: vec![
                ArrowPlacement {
                    anchor: line_start,
                    direction: line.opposite(),
                },
                ArrowPlacement {
                    anchor: line_end,
                    direction: line,
                },
            ],
            label_anchor: rect.center,
            label_rotation: upright(line),
            sector: None,
        }
    }
}

impl Placement for LinearDimension {
    fn compute(&self, label: &DatumLabel, config: &StandardConfig) -> PlacementResult {
        match self.counter_target {
            None => self.compute_leader(label, config),
            Some(second) => self.compute_distance(second, label, config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;
    use std::f64::consts::{FRAC_PI_2, PI};

    const TOL: f64 = 1e-9;

    #[test]
    fn iso_placement_at_boundary_angles() {
        assert_eq!(iso_standard_line_placement(Angle::new(0.0)), -1.0);
        assert_eq!(iso_standard_line_placement(Angle::new(FRAC_PI_2)), -1.0);
        assert_eq!(iso_standard_line_placement(Angle::new(PI)), 1.0);
        assert_eq!(iso_standard_line_placement(Angle::new(3.0 * FRAC_PI_2)), -1.0);
    }

    #[test]
    fn label_right_of_target_tilts_line_below_center_ray() {
        let angles = compute_line_and_label_angles(dvec2(0.0, 0.0), dvec2(100.0, 10.0), 5.0);
        let to_center = angles.to_center.unwrap().radians();
        assert!(angles.line.radians() < to_center);
        // line passes at the requested distance from the label center
        let d = (dvec2(100.0, 10.0) - dvec2(0.0, 0.0))
            .dot(DVec2::new(-angles.line.unit().y, angles.line.unit().x))
            .abs();
        assert!((d - 5.0).abs() < TOL, "distance {d}");
        // text stays right-reading
        assert!(angles.label.unit().x > 0.0);
    }

    #[test]
    fn label_left_of_target_keeps_text_upright() {
        let angles = compute_line_and_label_angles(dvec2(0.0, 0.0), dvec2(-100.0, 10.0), 5.0);
        assert!(angles.label.unit().x > 0.0, "label angle {}", angles.label);
        // line and label differ by π when the placement side flipped
        let diff = Angle::new(angles.label.radians() - angles.line.radians()).radians();
        assert!((diff - PI).abs() < TOL);
    }

    #[test]
    fn label_too_close_turns_perpendicular() {
        let angles = compute_line_and_label_angles(dvec2(0.0, 0.0), dvec2(3.0, 0.0), 5.0);
        assert!((angles.line.radians() - FRAC_PI_2).abs() < TOL);
        assert!(angles.to_center.is_some());
    }

    #[test]
    fn coincident_points_fall_back_to_horizontal() {
        let angles = compute_line_and_label_angles(dvec2(1.0, 1.0), dvec2(1.0, 1.0), 5.0);
        assert_eq!(angles.line, Angle::ZERO);
        assert_eq!(angles.label, Angle::ZERO);
        assert_eq!(angles.to_center, None);
    }

    #[test]
    fn leader_line_ends_short_of_label() {
        let dim = LinearDimension::try_new(dvec2(0.0, 0.0)).unwrap();
        let label = DatumLabel::try_new(dvec2(80.0, 0.0), dvec2(6.0, 2.5)).unwrap();
        let cfg = StandardConfig::iso();
        let result = dim.compute(&label, &cfg);

        let (origin, target) = result.line;
        assert_eq!(target, dvec2(0.0, 0.0));
        // the line stops before reaching the label footprint
        assert!(origin.x < 80.0 - 6.0);
        assert!(origin.x > 0.0);
        assert_eq!(result.arrows.len(), 1);
        assert_eq!(result.arrows[0].anchor, target);
        assert!(result.sector.is_none());
    }

    #[test]
    fn distance_line_clears_label_by_gap() {
        let dim = LinearDimension::try_between(dvec2(0.0, 0.0), dvec2(100.0, 0.0)).unwrap();
        let label = DatumLabel::try_new(dvec2(50.0, 20.0), dvec2(6.0, 2.5)).unwrap();
        let cfg = StandardConfig::iso();
        let result = dim.compute(&label, &cfg);

        let (s, e) = result.line;
        // horizontal line, offset below the label by the clearance gap
        assert!((s.y - e.y).abs() < TOL);
        let gap = 20.0 - s.y;
        assert!((gap - (cfg.text_vertical_offset + cfg.text_offset_fudge)).abs() < TOL);
        assert_eq!(result.arrows.len(), 2);
        assert_eq!(result.extensions.len(), 2);
        // extensions start at the measured points
        assert_eq!(result.extensions[0].0, dvec2(0.0, 0.0));
        assert_eq!(result.extensions[1].0, dvec2(100.0, 0.0));
        // and overshoot the dimension line
        assert!(result.extensions[0].1.y > s.y);
    }

    #[test]
    fn tolerance_widens_the_gap() {
        let dim = LinearDimension::try_between(dvec2(0.0, 0.0), dvec2(100.0, 0.0)).unwrap();
        let mut label = DatumLabel::try_new(dvec2(50.0, 20.0), dvec2(6.0, 2.5)).unwrap();
        let cfg = StandardConfig::iso();
        let plain = dim.compute(&label, &cfg);
        label.set_tol_extents(Some(dvec2(3.0, 1.5)));
        let with_tol = dim.compute(&label, &cfg);
        assert!(with_tol.line.0.y < plain.line.0.y);
    }

    #[test]
    fn rejects_non_finite_targets() {
        assert!(LinearDimension::try_new(dvec2(f64::NAN, 0.0)).is_err());
        assert!(LinearDimension::try_between(dvec2(0.0, 0.0), dvec2(f64::INFINITY, 0.0)).is_err());
    }
}
