//! Radius dimension placement.
//!
//! A radius leader must originate on the measured arc and aim through its
//! center only when the label truly sits inside the swept angle; anywhere
//! else the annotation degrades to an external reference line. The four-way
//! sector classification below is the decision everything else hangs off.

use std::f64::consts::TAU;

use glam::DVec2;

use crate::angle::{Angle, Inclusion};
use crate::errors::ConfigError;
use crate::label::DatumLabel;
use crate::log::debug;
use crate::types::{DimensionStandard, NumericError, Sector, positive_length};

use super::defaults::StandardConfig;
use super::geometry::joint_point;
use super::{ArrowPlacement, Placement, PlacementResult};

/// Classify a point (in polar form about the arc center) against the arc.
///
/// The swept sector is closed: a label dragged exactly onto a sweep limit
/// stays Inner/Outer rather than flickering into the neighbors. The mirrored
/// sector is open, so the shared limits resolve to Complement.
pub fn classify_point_to_arc_position(
    point_distance: f64,
    point_angle: Angle,
    radius: f64,
    start_angle: Angle,
    end_angle: Angle,
    clockwise: bool,
) -> Sector {
    debug_assert!(point_distance.is_finite() && point_distance >= 0.0);
    debug_assert!(radius.is_finite() && radius > 0.0);

    if point_angle.within_sector(start_angle, end_angle, clockwise, Inclusion::Closed) {
        if point_distance <= radius {
            Sector::Inner
        } else {
            Sector::Outer
        }
    } else if point_angle.within_sector(
        start_angle.opposite(),
        end_angle.opposite(),
        clockwise,
        Inclusion::Open,
    ) {
        Sector::Opposite
    } else {
        Sector::Complement
    }
}

/// A radius dimension: measured arc plus winding direction.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialDimension {
    center: DVec2,
    radius: f64,
    start_angle: Angle,
    end_angle: Angle,
    clockwise: bool,
}

impl RadialDimension {
    pub fn try_new(
        center: DVec2,
        radius: f64,
        start_angle: Angle,
        end_angle: Angle,
        clockwise: bool,
    ) -> Result<RadialDimension, ConfigError> {
        if !center.x.is_finite() || !center.y.is_finite() {
            return Err(ConfigError::InvalidPoint {
                source: NumericError::NaN,
            });
        }
        let radius =
            positive_length(radius).map_err(|source| ConfigError::InvalidRadius { source })?;
        Ok(RadialDimension {
            center,
            radius,
            start_angle,
            end_angle,
            clockwise,
        })
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Angle halfway along the sweep; the fallback leader direction when the
    /// label sits exactly on the arc center.
    pub fn mid_sweep(&self) -> Angle {
        let (from, to) = if self.clockwise {
            (self.end_angle, self.start_angle)
        } else {
            (self.start_angle, self.end_angle)
        };
        let span = (to.radians() - from.radians()).rem_euclid(TAU);
        Angle::new(from.radians() + span * 0.5)
    }

    /// Classify the current label center against the arc.
    pub fn classify(&self, label: &DatumLabel) -> Sector {
        let v = label.rect().center - self.center;
        let distance = v.length();
        let point_angle = Angle::from_vector(v).unwrap_or_else(|| self.mid_sweep());
        classify_point_to_arc_position(
            distance,
            point_angle,
            self.radius,
            self.start_angle,
            self.end_angle,
            self.clockwise,
        )
    }

    /// Sweep limit angularly nearest to `angle`.
    fn nearest_limit(&self, angle: Angle) -> Angle {
        if angle.distance_to(self.start_angle) <= angle.distance_to(self.end_angle) {
            self.start_angle
        } else {
            self.end_angle
        }
    }

    /// Leader landing at the label: ASME inserts a horizontal segment of the
    /// configured length; ISO runs straight from the joint. Returns the
    /// landing polyline (empty for ISO) and the point the line starts at.
    fn landing(&self, rect_center: DVec2, width: f64, toward: DVec2, cfg: &StandardConfig) -> (Vec<DVec2>, DVec2) {
        let jdir = if toward.x >= rect_center.x { 1.0 } else { -1.0 };
        let joint = joint_point(rect_center, width, jdir, cfg);
        match cfg.standard {
            DimensionStandard::Iso => (Vec::new(), joint),
            DimensionStandard::Asme => {
                let elbow = joint + DVec2::new(jdir * cfg.horizontal_leader_length, 0.0);
                (vec![joint, elbow], elbow)
            }
        }
    }
}

impl Placement for RadialDimension {
    fn compute(&self, label: &DatumLabel, config: &StandardConfig) -> PlacementResult {
        let rect = label.rect();
        let v = rect.center - self.center;
        let distance = v.length();
        let point_angle = Angle::from_vector(v).unwrap_or_else(|| self.mid_sweep());
        let sector = classify_point_to_arc_position(
            distance,
            point_angle,
            self.radius,
            self.start_angle,
            self.end_angle,
            self.clockwise,
        );
        debug!(
            "radius placement: label at ({}, {}) angle {} -> {}",
            rect.center.x, rect.center.y, point_angle, sector
        );

        match sector {
            Sector::Inner => {
                // label sits on the radius line itself; arrow pushes outward
                let arc_point = point_angle.polar(self.center, self.radius);
                PlacementResult {
                    line: (self.center, arc_point),
                    leader: Vec::new(),
                    extensions: Vec::new(),
                    arrows: vec![ArrowPlacement {
                        anchor: arc_point,
                        direction: point_angle,
                    }],
                    label_anchor: rect.center,
                    label_rotation: Angle::ZERO,
                    sector: Some(sector),
                }
            }
            Sector::Outer => {
                // leader approaches the arc from outside, arrow aims at the center
                let arc_point = point_angle.polar(self.center, self.radius);
                let (leader, line_start) = self.landing(rect.center, rect.width(), arc_point, config);
                PlacementResult {
                    line: (line_start, arc_point),
                    leader,
                    extensions: Vec::new(),
                    arrows: vec![ArrowPlacement {
                        anchor: arc_point,
                        direction: point_angle.opposite(),
                    }],
                    label_anchor: rect.center,
                    label_rotation: Angle::ZERO,
                    sector: Some(sector),
                }
            }
            Sector::Opposite => {
                // leader runs through the center region to the far side of the
                // arc and pushes outward onto it
                let mirrored = point_angle.opposite();
                let arc_point = mirrored.polar(self.center, self.radius);
                let (leader, line_start) = self.landing(rect.center, rect.width(), arc_point, config);
                PlacementResult {
                    line: (line_start, arc_point),
                    leader,
                    extensions: Vec::new(),
                    arrows: vec![ArrowPlacement {
                        anchor: arc_point,
                        direction: mirrored,
                    }],
                    label_anchor: rect.center,
                    label_rotation: Angle::ZERO,
                    sector: Some(sector),
                }
            }
            Sector::Complement => {
                // no arc to hit in this direction: reference line to the
                // nearest sweep limit, overhung past the arrowhead
                let anchor_angle = self.nearest_limit(point_angle);
                let arc_point = anchor_angle.polar(self.center, self.radius);
                let (leader, line_start) = self.landing(rect.center, rect.width(), arc_point, config);
                let lead_dir =
                    Angle::from_vector(arc_point - line_start).unwrap_or(anchor_angle);
                let overhang_end =
                    lead_dir.polar(arc_point, config.reference_line_overhang);
                PlacementResult {
                    line: (line_start, arc_point),
                    leader,
                    extensions: vec![(arc_point, overhang_end)],
                    arrows: vec![ArrowPlacement {
                        anchor: arc_point,
                        direction: lead_dir,
                    }],
                    label_anchor: rect.center,
                    label_rotation: Angle::ZERO,
                    sector: Some(sector),
                }
            }
        }
    }
}
