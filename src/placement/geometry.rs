//! Shared placement geometry: rectangle exit points, joint points, and the
//! leader-origin back-projection.

use glam::DVec2;

use crate::angle::Angle;
use crate::types::{DimensionStandard, LabelBox};

use super::defaults::StandardConfig;

/// Below this squared distance two points are treated as coincident.
pub(crate) const COINCIDENT_SQ: f64 = 1e-12;

/// Where the ray from `rect`'s center toward `target` crosses the rectangle
/// boundary.
///
/// This anchors a leader to the label box so the line visually touches the
/// box instead of floating at its center, wherever the label currently sits.
/// Returns `None` only when `target` coincides with the center (the direction
/// is undefined); callers fall back to
/// [`LabelBox::nearest_edge_midpoint`] or the center itself.
pub fn rectangle_exit_point(rect: &LabelBox, target: DVec2) -> Option<DVec2> {
    let delta = target - rect.center;
    if delta.length_squared() <= COINCIDENT_SQ {
        return None;
    }

    let scale_x = if delta.x == 0.0 {
        f64::INFINITY
    } else {
        rect.half_extents.x / delta.x.abs()
    };
    let scale_y = if delta.y == 0.0 {
        f64::INFINITY
    } else {
        rect.half_extents.y / delta.y.abs()
    };

    Some(rect.center + delta * scale_x.min(scale_y))
}

/// ISO joint point: on the label edge nearest the line, dropped below the
/// text baseline so the leader meets the box where ISO runs the line under
/// the text.
///
/// `direction` is +1 when the joint sits on the label's +x side, -1 for -x.
pub fn iso_joint_point(
    label_center: DVec2,
    label_width: f64,
    direction: f64,
    cfg: &StandardConfig,
) -> DVec2 {
    label_center
        + DVec2::new(
            direction * (label_width * 0.5 + cfg.horizontal_clearance()),
            -cfg.vertical_clearance(),
        )
}

/// ASME joint point: the ISO joint pushed further out horizontally by the
/// configured leader overhang, before the leader turns toward the target.
///
/// Identical to [`iso_joint_point`] exactly when the overhang is zero.
pub fn asme_joint_point(
    label_center: DVec2,
    label_width: f64,
    direction: f64,
    cfg: &StandardConfig,
) -> DVec2 {
    iso_joint_point(label_center, label_width, direction, cfg)
        + DVec2::new(direction * cfg.leader_overhang, 0.0)
}

/// Joint point for the active standard.
pub fn joint_point(
    label_center: DVec2,
    label_width: f64,
    direction: f64,
    cfg: &StandardConfig,
) -> DVec2 {
    match cfg.standard {
        DimensionStandard::Iso => iso_joint_point(label_center, label_width, direction, cfg),
        DimensionStandard::Asme => asme_joint_point(label_center, label_width, direction, cfg),
    }
}

/// Back-project from `target` along the line to find where the leader line
/// should originate so it meets the label edge rather than its center.
///
/// `projected_label_distance` is the label center's signed projection onto
/// the line direction, measured from `target`; `direction` is +1 when the
/// label lies in the positive line direction.
pub fn compute_line_origin_point(
    target: DVec2,
    projected_label_distance: f64,
    line_angle: Angle,
    label_width: f64,
    direction: f64,
    cfg: &StandardConfig,
) -> DVec2 {
    let edge_distance =
        projected_label_distance - direction * (label_width * 0.5 + cfg.horizontal_clearance());
    line_angle.polar(target, edge_distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn rect() -> LabelBox {
        LabelBox::try_new(dvec2(0.0, 0.0), dvec2(5.0, 2.0)).unwrap()
    }

    #[test]
    fn exit_right_edge_midpoint() {
        assert_eq!(
            rectangle_exit_point(&rect(), dvec2(100.0, 0.0)),
            Some(dvec2(5.0, 0.0))
        );
    }

    #[test]
    fn exit_top_edge_midpoint() {
        assert_eq!(
            rectangle_exit_point(&rect(), dvec2(0.0, 100.0)),
            Some(dvec2(0.0, 2.0))
        );
    }

    #[test]
    fn exit_diagonal_lands_on_boundary() {
        let r = rect();
        let p = rectangle_exit_point(&r, dvec2(10.0, 10.0)).unwrap();
        // 45 degree ray leaves through the top edge (half height < half width)
        assert!((p.y - 2.0).abs() < 1e-12);
        assert!((p.x - 2.0).abs() < 1e-12);
    }

    #[test]
    fn exit_offset_center() {
        let r = LabelBox::try_new(dvec2(10.0, 10.0), dvec2(5.0, 2.0)).unwrap();
        assert_eq!(
            rectangle_exit_point(&r, dvec2(-100.0, 10.0)),
            Some(dvec2(5.0, 10.0))
        );
    }

    #[test]
    fn exit_degenerate_direction() {
        let r = rect();
        assert_eq!(rectangle_exit_point(&r, r.center), None);
    }

    #[test]
    fn iso_asme_joints_coincide_iff_no_overhang() {
        let mut cfg = StandardConfig::asme();
        let center = dvec2(10.0, 20.0);
        let iso = iso_joint_point(center, 12.0, 1.0, &cfg);
        let asme = asme_joint_point(center, 12.0, 1.0, &cfg);
        assert!((asme - iso).length() > 0.0);
        assert_eq!(asme - iso, dvec2(cfg.leader_overhang, 0.0));

        cfg.leader_overhang = 0.0;
        let asme = asme_joint_point(center, 12.0, 1.0, &cfg);
        assert_eq!(asme, iso);
    }

    #[test]
    fn joint_side_follows_direction() {
        let cfg = StandardConfig::iso();
        let left = iso_joint_point(DVec2::ZERO, 12.0, -1.0, &cfg);
        let right = iso_joint_point(DVec2::ZERO, 12.0, 1.0, &cfg);
        assert!(left.x < 0.0 && right.x > 0.0);
        assert_eq!(left.y, right.y);
    }

    #[test]
    fn line_origin_stops_at_label_edge() {
        let cfg = StandardConfig::iso();
        let target = dvec2(0.0, 0.0);
        // label centered 100 units along a horizontal line, 12 wide
        let origin = compute_line_origin_point(target, 100.0, Angle::ZERO, 12.0, 1.0, &cfg);
        let expected = 100.0 - (6.0 + cfg.horizontal_clearance());
        assert!((origin.x - expected).abs() < 1e-12);
        assert!(origin.y.abs() < 1e-12);
    }
}
