//! Angle arithmetic for placement decisions.
//!
//! Every public operation returns angles normalized to `[0, 2π)`, so sector
//! containment tests never have to reason about representative choice. All
//! boundary comparisons go through [`ANGLE_EPSILON`] rather than exact
//! float equality.

use std::f64::consts::TAU;
use std::fmt;

use glam::DVec2;

use crate::types::NumericError;

/// Tolerance for angular boundary comparisons.
pub const ANGLE_EPSILON: f64 = 1e-9;

/// Whether a sector's limits belong to the sector.
///
/// Drafting code needs both: the swept sector of an arc is closed so a label
/// dragged onto the limit does not flicker out of it, while the mirrored
/// sector is open so the same limit is not claimed twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inclusion {
    /// Limits belong to the sector (within `ANGLE_EPSILON`).
    Closed,
    /// Limits are excluded (by at least `ANGLE_EPSILON`).
    Open,
}

/// An angle in radians, canonicalized to `[0, 2π)`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Angle(f64);

/// Map any real angle into `[0, 2π)`, exact at the boundary.
#[inline]
fn canonical(radians: f64) -> f64 {
    let r = radians.rem_euclid(TAU);
    // rem_euclid of a tiny negative value can round up to TAU itself
    if r >= TAU { 0.0 } else { r }
}

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    /// Create an angle from radians, normalizing into `[0, 2π)`.
    ///
    /// An input of exactly `2π` maps to `0`. Non-finite input is the
    /// caller's bug; use [`Angle::try_new`] for host-provided values.
    #[inline]
    pub fn new(radians: f64) -> Angle {
        debug_assert!(radians.is_finite());
        Angle(canonical(radians))
    }

    /// Create an angle with validation (rejects NaN/infinite).
    #[inline]
    pub fn try_new(radians: f64) -> Result<Angle, NumericError> {
        if radians.is_nan() {
            Err(NumericError::NaN)
        } else if radians.is_infinite() {
            Err(NumericError::Infinite)
        } else {
            Ok(Angle(canonical(radians)))
        }
    }

    /// The direction of a vector, or `None` for a (near-)zero vector.
    #[inline]
    pub fn from_vector(v: DVec2) -> Option<Angle> {
        if v.length_squared() <= f64::EPSILON {
            None
        } else {
            Some(Angle::new(v.y.atan2(v.x)))
        }
    }

    /// Radians in `[0, 2π)`.
    #[inline]
    pub fn radians(self) -> f64 {
        self.0
    }

    /// Sum of two angles, normalized.
    #[inline]
    pub fn add(self, other: Angle) -> Angle {
        Angle::new(self.0 + other.0)
    }

    /// This angle rotated by π.
    #[inline]
    pub fn opposite(self) -> Angle {
        Angle::new(self.0 + TAU / 2.0)
    }

    /// Unit vector pointing along this angle.
    #[inline]
    pub fn unit(self) -> DVec2 {
        let (sin, cos) = self.0.sin_cos();
        DVec2::new(cos, sin)
    }

    /// Point at `length` along this angle from `origin`.
    #[inline]
    pub fn polar(self, origin: DVec2, length: f64) -> DVec2 {
        origin + self.unit() * length
    }

    /// True iff `self` lies in the arc from `start` to `end`, walking in the
    /// given winding direction.
    ///
    /// Handles sectors that cross the `0`/`2π` wraparound. A clockwise walk
    /// from `start` to `end` covers the same set as a counterclockwise walk
    /// from `end` to `start`.
    pub fn within_sector(self, start: Angle, end: Angle, clockwise: bool, inclusion: Inclusion) -> bool {
        let (from, to) = if clockwise { (end, start) } else { (start, end) };
        let span = canonical(to.0 - from.0);
        let rel = canonical(self.0 - from.0);
        match inclusion {
            Inclusion::Closed => rel <= span + ANGLE_EPSILON || rel >= TAU - ANGLE_EPSILON,
            Inclusion::Open => rel > ANGLE_EPSILON && rel < span - ANGLE_EPSILON,
        }
    }

    /// Unsigned angular distance to `other`, the shorter way around.
    pub fn distance_to(self, other: Angle) -> f64 {
        let forward = canonical(other.0 - self.0);
        forward.min(TAU - forward)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}rad", self.0)
    }
}
