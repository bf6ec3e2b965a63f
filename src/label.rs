//! Label geometry state.
//!
//! [`DatumLabel`] is the only mutable state in the crate: the host's
//! interaction layer moves it (drag) and resizes it (text relayout), then
//! explicitly asks a dimension to recompute placement. Moving or resizing the
//! label never triggers placement by itself; "label moved" and "geometry
//! recomputed" stay separate steps.

use glam::DVec2;

use crate::errors::ConfigError;
use crate::log::debug;
use crate::types::LabelBox;

/// Interaction state of a label. Hover and selection are presentation flags,
/// not states; they never affect geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Position and size of a dimension's text label.
///
/// The label is addressed by its center. The layout anchor (min corner) is
/// kept alongside so a size change from text relayout holds the anchor still
/// until [`DatumLabel::set_label_center`] re-derives the center, mirroring
/// how a text item resizes in place.
#[derive(Debug, Clone)]
pub struct DatumLabel {
    center: DVec2,
    origin: DVec2,
    half_extents: DVec2,
    tol_half_extents: Option<DVec2>,
    drag: DragState,
    hovered: bool,
    selected: bool,
}

impl DatumLabel {
    /// Create a label centered at `center` with the given half extents.
    ///
    /// Extents come from the host's text layout; non-positive or non-finite
    /// extents are a configuration error.
    pub fn try_new(center: DVec2, half_extents: DVec2) -> Result<DatumLabel, ConfigError> {
        let rect = LabelBox::try_new(center, half_extents)?;
        Ok(DatumLabel {
            center: rect.center,
            origin: rect.center - rect.half_extents,
            half_extents: rect.half_extents,
            tol_half_extents: None,
            drag: DragState::Idle,
            hovered: false,
            selected: false,
        })
    }

    /// Reposition the label by its center. No other side effects; callers
    /// request re-placement explicitly afterwards.
    pub fn set_pos_from_center(&mut self, x_center: f64, y_center: f64) {
        self.center = DVec2::new(x_center, y_center);
        self.origin = self.center - self.half_extents;
    }

    /// Center x as last set.
    #[inline]
    pub fn x(&self) -> f64 {
        self.center.x
    }

    /// Center y as last set.
    #[inline]
    pub fn y(&self) -> f64 {
        self.center.y
    }

    /// Replace the label's half extents after a text relayout, keeping the
    /// layout anchor in place. Follow with [`DatumLabel::set_label_center`].
    pub fn set_extents(&mut self, half_extents: DVec2) -> Result<(), ConfigError> {
        // validate through the same path as construction
        LabelBox::try_new(self.origin + half_extents, half_extents)?;
        self.half_extents = half_extents;
        Ok(())
    }

    /// Recompute the stored center from the current bounding geometry.
    pub fn set_label_center(&mut self) {
        self.center = self.origin + self.half_extents;
    }

    /// Half extents of the tolerance sub-label, if the dimension carries one.
    pub fn set_tol_extents(&mut self, tol_half_extents: Option<DVec2>) {
        self.tol_half_extents = tol_half_extents;
    }

    /// Extra vertical offset placement must reserve when a tolerance
    /// sub-label is stacked with the value text.
    pub fn tol_adjust(&self) -> f64 {
        self.tol_half_extents.map_or(0.0, |t| t.y)
    }

    /// Current footprint read by the placement components.
    pub fn rect(&self) -> LabelBox {
        LabelBox {
            center: self.center,
            half_extents: self.half_extents,
        }
    }

    pub fn begin_drag(&mut self) {
        debug!("label drag started at ({}, {})", self.center.x, self.center.y);
        self.drag = DragState::Dragging;
    }

    pub fn end_drag(&mut self) {
        debug!("label drag finished at ({}, {})", self.center.x, self.center.y);
        self.drag = DragState::Idle;
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag == DragState::Dragging
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    #[inline]
    pub fn is_selected(&self) -> bool {
        self.selected
    }
}
