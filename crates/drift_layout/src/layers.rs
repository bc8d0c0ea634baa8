//! The two layers of a surface
//!
//! ```text
//! surface (transparent, unclipped)
//! └── ContainerLayer   rounded, clipped, shadowed, bottom constant = -overflow
//!     └── ContentLayer unclipped, bordered,       bottom constant = +overflow
//!         └── content views (full bleed)
//! ```
//!
//! Splitting the clip from the content lets the corner mask and the shadow
//! belong to the container alone while content bleeds past the rounded edge.

use drift_core::{Border, Color, CornerRadius, Corners, Rect, Shadow};
use smallvec::SmallVec;

use crate::appearance::SurfaceCapabilities;
use crate::constraints::EdgeConstraints;
use crate::tree::LayoutNodeId;

/// How the renderer clips the container
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ContainerMask {
    /// Clip to a rounded rectangle with these radii
    Rounded(CornerRadius),
    /// Clip to the plain bounds
    Rectangle,
}

/// Shape painted over a rectangle-clipped container to draw its rounded
/// corners when the backend cannot mask a subset of corners
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaskOverlay {
    pub radius: CornerRadius,
    pub color: Color,
}

/// The outer, rounded and clipped layer
#[derive(Clone, Debug)]
pub struct ContainerLayer {
    node: LayoutNodeId,
    constraints: EdgeConstraints,
    corner_radius: f32,
    mask_corners: Corners,
    supports_partial_mask: bool,
    background_color: Color,
    shadow: Option<Shadow>,
    frame: Rect,
}

impl ContainerLayer {
    pub(crate) fn new(node: LayoutNodeId, capabilities: SurfaceCapabilities) -> Self {
        Self {
            node,
            constraints: EdgeConstraints::PINNED,
            corner_radius: 0.0,
            mask_corners: Corners::TOP,
            supports_partial_mask: capabilities.supports_partial_corner_mask,
            background_color: Color::TRANSPARENT,
            shadow: None,
            frame: Rect::ZERO,
        }
    }

    pub fn node(&self) -> LayoutNodeId {
        self.node
    }

    pub fn constraints(&self) -> &EdgeConstraints {
        &self.constraints
    }

    /// Constant of the `container.bottom = surface.bottom + constant` constraint
    pub fn bottom_offset(&self) -> f32 {
        self.constraints.bottom
    }

    pub fn set_bottom_offset(&mut self, offset: f32) {
        self.constraints.bottom = offset;
    }

    /// Restrict rounding to the top two corners, or round all four
    pub fn set_corner_mask(&mut self, top_only: bool) {
        self.mask_corners = if top_only {
            Corners::TOP
        } else {
            Corners::all()
        };
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    pub(crate) fn set_corner_radius(&mut self, radius: f32) {
        self.corner_radius = radius;
    }

    pub fn mask_corners(&self) -> Corners {
        self.mask_corners
    }

    pub fn mask(&self) -> ContainerMask {
        if self.supports_partial_mask {
            ContainerMask::Rounded(CornerRadius::masked(self.corner_radius, self.mask_corners))
        } else if self.mask_corners == Corners::all() {
            ContainerMask::Rounded(CornerRadius::uniform(self.corner_radius))
        } else {
            ContainerMask::Rectangle
        }
    }

    pub fn overlay(&self) -> Option<MaskOverlay> {
        let needs_overlay = !self.supports_partial_mask
            && self.mask_corners != Corners::all()
            && self.corner_radius > 0.0;
        needs_overlay.then(|| MaskOverlay {
            radius: CornerRadius::masked(self.corner_radius, self.mask_corners),
            color: self.background_color,
        })
    }

    pub fn clips_to_bounds(&self) -> bool {
        true
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub(crate) fn set_background_color(&mut self, color: Color) {
        self.background_color = color;
    }

    /// Shadow as last applied by a render pass
    pub fn shadow(&self) -> Option<&Shadow> {
        self.shadow.as_ref()
    }

    pub(crate) fn set_shadow(&mut self, shadow: Shadow) {
        self.shadow = Some(shadow);
    }

    /// Frame relative to the surface, as of the last layout pass
    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn bounds(&self) -> Rect {
        self.frame.bounds()
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }
}

/// The inner, unclipped layer holding the panel body
#[derive(Clone, Debug)]
pub struct ContentLayer {
    node: LayoutNodeId,
    constraints: EdgeConstraints,
    border: Border,
    frame: Rect,
    drawable: Rect,
    children: SmallVec<[LayoutNodeId; 2]>,
}

impl ContentLayer {
    pub(crate) fn new(node: LayoutNodeId) -> Self {
        Self {
            node,
            constraints: EdgeConstraints::PINNED,
            border: Border::default(),
            frame: Rect::ZERO,
            drawable: Rect::ZERO,
            children: SmallVec::new(),
        }
    }

    pub fn node(&self) -> LayoutNodeId {
        self.node
    }

    pub fn constraints(&self) -> &EdgeConstraints {
        &self.constraints
    }

    /// Constant of the `content.bottom = container.bottom + constant` constraint
    pub fn bottom_offset(&self) -> f32 {
        self.constraints.bottom
    }

    pub fn set_bottom_offset(&mut self, offset: f32) {
        self.constraints.bottom = offset;
    }

    pub fn clips_to_bounds(&self) -> bool {
        false
    }

    /// Border as last applied by a render pass
    pub fn border(&self) -> &Border {
        &self.border
    }

    pub(crate) fn set_border(&mut self, border: Border) {
        self.border = border;
    }

    /// Constrained frame relative to the container, as of the last layout pass
    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    /// Area the renderer paints into. Tracks the container's bounds, not
    /// the constrained frame.
    pub fn drawable(&self) -> Rect {
        self.drawable
    }

    pub(crate) fn set_drawable(&mut self, drawable: Rect) {
        self.drawable = drawable;
    }

    /// Attached content views, in attachment order
    pub fn children(&self) -> &[LayoutNodeId] {
        &self.children
    }

    pub(crate) fn push_child(&mut self, child: LayoutNodeId) {
        self.children.push(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::KeyData;

    fn node() -> LayoutNodeId {
        LayoutNodeId::from(KeyData::from_ffi(1))
    }

    fn container(partial: bool) -> ContainerLayer {
        ContainerLayer::new(
            node(),
            SurfaceCapabilities {
                supports_partial_corner_mask: partial,
            },
        )
    }

    #[test]
    fn test_partial_mask_rounds_top_corners_only() {
        let mut layer = container(true);
        layer.set_corner_radius(16.0);
        layer.set_corner_mask(true);

        assert_eq!(
            layer.mask(),
            ContainerMask::Rounded(CornerRadius::masked(16.0, Corners::TOP))
        );
        assert!(layer.overlay().is_none());
    }

    #[test]
    fn test_fallback_mask_uses_rectangle_and_overlay() {
        let mut layer = container(false);
        layer.set_background_color(Color::WHITE);
        layer.set_corner_radius(16.0);
        layer.set_corner_mask(true);

        assert_eq!(layer.mask(), ContainerMask::Rectangle);
        let overlay = layer.overlay().unwrap();
        assert_eq!(overlay.radius.to_array(), [16.0, 16.0, 0.0, 0.0]);
        assert_eq!(overlay.color, Color::WHITE);
    }

    #[test]
    fn test_fallback_full_rounding_needs_no_overlay() {
        let mut layer = container(false);
        layer.set_corner_radius(8.0);
        layer.set_corner_mask(false);

        assert_eq!(layer.mask(), ContainerMask::Rounded(CornerRadius::uniform(8.0)));
        assert!(layer.overlay().is_none());
    }

    #[test]
    fn test_fallback_without_radius_needs_no_overlay() {
        let layer = container(false);
        assert!(layer.overlay().is_none());
    }

    #[test]
    fn test_content_keeps_attachment_order() {
        let mut content = ContentLayer::new(node());
        let a = LayoutNodeId::from(KeyData::from_ffi(2));
        let b = LayoutNodeId::from(KeyData::from_ffi(3));
        content.push_child(a);
        content.push_child(b);
        content.push_child(a);

        assert_eq!(content.children(), &[a, b, a]);
        assert!(!content.clips_to_bounds());
    }
}
