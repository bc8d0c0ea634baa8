//! SurfaceView - the body of a floating panel
//!
//! A surface is a transparent root holding two layers (see [`crate::layers`])
//! and a grabber handle. The panel controller drives it with two kinds of
//! mutation:
//!
//! - **Bottom overflow** (every frame while dragging or bouncing): moves the
//!   container's bottom edge up by `overflow` and the content's bottom edge
//!   down by the same amount, so content always reaches the surface's true
//!   bottom while the rounded container stops short of it. Only the two
//!   bottom constraints change; the driver is asked for a constraint update,
//!   never a full layout.
//! - **Presentation** (corner radius, shadow, border, background): recorded
//!   and flagged for the next render pass. Frames are untouched.
//!
//! # Driver protocol
//!
//! ```text
//! setters ──► Invalidation flags ──► InvalidationSink (once per flag)
//!                                        │
//!             layout()  ◄────────────────┤  CONSTRAINTS / LAYOUT
//!             apply_pending_changes() ◄──┘  RENDER
//! ```

use drift_core::{Color, Invalidation, InvalidationSink, Rect, Shadow, Size, Vec2};
use taffy::prelude::{AvailableSpace, Dimension, Size as TaffySize, Style};

use crate::appearance::{SurfaceAppearance, SurfaceCapabilities};
use crate::config::SurfaceConfig;
use crate::constraints::EdgeConstraints;
use crate::error::LayoutError;
use crate::grabber::{GrabberHandle, GrabberStyle};
use crate::layers::{ContainerLayer, ContentLayer};
use crate::tree::{LayoutNodeId, LayoutTree};

/// A floating panel surface
pub struct SurfaceView {
    tree: LayoutTree,
    root: LayoutNodeId,
    size: Size,
    container: ContainerLayer,
    content: ContentLayer,
    grabber: GrabberHandle,
    appearance: SurfaceAppearance,
    bottom_overflow: f32,
    pending: Invalidation,
    sink: Option<Box<dyn InvalidationSink>>,
}

impl SurfaceView {
    /// Create a surface with default appearance and grabber
    pub fn new(size: Size, capabilities: SurfaceCapabilities) -> Result<Self, LayoutError> {
        Self::with_appearance(
            size,
            capabilities,
            SurfaceAppearance::default(),
            GrabberStyle::default(),
        )
    }

    /// Create a surface from a loaded config
    pub fn from_config(
        size: Size,
        capabilities: SurfaceCapabilities,
        config: &SurfaceConfig,
    ) -> Result<Self, LayoutError> {
        Self::with_appearance(
            size,
            capabilities,
            config.appearance.clone(),
            config.grabber,
        )
    }

    pub fn with_appearance(
        size: Size,
        capabilities: SurfaceCapabilities,
        appearance: SurfaceAppearance,
        grabber: GrabberStyle,
    ) -> Result<Self, LayoutError> {
        let mut tree = LayoutTree::new();

        let root = tree.create_node(root_style(size))?;
        let container_node = tree.create_node(EdgeConstraints::PINNED.to_style())?;
        let content_node = tree.create_node(EdgeConstraints::PINNED.to_style())?;
        let grabber_node = tree.create_node(grabber.to_layout_style(size.width))?;

        tree.add_child(root, container_node)?;
        tree.add_child(container_node, content_node)?;
        // Added last so it stacks above the clipped container
        tree.add_child(root, grabber_node)?;

        let mut container = ContainerLayer::new(container_node, capabilities);
        container.set_corner_radius(appearance.corner_radius);
        container.set_corner_mask(true);
        container.set_background_color(appearance.background_color);

        tracing::debug!(
            width = size.width,
            height = size.height,
            partial_corner_mask = capabilities.supports_partial_corner_mask,
            "created surface"
        );

        Ok(Self {
            tree,
            root,
            size,
            container,
            content: ContentLayer::new(content_node),
            grabber: GrabberHandle::new(grabber_node, grabber),
            appearance,
            bottom_overflow: 0.0,
            pending: Invalidation::LAYOUT | Invalidation::RENDER,
            sink: None,
        })
    }

    /// Register the driver that should hear about invalidations
    pub fn set_invalidation_sink(&mut self, sink: impl InvalidationSink + 'static) {
        self.sink = Some(Box::new(sink));
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn root(&self) -> LayoutNodeId {
        self.root
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn container(&self) -> &ContainerLayer {
        &self.container
    }

    pub fn content(&self) -> &ContentLayer {
        &self.content
    }

    pub fn grabber(&self) -> &GrabberHandle {
        &self.grabber
    }

    pub fn appearance(&self) -> &SurfaceAppearance {
        &self.appearance
    }

    pub fn bottom_overflow(&self) -> f32 {
        self.bottom_overflow
    }

    /// Work the driver has not yet performed
    pub fn invalidation(&self) -> Invalidation {
        self.pending
    }

    pub fn tree(&self) -> &LayoutTree {
        &self.tree
    }

    /// Frame of any node in this surface, relative to its parent
    pub fn frame_of(&self, node: LayoutNodeId) -> Option<Rect> {
        self.tree.frame(node)
    }

    /// Height of the strip at the top reserved for the grabber bar
    pub fn top_grabber_bar_height(&self) -> f32 {
        self.grabber.style().bar_area_height()
    }

    /// The surface itself paints nothing; the container carries the color
    pub fn background_color(&self) -> Color {
        self.appearance.background_color
    }

    // =========================================================================
    // Layout mutations
    // =========================================================================

    /// Set how far the content extends past the container's bottom edge.
    ///
    /// Positive values pull the container up while the content keeps
    /// reaching the surface's bottom; negative values let the container hang
    /// below it. Non-finite values are ignored.
    pub fn set_bottom_overflow(&mut self, overflow: f32) {
        if !overflow.is_finite() {
            tracing::warn!(overflow, "ignoring non-finite bottom overflow");
            return;
        }
        // Normalize -0.0 so zero overflow restores the pinned constants bit for bit
        let overflow = overflow + 0.0;
        if overflow.to_bits() == self.bottom_overflow.to_bits() {
            return;
        }

        self.bottom_overflow = overflow;
        self.container.set_bottom_offset(0.0 - overflow);
        self.content.set_bottom_offset(overflow);

        tracing::trace!(overflow, "bottom overflow changed");
        self.invalidate(Invalidation::CONSTRAINTS);
    }

    pub fn set_size(&mut self, size: Size) {
        if size != self.size {
            self.size = size;
            self.invalidate(Invalidation::LAYOUT);
        }
    }

    pub fn set_grabber_style(&mut self, style: GrabberStyle) {
        if style != *self.grabber.style() {
            *self.grabber.style_mut() = style;
            self.invalidate(Invalidation::LAYOUT);
        }
    }

    /// Create a view node in this surface's layout tree, ready for
    /// [`add_content`](Self::add_content)
    pub fn create_view(&mut self, style: Style) -> Result<LayoutNodeId, LayoutError> {
        self.tree.create_node(style)
    }

    /// Attach `view` as a full-bleed child of the content layer.
    ///
    /// Each call adds a child; attaching the same view twice is the caller's
    /// mistake and is not detected. Ids unknown to this surface's tree and
    /// the surface's own root, container, content and grabber nodes are
    /// skipped with a warning.
    pub fn add_content(&mut self, view: LayoutNodeId) {
        if let Err(err) = self.attach_content(view) {
            tracing::warn!(?view, %err, "content view not attached");
        }
    }

    fn attach_content(&mut self, view: LayoutNodeId) -> Result<(), LayoutError> {
        let reserved = [
            self.root,
            self.container.node(),
            self.content.node(),
            self.grabber.node(),
        ];
        if reserved.contains(&view) {
            return Err(LayoutError::ReservedNode(view));
        }

        let pinned = EdgeConstraints::PINNED.to_style();
        let mut style = self.tree.style(view)?.clone();
        style.position = pinned.position;
        style.inset = pinned.inset;

        self.tree.set_style(view, style)?;
        self.tree.add_child(self.content.node(), view)?;
        self.content.push_child(view);

        self.invalidate(Invalidation::LAYOUT);
        Ok(())
    }

    // =========================================================================
    // Presentation mutations
    // =========================================================================

    /// Round the container's top corners. Bottom corners stay square since
    /// the panel sits on the bottom edge of the screen.
    pub fn set_corner_radius(&mut self, radius: f32) {
        self.appearance.corner_radius = radius;
        self.container.set_corner_radius(radius);
        self.container.set_corner_mask(true);
        self.invalidate(Invalidation::RENDER);
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.appearance.background_color = color;
        self.invalidate(Invalidation::RENDER);
    }

    pub fn set_shadow_hidden(&mut self, hidden: bool) {
        self.appearance.shadow_hidden = hidden;
        self.invalidate(Invalidation::RENDER);
    }

    pub fn set_shadow_color(&mut self, color: Color) {
        self.appearance.shadow_color = color;
        self.invalidate(Invalidation::RENDER);
    }

    pub fn set_shadow_offset(&mut self, offset: Vec2) {
        self.appearance.shadow_offset = offset;
        self.invalidate(Invalidation::RENDER);
    }

    pub fn set_shadow_opacity(&mut self, opacity: f32) {
        self.appearance.shadow_opacity = opacity;
        self.invalidate(Invalidation::RENDER);
    }

    pub fn set_shadow_radius(&mut self, radius: f32) {
        self.appearance.shadow_radius = radius;
        self.invalidate(Invalidation::RENDER);
    }

    pub fn set_border_color(&mut self, color: Option<Color>) {
        self.appearance.border_color = color;
        self.invalidate(Invalidation::RENDER);
    }

    pub fn set_border_width(&mut self, width: f32) {
        self.appearance.border_width = width;
        self.invalidate(Invalidation::RENDER);
    }

    // =========================================================================
    // Driver entry points
    // =========================================================================

    /// Push changed bottom constraints into the layout engine.
    ///
    /// Only the container and content nodes are restyled, so the engine
    /// re-solves just their branch.
    pub fn update_constraints(&mut self) -> Result<(), LayoutError> {
        if !self.pending.contains(Invalidation::CONSTRAINTS) {
            return Ok(());
        }

        self.tree
            .set_style(self.container.node(), self.container.constraints().to_style())?;
        self.tree
            .set_style(self.content.node(), self.content.constraints().to_style())?;
        self.pending.remove(Invalidation::CONSTRAINTS);
        Ok(())
    }

    /// Resolve pending constraint and layout work and record the new frames.
    ///
    /// Raises [`Invalidation::RENDER`] when the container's frame moved, since
    /// the content's drawable area follows it.
    pub fn layout(&mut self) -> Result<(), LayoutError> {
        self.update_constraints()?;

        if self.pending.contains(Invalidation::LAYOUT) {
            self.tree.set_style(self.root, root_style(self.size))?;
            self.tree.set_style(
                self.grabber.node(),
                self.grabber.style().to_layout_style(self.size.width),
            )?;
        }

        let available = TaffySize {
            width: AvailableSpace::Definite(self.size.width),
            height: AvailableSpace::Definite(self.size.height),
        };
        self.tree.compute_layout(self.root, available)?;
        self.pending.remove(Invalidation::LAYOUT);

        let container_frame = self
            .tree
            .frame(self.container.node())
            .ok_or(LayoutError::UnknownNode(self.container.node()))?;
        let content_frame = self
            .tree
            .frame(self.content.node())
            .ok_or(LayoutError::UnknownNode(self.content.node()))?;

        let container_moved = container_frame != self.container.frame();
        self.container.set_frame(container_frame);
        self.content.set_frame(content_frame);

        tracing::trace!(
            container_height = container_frame.height(),
            content_height = content_frame.height(),
            "surface laid out"
        );

        if container_moved {
            self.invalidate(Invalidation::RENDER);
        }
        Ok(())
    }

    /// The render pass: write presentation attributes onto the layers.
    ///
    /// 1. Shadow onto the container, unless the shadow is hidden. A hidden
    ///    shadow leaves the last applied shadow in place; renderers are
    ///    expected to check `appearance().shadow_hidden` before painting it.
    /// 2. Background onto the container, border onto the content.
    /// 3. The content's drawable area is set to the container's bounds, not
    ///    to the content's constrained frame, so it fills the container
    ///    whatever the constraint solver has done so far.
    pub fn apply_pending_changes(&mut self) {
        if !self.appearance.shadow_hidden {
            self.container.set_shadow(self.appearance.shadow());
        }
        self.container
            .set_background_color(self.appearance.background_color);

        self.content.set_border(self.appearance.border());
        self.content.set_drawable(self.container.bounds());

        self.pending.remove(Invalidation::RENDER);
        tracing::debug!(
            shadow_hidden = self.appearance.shadow_hidden,
            corner_radius = self.container.corner_radius(),
            "applied surface presentation"
        );
    }

    /// The shadow a renderer should paint right now
    pub fn visible_shadow(&self) -> Option<&Shadow> {
        if self.appearance.shadow_hidden {
            None
        } else {
            self.container.shadow()
        }
    }

    fn invalidate(&mut self, flags: Invalidation) {
        let fresh = self.pending.raise(flags);
        if fresh.is_empty() {
            return;
        }
        if let Some(sink) = &self.sink {
            sink.invalidate(fresh);
        }
    }
}

fn root_style(size: Size) -> Style {
    Style {
        size: TaffySize {
            width: Dimension::Length(size.width),
            height: Dimension::Length(size.height),
        },
        ..Default::default()
    }
}
