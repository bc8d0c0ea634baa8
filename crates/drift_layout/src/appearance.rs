//! Surface presentation attributes
//!
//! Everything here is paint-only: none of it feeds the layout engine.

use drift_core::{Border, Color, Shadow, Vec2};
use serde::{Deserialize, Serialize};

/// Presentation attributes of a surface
///
/// Deserializable from the `[appearance]` table of a surface config file.
/// Missing fields fall back to the defaults below.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceAppearance {
    /// Fill of the rounded container
    pub background_color: Color,
    /// Radius of the container's top corners
    pub corner_radius: f32,
    pub shadow_hidden: bool,
    pub shadow_color: Color,
    pub shadow_offset: Vec2,
    pub shadow_opacity: f32,
    /// Blur radius of the shadow, in points
    pub shadow_radius: f32,
    pub border_color: Option<Color>,
    pub border_width: f32,
}

impl Default for SurfaceAppearance {
    fn default() -> Self {
        Self {
            background_color: Color::WHITE,
            corner_radius: 0.0,
            shadow_hidden: false,
            shadow_color: Color::BLACK,
            shadow_offset: Vec2::new(0.0, 1.0),
            shadow_opacity: 0.2,
            shadow_radius: 3.0,
            border_color: None,
            border_width: 0.0,
        }
    }
}

impl SurfaceAppearance {
    pub fn shadow(&self) -> Shadow {
        Shadow::new(
            self.shadow_offset,
            self.shadow_radius,
            self.shadow_color,
            self.shadow_opacity,
        )
    }

    pub fn border(&self) -> Border {
        Border::new(self.border_color, self.border_width)
    }
}

/// What the rendering backend can do, resolved once when a surface is built
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceCapabilities {
    /// The backend can round a subset of a layer's corners. Without it the
    /// container is clipped to a plain rectangle and a [`MaskOverlay`] is
    /// emitted instead.
    ///
    /// [`MaskOverlay`]: crate::layers::MaskOverlay
    pub supports_partial_corner_mask: bool,
}

impl Default for SurfaceCapabilities {
    fn default() -> Self {
        Self {
            supports_partial_corner_mask: true,
        }
    }
}
