//! Grabber handle placement
//!
//! The handle sits above the clipped container so content bleeding past the
//! rounded corners never covers it. Drawing the bar is up to the renderer;
//! this module only decides where it goes.

use drift_core::{Color, Size};
use serde::{Deserialize, Serialize};
use taffy::prelude::{
    Dimension, Display, LengthPercentageAuto, Position, Rect, Size as TaffySize, Style,
};

use crate::tree::LayoutNodeId;

/// Grabber bar geometry and color
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrabberStyle {
    pub width: f32,
    pub height: f32,
    /// Gap between the surface's top edge and the bar
    pub top_padding: f32,
    pub bar_color: Color,
    pub hidden: bool,
}

impl Default for GrabberStyle {
    fn default() -> Self {
        Self {
            width: 36.0,
            height: 5.0,
            top_padding: 6.0,
            bar_color: Color::rgb(0.76, 0.77, 0.76),
            hidden: false,
        }
    }
}

impl GrabberStyle {
    /// Height of the strip at the top of the surface reserved for the bar
    pub fn bar_area_height(&self) -> f32 {
        self.top_padding * 2.0 + self.height
    }

    /// The bar is drawn as a capsule
    pub fn corner_radius(&self) -> f32 {
        self.height / 2.0
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Style centering the bar horizontally in a surface `surface_width` wide
    pub(crate) fn to_layout_style(&self, surface_width: f32) -> Style {
        Style {
            display: if self.hidden {
                Display::None
            } else {
                Display::Block
            },
            position: Position::Absolute,
            inset: Rect {
                top: LengthPercentageAuto::Length(self.top_padding),
                left: LengthPercentageAuto::Length((surface_width - self.width) / 2.0),
                right: LengthPercentageAuto::Auto,
                bottom: LengthPercentageAuto::Auto,
            },
            size: TaffySize {
                width: Dimension::Length(self.width),
                height: Dimension::Length(self.height),
            },
            ..Default::default()
        }
    }
}

/// The grabber handle of a surface
#[derive(Clone, Debug)]
pub struct GrabberHandle {
    node: LayoutNodeId,
    style: GrabberStyle,
}

impl GrabberHandle {
    pub(crate) fn new(node: LayoutNodeId, style: GrabberStyle) -> Self {
        Self { node, style }
    }

    pub fn node(&self) -> LayoutNodeId {
        self.node
    }

    pub fn style(&self) -> &GrabberStyle {
        &self.style
    }

    pub(crate) fn style_mut(&mut self) -> &mut GrabberStyle {
        &mut self.style
    }
}
