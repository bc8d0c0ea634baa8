//! Layer attributes for Drift surfaces
//!
//! Geometry and the visual attributes a rendering layer paints: background
//! colors, corner masks, shadows and borders. None of these types know about
//! layout; a surface resolves frames separately and hands both to the renderer.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Core Geometry Types
// ─────────────────────────────────────────────────────────────────────────────

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convert to a Rect at the origin (0, 0)
    pub const fn to_rect(self) -> Rect {
        Rect {
            origin: Point::ZERO,
            size: self,
        }
    }
}

/// 2D rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Y coordinate of the bottom edge
    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// The same rect in its own coordinate space (origin at zero)
    pub fn bounds(&self) -> Rect {
        self.size.to_rect()
    }
}

/// 2D vector
///
/// Serialized as an `[x, y]` array.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 2]", into = "[f32; 2]")]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(v: Vec2) -> Self {
        [v.x, v.y]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Color and Visual Types
// ─────────────────────────────────────────────────────────────────────────────

/// RGBA color (linear space)
///
/// Serialized as an `[r, g, b, a]` array.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for [f32; 4] {
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

bitflags! {
    /// Which corners of a rectangle a corner radius applies to
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Corners: u8 {
        const TOP_LEFT = 1;
        const TOP_RIGHT = 1 << 1;
        const BOTTOM_RIGHT = 1 << 2;
        const BOTTOM_LEFT = 1 << 3;

        const TOP = Self::TOP_LEFT.bits() | Self::TOP_RIGHT.bits();
        const BOTTOM = Self::BOTTOM_LEFT.bits() | Self::BOTTOM_RIGHT.bits();
    }
}

/// Corner radii for rounded rectangles
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadius {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadius {
    pub const ZERO: CornerRadius = CornerRadius {
        top_left: 0.0,
        top_right: 0.0,
        bottom_right: 0.0,
        bottom_left: 0.0,
    };

    pub fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// Apply `radius` to the selected corners only; the rest stay square
    pub fn masked(radius: f32, corners: Corners) -> Self {
        let pick = |corner: Corners| if corners.contains(corner) { radius } else { 0.0 };
        Self {
            top_left: pick(Corners::TOP_LEFT),
            top_right: pick(Corners::TOP_RIGHT),
            bottom_right: pick(Corners::BOTTOM_RIGHT),
            bottom_left: pick(Corners::BOTTOM_LEFT),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.to_array().iter().all(|r| *r <= 0.0)
    }

    pub fn to_array(&self) -> [f32; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }
}

impl From<f32> for CornerRadius {
    fn from(radius: f32) -> Self {
        Self::uniform(radius)
    }
}

/// Drop shadow as painted under a layer
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Shadow {
    pub offset: Vec2,
    /// Blur radius in points
    pub blur: f32,
    pub color: Color,
    /// Opacity multiplier applied on top of `color.a`
    pub opacity: f32,
}

impl Shadow {
    pub fn new(offset: Vec2, blur: f32, color: Color, opacity: f32) -> Self {
        Self {
            offset,
            blur,
            color,
            opacity,
        }
    }

    /// Color with the opacity multiplier folded into alpha
    pub fn effective_color(&self) -> Color {
        self.color.with_alpha(self.color.a * self.opacity)
    }
}

/// Stroke drawn along the inside of a layer's bounds
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Border {
    pub color: Option<Color>,
    pub width: f32,
}

impl Border {
    pub fn new(color: Option<Color>, width: f32) -> Self {
        Self { color, width }
    }

    /// Whether the renderer has anything to stroke
    pub fn is_visible(&self) -> bool {
        self.width > 0.0 && self.color.is_some_and(|c| !c.is_transparent())
    }
}
