//! Drift Core
//!
//! Foundational types shared by the Drift floating-panel crates:
//!
//! - **Geometry**: points, sizes, rects and vectors in logical points
//! - **Visual attributes**: colors, corner radii and masks, shadows, borders
//! - **Invalidation**: flags a surface raises so the driver knows what to redo
//!
//! # Example
//!
//! ```rust
//! use drift_core::{CornerRadius, Corners};
//!
//! // A panel flush with the bottom of the screen only rounds its top corners
//! let radius = CornerRadius::masked(12.0, Corners::TOP);
//! assert_eq!(radius.top_left, 12.0);
//! assert_eq!(radius.bottom_left, 0.0);
//! ```

pub mod invalidation;
pub mod layer;

pub use invalidation::{Invalidation, InvalidationSink};
pub use layer::{Border, Color, CornerRadius, Corners, Point, Rect, Shadow, Size, Vec2};
