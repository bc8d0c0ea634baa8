//! Drift Layout Engine
//!
//! Floating-panel surfaces laid out with Taffy.
//!
//! A [`SurfaceView`] splits a panel into a rounded, clipped container and an
//! unclipped content layer. A single signed bottom overflow moves their
//! bottom edges in opposite directions, letting content bleed past the
//! container's rounded edge without reshaping it.
//!
//! ```rust
//! use drift_core::Size;
//! use drift_layout::{SurfaceCapabilities, SurfaceView};
//!
//! let mut surface = SurfaceView::new(Size::new(390.0, 844.0), SurfaceCapabilities::default())?;
//! surface.set_corner_radius(12.0);
//! surface.set_bottom_overflow(24.0);
//!
//! surface.layout()?;
//! surface.apply_pending_changes();
//!
//! assert_eq!(surface.container().frame().height(), 820.0);
//! assert_eq!(surface.content().drawable().height(), 820.0);
//! # Ok::<(), drift_layout::LayoutError>(())
//! ```

pub mod appearance;
pub mod config;
pub mod constraints;
pub mod error;
pub mod grabber;
pub mod layers;
pub mod surface;
pub mod tree;

pub use appearance::{SurfaceAppearance, SurfaceCapabilities};
pub use config::{SurfaceConfig, TransitionConfig};
pub use constraints::EdgeConstraints;
pub use error::{ConfigError, LayoutError};
pub use grabber::{GrabberHandle, GrabberStyle};
pub use layers::{ContainerLayer, ContainerMask, ContentLayer, MaskOverlay};
pub use surface::SurfaceView;
pub use tree::{LayoutNodeId, LayoutTree};
