//! Drift Animation
//!
//! Spring vocabulary for panel transitions.
//!
//! # Features
//!
//! - **Parameter conversion**: damping ratio + frequency response to
//!   mass / stiffness / damping
//! - **Spring Physics**: RK4-integrated springs driven by those parameters
//! - **Interruptible**: retargeting a spring keeps its current velocity
//!
//! # Example
//!
//! ```rust
//! use drift_animation::{convert, Spring};
//! use drift_core::Vec2;
//!
//! let params = convert(1.0, 0.3, Vec2::ZERO);
//! assert_eq!(params.mass, 1.0);
//!
//! let mut spring = Spring::from_parameters(&params, 0.0);
//! spring.set_target(100.0);
//! for _ in 0..120 {
//!     spring.step(1.0 / 120.0);
//! }
//! assert!(spring.is_settled());
//! ```

pub mod spring;

pub use spring::{convert, Spring, SpringConfig, SpringParameters};
