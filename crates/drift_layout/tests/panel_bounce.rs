//! Integration tests for a spring-driven bounce
//!
//! These tests verify that:
//! - A spring built from a surface config can drive bottom overflow per frame
//! - Per-frame overflow only ever asks the driver for constraint updates
//! - The surface settles back to its pinned constraints

use std::cell::RefCell;
use std::rc::Rc;

use drift_animation::Spring;
use drift_core::{Invalidation, Size, Vec2};
use drift_layout::{EdgeConstraints, SurfaceCapabilities, SurfaceConfig, SurfaceView};

#[test]
fn test_spring_bounce_settles_to_pinned() {
    let config = SurfaceConfig::from_toml_str(
        r#"
        [appearance]
        corner_radius = 16.0

        [transition]
        damping_ratio = 0.7
        frequency_response = 0.25
        "#,
    )
    .unwrap();

    let mut surface = SurfaceView::from_config(
        Size::new(390.0, 844.0),
        SurfaceCapabilities::default(),
        &config,
    )
    .unwrap();
    surface.layout().unwrap();
    surface.apply_pending_changes();

    let requests = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&requests);
    surface.set_invalidation_sink(move |flags: Invalidation| log.borrow_mut().push(flags));

    // Released mid-overscroll, flung back toward rest
    let params = config.transition.spring_parameters(Vec2::new(0.0, -600.0));
    let mut spring = Spring::from_parameters(&params, 80.0);
    spring.set_target(0.0);

    let mut frames = 0;
    while !spring.is_settled() && frames < 600 {
        spring.step(1.0 / 120.0);
        surface.set_bottom_overflow(spring.value());

        // What a driver does each frame
        surface.update_constraints().unwrap();
        assert_eq!(
            surface.container().bottom_offset(),
            -surface.content().bottom_offset()
        );
        frames += 1;
    }

    assert!(spring.is_settled(), "spring did not settle in {frames} frames");
    assert_eq!(surface.bottom_overflow(), 0.0);
    assert_eq!(surface.container().constraints(), &EdgeConstraints::PINNED);
    assert_eq!(surface.content().constraints(), &EdgeConstraints::PINNED);

    // Constraint updates only; no relayout, no repaint of presentation
    assert!(requests
        .borrow()
        .iter()
        .all(|flags| *flags == Invalidation::CONSTRAINTS));
    assert!(!requests.borrow().is_empty());
}

#[test]
fn test_drawable_follows_container_after_bounce_frame() {
    let mut surface =
        SurfaceView::new(Size::new(390.0, 844.0), SurfaceCapabilities::default()).unwrap();
    surface.set_corner_radius(16.0);
    surface.set_bottom_overflow(44.0);
    surface.layout().unwrap();
    surface.apply_pending_changes();

    assert_eq!(surface.container().frame().height(), 800.0);
    assert_eq!(surface.content().drawable(), surface.container().bounds());
    assert_eq!(surface.content().frame().height(), 844.0);
}
