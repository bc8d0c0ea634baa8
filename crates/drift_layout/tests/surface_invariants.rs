//! Property/fuzz-style invariants for surface mutations.
//!
//! Random streams of overflow and presentation mutations are applied to a
//! surface, and after every step the overflow constraints and the corner
//! mask are checked to be exactly what their own last setter asked for.

use drift_core::{Color, CornerRadius, Corners, Invalidation, Size, Vec2};
use drift_layout::{ContainerMask, EdgeConstraints, SurfaceCapabilities, SurfaceView};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Mutation {
    Overflow(f32),
    CornerRadius(f32),
    ShadowHidden(bool),
    ShadowOpacity(f32),
    ShadowOffset(f32, f32),
    BorderWidth(f32),
    Background(u32),
    Layout,
    Render,
}

fn mutation() -> impl Strategy<Value = Mutation> {
    prop_oneof![
        (-400.0f32..400.0).prop_map(Mutation::Overflow),
        (0.0f32..64.0).prop_map(Mutation::CornerRadius),
        any::<bool>().prop_map(Mutation::ShadowHidden),
        (0.0f32..1.0).prop_map(Mutation::ShadowOpacity),
        (-10.0f32..10.0, -10.0f32..10.0).prop_map(|(x, y)| Mutation::ShadowOffset(x, y)),
        (0.0f32..4.0).prop_map(Mutation::BorderWidth),
        (0u32..0xFF_FFFF).prop_map(Mutation::Background),
        Just(Mutation::Layout),
        Just(Mutation::Render),
    ]
}

fn new_surface(partial_mask: bool) -> SurfaceView {
    SurfaceView::new(
        Size::new(390.0, 844.0),
        SurfaceCapabilities {
            supports_partial_corner_mask: partial_mask,
        },
    )
    .expect("surface construction")
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

proptest! {
    #[test]
    fn overflow_and_corner_radius_stay_independent(
        partial_mask in any::<bool>(),
        steps in prop::collection::vec(mutation(), 1..64),
    ) {
        init_tracing();
        let mut surface = new_surface(partial_mask);
        let mut overflow = 0.0f32;
        let mut radius = 0.0f32;

        for step in steps {
            let laid_out = matches!(step, Mutation::Layout);
            match step {
                Mutation::Overflow(v) => {
                    surface.set_bottom_overflow(v);
                    overflow = v;
                }
                Mutation::CornerRadius(r) => {
                    surface.set_corner_radius(r);
                    radius = r;
                }
                Mutation::ShadowHidden(hidden) => surface.set_shadow_hidden(hidden),
                Mutation::ShadowOpacity(o) => surface.set_shadow_opacity(o),
                Mutation::ShadowOffset(x, y) => surface.set_shadow_offset(Vec2::new(x, y)),
                Mutation::BorderWidth(w) => surface.set_border_width(w),
                Mutation::Background(hex) => surface.set_background_color(Color::from_hex(hex)),
                Mutation::Layout => surface.layout().expect("layout"),
                Mutation::Render => surface.apply_pending_changes(),
            }

            prop_assert_eq!(surface.container().bottom_offset(), -overflow);
            prop_assert_eq!(surface.content().bottom_offset(), overflow);
            prop_assert_eq!(surface.container().corner_radius(), radius);
            prop_assert_eq!(surface.container().mask_corners(), Corners::TOP);
            if partial_mask {
                prop_assert_eq!(
                    surface.container().mask(),
                    ContainerMask::Rounded(CornerRadius::masked(radius, Corners::TOP))
                );
            } else {
                prop_assert_eq!(surface.container().mask(), ContainerMask::Rectangle);
            }
            if laid_out {
                prop_assert!(!surface
                    .invalidation()
                    .intersects(Invalidation::LAYOUT | Invalidation::CONSTRAINTS));
            }
        }
    }

    #[test]
    fn overflow_is_idempotent(v in -1000.0f32..1000.0) {
        let mut once = new_surface(true);
        once.set_bottom_overflow(v);

        let mut twice = new_surface(true);
        twice.set_bottom_overflow(v);
        twice.set_bottom_overflow(v);

        prop_assert_eq!(once.container().constraints(), twice.container().constraints());
        prop_assert_eq!(once.content().constraints(), twice.content().constraints());
    }

    #[test]
    fn overflow_round_trips_to_zero(v in -1000.0f32..1000.0) {
        let mut surface = new_surface(true);
        surface.set_bottom_overflow(v);
        surface.set_bottom_overflow(0.0);

        prop_assert_eq!(surface.container().constraints(), &EdgeConstraints::PINNED);
        prop_assert_eq!(surface.content().constraints(), &EdgeConstraints::PINNED);
        prop_assert_eq!(surface.container().bottom_offset().to_bits(), 0.0f32.to_bits());
    }

    #[test]
    fn content_reaches_surface_bottom(v in -200.0f32..200.0) {
        let v = v.round();
        let mut surface = new_surface(true);
        surface.set_bottom_overflow(v);
        surface.layout().expect("layout");

        let container = surface.container().frame();
        let content = surface.content().frame();
        prop_assert_eq!(container.max_y(), 844.0 - v);
        // Content frame is relative to the container
        prop_assert_eq!(container.y() + content.max_y(), 844.0);
    }
}
