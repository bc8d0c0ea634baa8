//! Spring parameters and spring physics
//!
//! Designers describe a spring by how it *feels*: a damping ratio (1.0 settles
//! without overshoot, below 1.0 bounces) and a frequency response (roughly the
//! time, in seconds, the spring takes to respond). Integrators want physical
//! quantities instead. [`convert`] is the single translation between the two.
//!
//! The convention is the damped harmonic oscillator `m·x'' + c·x' + k·x = 0`
//! with unit mass:
//!
//! ```text
//! k = (2π / response)² · m
//! c = 4π · ζ · m / response
//! ```
//!
//! which gives natural frequency `ω = 2π / response` and `c = 2ζ·√(k·m)`.

use std::f32::consts::TAU;

use drift_core::Vec2;

/// Spring integration never takes a step longer than this, so a slow frame
/// cannot blow up a stiff spring.
const MAX_SUBSTEP: f32 = 1.0 / 240.0;

/// Longest frame a single [`Spring::step`] simulates. Longer gaps, such as
/// waking from sleep, are treated as one frame of this length.
const MAX_FRAME: f32 = 0.25;

/// Distance and speed below which a spring snaps to its target
const REST_THRESHOLD: f32 = 0.01;

/// Physical parameters for a mass-spring-damper, as produced by [`convert`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParameters {
    pub mass: f32,
    pub stiffness: f32,
    pub damping: f32,
    pub initial_velocity: Vec2,
}

impl SpringParameters {
    /// Same as [`convert`]
    pub fn from_response(
        damping_ratio: f32,
        frequency_response: f32,
        initial_velocity: Vec2,
    ) -> Self {
        convert(damping_ratio, frequency_response, initial_velocity)
    }

    /// The mass/stiffness/damping triple without the initial velocity
    pub fn config(&self) -> SpringConfig {
        SpringConfig::new(self.stiffness, self.damping, self.mass)
    }
}

/// Convert a damping ratio and frequency response into spring parameters.
///
/// Mass is fixed at 1 so stiffness and damping are comparable across calls.
/// The initial velocity is passed through untouched.
///
/// # Panics
///
/// Panics if `frequency_response` is not strictly positive. That is a
/// misconfigured caller, not a runtime condition.
pub fn convert(
    damping_ratio: f32,
    frequency_response: f32,
    initial_velocity: Vec2,
) -> SpringParameters {
    assert!(
        frequency_response > 0.0,
        "spring frequency response must be positive, got {frequency_response}"
    );
    debug_assert!(
        damping_ratio >= 0.0,
        "spring damping ratio must not be negative, got {damping_ratio}"
    );

    let mass = 1.0_f32;
    let stiffness = (TAU / frequency_response).powi(2) * mass;
    let damping = 2.0 * TAU * damping_ratio * mass / frequency_response;

    tracing::trace!(
        damping_ratio,
        frequency_response,
        stiffness,
        damping,
        "converted spring parameters"
    );

    SpringParameters {
        mass,
        stiffness,
        damping,
        initial_velocity,
    }
}

/// Mass, stiffness and damping of a spring
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub const fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Build from the designer-facing parameters, see [`convert`]
    pub fn from_response(damping_ratio: f32, frequency_response: f32) -> Self {
        convert(damping_ratio, frequency_response, Vec2::ZERO).config()
    }

    /// Fast, no visible overshoot
    pub const fn stiff() -> Self {
        Self::new(400.0, 30.0, 1.0)
    }

    /// Quick with a hint of bounce
    pub const fn snappy() -> Self {
        Self::new(300.0, 20.0, 1.0)
    }

    pub const fn gentle() -> Self {
        Self::new(120.0, 14.0, 1.0)
    }

    pub const fn wobbly() -> Self {
        Self::new(180.0, 12.0, 1.0)
    }

    /// Heavily overdamped
    pub const fn molasses() -> Self {
        Self::new(280.0, 120.0, 1.0)
    }

    /// Recover ζ = c / (2·√(k·m))
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Recover the response time 2π·√(m / k)
    pub fn frequency_response(&self) -> f32 {
        TAU * (self.mass / self.stiffness).sqrt()
    }
}

impl Default for SpringConfig {
    /// Critically damped, 0.3s response
    fn default() -> Self {
        Self::from_response(1.0, 0.3)
    }
}

/// A one-dimensional spring, integrated with RK4
#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
    settled: bool,
}

impl Spring {
    /// A spring resting at `initial`
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
            settled: true,
        }
    }

    /// A spring seeded from converted parameters.
    ///
    /// Panels move vertically, so the y component of the initial velocity is
    /// used.
    pub fn from_parameters(params: &SpringParameters, initial: f32) -> Self {
        Self::new(params.config(), initial).with_velocity(params.initial_velocity.y)
    }

    pub fn with_velocity(mut self, velocity: f32) -> Self {
        self.velocity = velocity;
        self.settled = velocity == 0.0 && self.value == self.target;
        self
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Retarget the spring. Current velocity is kept so interrupted motion
    /// stays continuous.
    pub fn set_target(&mut self, target: f32) {
        if target != self.target {
            self.target = target;
            self.settled = false;
        }
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Advance the simulation by `dt` seconds. Frames longer than a quarter
    /// second advance by a quarter second; NaN or non-positive `dt` is a no-op.
    pub fn step(&mut self, dt: f32) {
        if self.settled || dt.is_nan() || dt <= 0.0 {
            return;
        }

        let dt = dt.min(MAX_FRAME);
        let substeps = (dt / MAX_SUBSTEP).ceil().max(1.0) as u32;
        let h = dt / substeps as f32;
        for _ in 0..substeps {
            self.integrate(h);
        }

        if (self.value - self.target).abs() < REST_THRESHOLD
            && self.velocity.abs() < REST_THRESHOLD
        {
            self.value = self.target;
            self.velocity = 0.0;
            self.settled = true;
        }
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let SpringConfig {
            stiffness,
            damping,
            mass,
        } = self.config;
        (-stiffness * (x - self.target) - damping * v) / mass
    }

    fn integrate(&mut self, h: f32) {
        let (x, v) = (self.value, self.velocity);

        let k1x = v;
        let k1v = self.acceleration(x, v);

        let k2x = v + 0.5 * h * k1v;
        let k2v = self.acceleration(x + 0.5 * h * k1x, k2x);

        let k3x = v + 0.5 * h * k2v;
        let k3v = self.acceleration(x + 0.5 * h * k2x, k3x);

        let k4x = v + h * k3v;
        let k4v = self.acceleration(x + h * k3x, k4x);

        self.value = x + h / 6.0 * (k1x + 2.0 * k2x + 2.0 * k3x + k4x);
        self.velocity = v + h / 6.0 * (k1v + 2.0 * k2v + 2.0 * k3v + k4v);
    }
}
