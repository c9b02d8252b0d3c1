//! Pinball Core - a headless 2D pinball simulation
//!
//! The crate owns the physics/collision/state-update loop for a classic
//! single-ball pinball table: gravity, static walls, scoring bumpers and two
//! player-actuated flippers. Rendering, raw input wiring and frame pacing are
//! external collaborators: a host calls [`sim::tick`] once per frame, feeds
//! flipper intent flags in between, and reads the state back out to draw.
//!
//! Core modules:
//! - `sim`: simulation (physics, collisions, game state)

pub mod sim;

pub use sim::{Ball, Bumper, Flipper, FlipperSide, GameEvent, GameState, Layout, Wall, tick};

/// Game configuration constants
pub mod consts {
    use std::f32::consts::{FRAC_PI_4, FRAC_PI_6};

    /// Playfield dimensions (canvas-style coordinates, y grows downward)
    pub const PLAYFIELD_WIDTH: f32 = 480.0;
    pub const PLAYFIELD_HEIGHT: f32 = 640.0;
    /// Drain margin below the playfield before the ball counts as lost
    pub const DRAIN_MARGIN: f32 = 40.0;

    /// Gravity (units per step squared, applied to vy each step)
    pub const GRAVITY: f32 = 0.23;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 12.0;
    pub const BALL_SPAWN_X: f32 = PLAYFIELD_WIDTH / 2.0;
    pub const BALL_SPAWN_Y: f32 = PLAYFIELD_HEIGHT - 120.0;
    /// Serve velocity: horizontal sign randomized per serve, vertical is up
    pub const BALL_SERVE_VX: f32 = 2.5;
    pub const BALL_SERVE_VY: f32 = -8.0;

    /// Flipper geometry (oriented rectangle around the pivot)
    pub const FLIPPER_HALF_LENGTH: f32 = 40.0;
    pub const FLIPPER_HALF_WIDTH: f32 = 9.0;
    /// Flipper rest/active angle targets for the left side; negated on the right
    pub const FLIPPER_ANGLE_UP: f32 = FRAC_PI_4;
    pub const FLIPPER_ANGLE_DOWN: f32 = -FRAC_PI_6;
    /// Exponential easing factor per step toward the target angle
    pub const FLIPPER_SMOOTHING: f32 = 0.4;
    /// Extra impulse along the contact normal while a flipper is held up
    pub const FLIPPER_IMPULSE: f32 = 8.0;
    /// Flipper pivot placement
    pub const FLIPPER_PIVOT_Y: f32 = PLAYFIELD_HEIGHT - 60.0;
    pub const FLIPPER_PIVOT_OFFSET_X: f32 = 60.0;

    /// Speed multiplier applied on every bumper hit (gain, never clamped)
    pub const BUMPER_SPEED_GAIN: f32 = 1.05;
    /// Gap left between ball and bumper after separation, so the same bumper
    /// does not re-trigger on the next step
    pub const BUMPER_SEPARATION: f32 = 1.0;
}
