//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::layout::{Bumper, Layout, Wall};
use crate::consts::*;

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Renderer hint (0xRRGGBB), ignored by physics
    pub color: u32,
}

impl Ball {
    /// Place the ball at the serve point with a randomized horizontal
    /// direction and the fixed upward serve velocity
    pub fn serve(rng: &mut Pcg32) -> Self {
        let sign = if rng.random::<bool>() { 1.0 } else { -1.0 };
        Self {
            pos: Vec2::new(BALL_SPAWN_X, BALL_SPAWN_Y),
            vel: Vec2::new(BALL_SERVE_VX * sign, BALL_SERVE_VY),
            radius: BALL_RADIUS,
            color: 0xf5f542,
        }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// Which side a flipper sits on; determines the sign of its angle targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipperSide {
    Left,
    Right,
}

/// A player-actuated flipper
///
/// The flipper is an oriented rectangle rotating around a fixed pivot. Only
/// `angle` and `intent_up` change at runtime; the angle eases toward the
/// target selected by the intent flag, so collisions always see the current
/// mid-swing orientation rather than the commanded one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Flipper {
    pub side: FlipperSide,
    pub pivot: Vec2,
    /// Current angle in radians, eased toward [`Self::target_angle`]
    pub angle: f32,
    /// Whether the player is currently holding this flipper up
    pub intent_up: bool,
}

impl Flipper {
    pub fn new(side: FlipperSide) -> Self {
        let pivot_x = match side {
            FlipperSide::Left => PLAYFIELD_WIDTH / 2.0 - FLIPPER_PIVOT_OFFSET_X,
            FlipperSide::Right => PLAYFIELD_WIDTH / 2.0 + FLIPPER_PIVOT_OFFSET_X,
        };
        let mut flipper = Self {
            side,
            pivot: Vec2::new(pivot_x, FLIPPER_PIVOT_Y),
            angle: 0.0,
            intent_up: false,
        };
        flipper.angle = flipper.target_angle();
        flipper
    }

    /// Angle target for the current intent, sign-mirrored on the right side
    pub fn target_angle(&self) -> f32 {
        let target = if self.intent_up {
            FLIPPER_ANGLE_UP
        } else {
            FLIPPER_ANGLE_DOWN
        };
        match self.side {
            FlipperSide::Left => target,
            FlipperSide::Right => -target,
        }
    }

    /// Ease the angle toward the current target (exponential smoothing)
    pub fn ease(&mut self) {
        self.angle += (self.target_angle() - self.angle) * FLIPPER_SMOOTHING;
    }

    pub fn half_length(&self) -> f32 {
        FLIPPER_HALF_LENGTH
    }

    pub fn half_width(&self) -> f32 {
        FLIPPER_HALF_WIDTH
    }
}

/// RNG state wrapper kept serializable; a fresh `Pcg32` is derived per serve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub serves: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, serves: 0 }
    }

    pub fn next_serve_rng(&mut self) -> Pcg32 {
        self.serves += 1;
        Pcg32::seed_from_u64(self.seed.wrapping_add(self.serves))
    }
}

/// Transition events surfaced by the tick for the host/UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The ball drained past the bottom of the playfield this step
    GameOver { score: u64 },
}

/// Complete game state
///
/// The single aggregate the host owns and passes into [`super::tick`]. All
/// mutation happens synchronously inside the tick or through the intent
/// setters between ticks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub seed: u64,
    pub rng_state: RngState,
    pub score: u64,
    /// False once the ball drains; tick is a no-op until a reset
    pub running: bool,
    pub ball: Ball,
    pub left_flipper: Flipper,
    pub right_flipper: Flipper,
    pub layout: Layout,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a running game on the classic table
    pub fn new(seed: u64) -> Self {
        Self::with_layout(seed, Layout::default())
    }

    /// Create a running game on a custom table layout
    pub fn with_layout(seed: u64, layout: Layout) -> Self {
        let mut rng_state = RngState::new(seed);
        let ball = Ball::serve(&mut rng_state.next_serve_rng());
        Self {
            seed,
            rng_state,
            score: 0,
            running: true,
            ball,
            left_flipper: Flipper::new(FlipperSide::Left),
            right_flipper: Flipper::new(FlipperSide::Right),
            layout,
            time_ticks: 0,
        }
    }

    /// Restart after a game over: zero the score, re-serve the ball
    ///
    /// Only honored while not running; returns whether the reset took effect.
    pub fn trigger_reset(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.score = 0;
        self.ball = Ball::serve(&mut self.rng_state.next_serve_rng());
        self.running = true;
        log::info!("game reset (serve {})", self.rng_state.serves);
        true
    }

    pub fn set_left_flipper(&mut self, up: bool) {
        self.left_flipper.intent_up = up;
    }

    pub fn set_right_flipper(&mut self, up: bool) {
        self.right_flipper.intent_up = up;
    }

    // Read-only views for the renderer/UI collaborators

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn flippers(&self) -> [&Flipper; 2] {
        [&self.left_flipper, &self.right_flipper]
    }

    pub fn walls(&self) -> &[Wall] {
        &self.layout.walls
    }

    pub fn bumpers(&self) -> &[Bumper] {
        &self.layout.bumpers
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
