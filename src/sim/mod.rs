//! Simulation module
//!
//! All gameplay logic lives here. The module is headless and deterministic:
//! - One tick per host frame, no internal timing
//! - Seeded RNG only (serve direction)
//! - No rendering or platform dependencies

pub mod collision;
pub mod layout;
pub mod state;
pub mod tick;

pub use collision::{collide_bumpers, collide_flipper, collide_walls, reflect_velocity};
pub use layout::{Bumper, Layout, Wall};
pub use state::{Ball, Flipper, FlipperSide, GameEvent, GameState, RngState};
pub use tick::tick;
