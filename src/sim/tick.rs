//! Per-frame simulation step
//!
//! The host's frame-pacing loop calls [`tick`] exactly once per frame; all
//! per-step constants (gravity, easing) are tuned for that cadence, so there
//! is no dt parameter.

use super::collision::{collide_bumpers, collide_flipper, collide_walls};
use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Advance the game state by one frame
///
/// Step order: integrate the ball (semi-implicit Euler, velocity before
/// position), resolve collisions (walls, bumpers, left flipper, right
/// flipper), ease both flipper angles toward their intent targets, then check
/// the drain. A no-op while not running. Returns the game-over transition
/// event on the exact step the ball drains.
pub fn tick(state: &mut GameState) -> Option<GameEvent> {
    if !state.running {
        return None;
    }
    state.time_ticks += 1;

    // Velocity update must precede the position update for stability
    state.ball.vel.y += GRAVITY;
    state.ball.pos += state.ball.vel;

    collide_walls(&mut state.ball, &state.layout.walls);
    let points = collide_bumpers(&mut state.ball, &state.layout.bumpers);
    state.score += points;
    collide_flipper(&mut state.ball, &state.left_flipper);
    collide_flipper(&mut state.ball, &state.right_flipper);

    state.left_flipper.ease();
    state.right_flipper.ease();

    if state.ball.pos.y > PLAYFIELD_HEIGHT + DRAIN_MARGIN {
        state.running = false;
        log::info!(
            "ball drained at tick {}, final score {}",
            state.time_ticks,
            state.score
        );
        return Some(GameEvent::GameOver { score: state.score });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::layout::{Bumper, Layout};
    use glam::Vec2;

    fn empty_table(seed: u64) -> GameState {
        GameState::with_layout(
            seed,
            Layout {
                walls: vec![],
                bumpers: vec![],
            },
        )
    }

    #[test]
    fn test_semi_implicit_euler_order() {
        let mut state = empty_table(1);
        state.ball.pos = Vec2::new(240.0, 100.0);
        state.ball.vel = Vec2::ZERO;

        tick(&mut state);
        // Velocity is updated before position, so the first step already moves
        assert_eq!(state.ball.vel.y, GRAVITY);
        assert_eq!(state.ball.pos.y, 100.0 + GRAVITY);
    }

    #[test]
    fn test_tick_is_noop_when_not_running() {
        let mut state = empty_table(1);
        state.running = false;
        let before_pos = state.ball.pos;
        let before_ticks = state.time_ticks;

        assert_eq!(tick(&mut state), None);
        assert_eq!(state.ball.pos, before_pos);
        assert_eq!(state.time_ticks, before_ticks);
    }

    #[test]
    fn test_drain_sets_game_over_on_exact_step() {
        let mut state = empty_table(1);
        // One step short of the drain threshold, falling fast
        state.ball.pos = Vec2::new(240.0, PLAYFIELD_HEIGHT + DRAIN_MARGIN - 1.0);
        state.ball.vel = Vec2::new(0.0, 10.0);
        state.score = 123;

        let event = tick(&mut state);
        assert_eq!(event, Some(GameEvent::GameOver { score: 123 }));
        assert!(!state.running);

        // Score is frozen until a reset
        for _ in 0..10 {
            assert_eq!(tick(&mut state), None);
        }
        assert_eq!(state.score, 123);

        assert!(state.trigger_reset());
        assert_eq!(state.score, 0);
        assert!(state.running);
    }

    #[test]
    fn test_bumper_hit_through_tick_scores() {
        let mut state = empty_table(1);
        state.layout.bumpers = vec![Bumper::new(240.0, 120.0, 28.0, 100, 0)];
        // Ball lands overlapping the bumper after one integration step
        state.ball.pos = Vec2::new(240.0, 120.0 - 28.0 - state.ball.radius - 5.0);
        state.ball.vel = Vec2::new(0.0, 6.0);

        let speed_before = (6.0f32 + GRAVITY).hypot(0.0);
        tick(&mut state);

        assert_eq!(state.score, 100);
        assert!((state.ball.speed() - speed_before * BUMPER_SPEED_GAIN).abs() < 1e-3);
        let dist = state.ball.pos.distance(Vec2::new(240.0, 120.0));
        assert!((dist - (state.ball.radius + 28.0 + BUMPER_SEPARATION)).abs() < 1e-3);
    }

    #[test]
    fn test_flipper_easing_converges_without_overshoot() {
        let mut state = empty_table(1);
        // Park the ball away from everything
        state.ball.pos = Vec2::new(240.0, 100.0);
        state.ball.vel = Vec2::ZERO;
        state.set_left_flipper(true);

        let mut prev = state.left_flipper.angle;
        for _ in 0..60 {
            tick(&mut state);
            let angle = state.left_flipper.angle;
            assert!(angle >= prev, "easing must be monotone upward");
            assert!(angle <= FLIPPER_ANGLE_UP + 1e-5, "easing must not overshoot");
            prev = angle;
        }
        assert!((prev - FLIPPER_ANGLE_UP).abs() < 1e-3);
    }

    #[test]
    fn test_collision_uses_pre_ease_angle() {
        // The flipper collision normal comes from the angle before this
        // step's easing; easing runs after the resolvers.
        let mut state = empty_table(1);
        state.ball.pos = Vec2::new(240.0, 100.0);
        state.ball.vel = Vec2::ZERO;
        let angle_before = state.left_flipper.angle;
        state.set_left_flipper(true);
        tick(&mut state);
        let expected = angle_before + (FLIPPER_ANGLE_UP - angle_before) * FLIPPER_SMOOTHING;
        assert!((state.left_flipper.angle - expected).abs() < 1e-5);
    }

    #[test]
    fn test_center_drop_drains_between_flippers() {
        // On the classic table a ball falling straight down the center line
        // slips between the resting flippers and drains
        let mut state = GameState::new(42);
        state.ball.pos = Vec2::new(PLAYFIELD_WIDTH / 2.0, 400.0);
        state.ball.vel = Vec2::ZERO;

        let mut over = false;
        for _ in 0..200 {
            if let Some(GameEvent::GameOver { .. }) = tick(&mut state) {
                over = true;
                break;
            }
        }
        assert!(over, "center drop should end by drain");
        assert!(!state.running);
    }
}
