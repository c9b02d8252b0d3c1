//! Collision detection and response
//!
//! One resolver per entity kind, run in a fixed order each step (walls,
//! bumpers, left flipper, right flipper). When several contacts are
//! geometrically simultaneous the last-applied correction wins; this is an
//! accepted simplification, not a simultaneous-contact solver.
//!
//! All resolvers mutate the ball in place; the bumper resolver returns the
//! points awarded so the caller owns the score.

use glam::Vec2;

use super::layout::{Bumper, Wall};
use super::state::{Ball, Flipper};
use crate::consts::*;

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n. The normal must be unit length.
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Resolve wall-segment collisions
///
/// The ball center is projected onto each segment; only strict-interior
/// projections respond, so balls can slip past segment endpoints (layouts
/// must overlap segments to cover corners). Contact pushes the ball out along
/// the wall normal by the penetration depth and reflects the velocity with no
/// restitution loss.
pub fn collide_walls(ball: &mut Ball, walls: &[Wall]) {
    for wall in walls {
        let seg = wall.b - wall.a;
        let len = seg.length();
        if len <= f32::EPSILON {
            // Degenerate segment
            continue;
        }
        let dir = seg / len;
        let normal = Vec2::new(-dir.y, dir.x);

        let proj = (ball.pos - wall.a).dot(dir);
        if proj <= 0.0 || proj >= len {
            continue;
        }
        let closest = wall.a + dir * proj;
        let dist = ball.pos.distance(closest);
        if dist < ball.radius {
            let overlap = ball.radius - dist;
            ball.pos += normal * overlap;
            ball.vel = reflect_velocity(ball.vel, normal);
        }
    }
}

/// Resolve bumper collisions, returning the points awarded this step
///
/// Contact reflects the velocity about the radial normal, reparks the ball at
/// `r_ball + r_bumper + BUMPER_SEPARATION` from the bumper center so the same
/// bumper cannot re-trigger next step, and applies the fixed speed gain.
/// Repeated hits compound the gain multiplicatively with no upper bound;
/// that energy injection is intended table behavior.
pub fn collide_bumpers(ball: &mut Ball, bumpers: &[Bumper]) -> u64 {
    let mut points = 0u64;
    for bumper in bumpers {
        let delta = ball.pos - bumper.pos;
        let dist = delta.length();
        if dist >= ball.radius + bumper.radius {
            continue;
        }
        if dist <= f32::EPSILON {
            // Ball exactly at the bumper center: no usable normal
            continue;
        }
        let normal = delta / dist;
        ball.vel = reflect_velocity(ball.vel, normal);
        ball.pos = bumper.pos + normal * (ball.radius + bumper.radius + BUMPER_SEPARATION);
        ball.vel *= BUMPER_SPEED_GAIN;
        points += u64::from(bumper.value);
    }
    points
}

/// Resolve a flipper collision
///
/// Broad-phase box test in the flipper's rotated frame: the ball center is
/// transformed by the current (possibly mid-swing) angle and tested against
/// the rectangle half-extents expanded by the ball radius. The contact normal
/// is always `(sin angle, -cos angle)` regardless of which edge was actually
/// approached; a documented approximation that keeps the response direction a
/// pure function of swing phase. While the flipper is held up, a fixed
/// impulse along the normal turns the deflection into a hit.
pub fn collide_flipper(ball: &mut Ball, flipper: &Flipper) {
    let (sin, cos) = flipper.angle.sin_cos();
    let rel = ball.pos - flipper.pivot;
    // Rotate by -angle into the flipper frame
    let local = Vec2::new(cos * rel.x + sin * rel.y, -sin * rel.x + cos * rel.y);

    let reach_x = flipper.half_length() + ball.radius;
    let reach_y = flipper.half_width() + ball.radius;
    if local.x <= -reach_x || local.x >= reach_x || local.y.abs() >= reach_y {
        return;
    }

    let normal = Vec2::new(sin, -cos);
    ball.vel = reflect_velocity(ball.vel, normal);
    if flipper.intent_up {
        ball.vel += normal * FLIPPER_IMPULSE;
    }
    ball.pos += normal * ball.radius;
}
