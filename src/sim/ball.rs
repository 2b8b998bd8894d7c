//! Ball entity: serve delay, speed ramp, wall bounce and paddle hits

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::Side;
use crate::consts::*;

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    /// Velocity in units per tick (before the speed multiplier)
    pub vel: Vec2,
    /// Seconds since this ball was spawned
    pub elapsed: f32,
}

impl Ball {
    /// Create a ball at `pos` with the given velocity and no elapsed time
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            rect: Rect::new(pos, Vec2::splat(BALL_SIZE), BALL_COLOR),
            vel,
            elapsed: 0.0,
        }
    }

    /// Fresh ball at the playfield center heading toward a random side
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let vx = if rng.random_bool(0.5) {
            BALL_SERVE_SPEED_X
        } else {
            -BALL_SERVE_SPEED_X
        };
        let vy = rng.random_range(-BALL_SERVE_SPEED_Y..=BALL_SERVE_SPEED_Y);
        Self::new(
            Vec2::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT / 2.0),
            Vec2::new(vx, vy),
        )
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.rect.center
    }

    /// Grows by 1.0 every `SPEED_RAMP_SECONDS` of the ball's life
    pub fn speed_multiplier(&self) -> f32 {
        1.0 + self.elapsed / SPEED_RAMP_SECONDS
    }

    /// Advance one tick. Returns true when the ball bounced off the top
    /// or bottom wall.
    pub fn update(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        if self.elapsed < SERVE_DELAY {
            return false;
        }

        self.rect.center += self.vel * self.speed_multiplier();

        let half = self.rect.half_extents().y;
        let y = self.rect.center.y;
        if (half..=PLAYFIELD_HEIGHT - half).contains(&y) {
            return false;
        }

        // Only the velocity is reflected, the position catches up next tick
        self.vel.y = -self.vel.y;
        true
    }

    /// Resolve contact with a paddle moving at `paddle_velocity`.
    ///
    /// Only counts while the ball is still heading toward the paddle on
    /// its own half, so an overlap lasting several ticks bounces once.
    pub fn hit(&mut self, paddle_velocity: f32) -> bool {
        let mid = PLAYFIELD_WIDTH / 2.0;
        let x = self.rect.center.x;
        let approaching = (self.vel.x > 0.0 && x > mid) || (self.vel.x < 0.0 && x < mid);
        if !approaching {
            return false;
        }

        self.vel.x = -self.vel.x;
        self.vel.y = (3.0 * self.vel.y + paddle_velocity) / 4.0;
        true
    }

    /// True while the ball is horizontally inside the playfield
    pub fn in_bounds(&self) -> bool {
        (0.0..=PLAYFIELD_WIDTH).contains(&self.rect.center.x)
    }

    /// Side the ball left through, once it is far enough past the edge
    pub fn exit_side(&self) -> Option<Side> {
        let x = self.rect.center.x;
        if x < -PLAYFIELD_WIDTH / 2.0 {
            Some(Side::Left)
        } else if x > PLAYFIELD_WIDTH * 1.5 {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Fold `y` into `[0, PLAYFIELD_HEIGHT]` by mirroring across the walls,
/// as a ball bouncing between them would.
pub fn reflect_into_bounds(y: f32) -> f32 {
    let height = PLAYFIELD_HEIGHT;
    if !y.is_finite() {
        return if y.is_nan() {
            height / 2.0
        } else {
            y.clamp(0.0, height)
        };
    }

    let folded = y.rem_euclid(2.0 * height);
    if folded > height {
        2.0 * height - folded
    } else {
        folded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn centered(vel: Vec2) -> Ball {
        Ball::new(
            Vec2::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT / 2.0),
            vel,
        )
    }

    #[test]
    fn test_spawn_is_centered_with_serve_velocity() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..50 {
            let ball = Ball::spawn(&mut rng);
            assert_eq!(ball.pos(), Vec2::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT / 2.0));
            assert_eq!(ball.vel.x.abs(), BALL_SERVE_SPEED_X);
            assert!(ball.vel.y.abs() <= BALL_SERVE_SPEED_Y);
            assert_eq!(ball.elapsed, 0.0);
        }
    }

    #[test]
    fn test_serve_delay_holds_position() {
        let mut ball = centered(Vec2::new(4.0, 2.0));
        let start = ball.pos();
        for _ in 0..9 {
            assert!(!ball.update(0.1));
            assert_eq!(ball.pos(), start);
        }
        assert!(ball.elapsed < SERVE_DELAY);
    }

    #[test]
    fn test_moves_with_speed_multiplier_after_delay() {
        let mut ball = centered(Vec2::new(4.0, 2.0));
        let start = ball.pos();
        ball.update(1.5);
        let multiplier = 1.0 + 1.5 / SPEED_RAMP_SECONDS;
        assert!((ball.speed_multiplier() - multiplier).abs() < 1e-6);
        let moved = ball.pos() - start;
        assert!((moved.x - 4.0 * multiplier).abs() < 1e-4);
        assert!((moved.y - 2.0 * multiplier).abs() < 1e-4);
    }

    #[test]
    fn test_wall_bounce_flips_vertical_velocity() {
        let half = BALL_SIZE / 2.0;
        let mut ball = Ball::new(Vec2::new(300.0, half + 1.0), Vec2::new(4.0, -3.0));
        ball.elapsed = SERVE_DELAY;

        assert!(ball.update(0.0));
        assert!(ball.vel.y > 0.0);
        assert_eq!(ball.vel.x, 4.0);

        let mut ball = Ball::new(
            Vec2::new(300.0, PLAYFIELD_HEIGHT - half - 1.0),
            Vec2::new(-4.0, 3.0),
        );
        ball.elapsed = SERVE_DELAY;
        assert!(ball.update(0.0));
        assert!(ball.vel.y < 0.0);
    }

    #[test]
    fn test_no_bounce_well_inside() {
        let mut ball = centered(Vec2::new(4.0, -3.0));
        ball.elapsed = SERVE_DELAY;
        assert!(!ball.update(0.016));
        assert_eq!(ball.vel, Vec2::new(4.0, -3.0));
    }

    #[test]
    fn test_hit_only_when_heading_toward_own_half() {
        // Right half moving right: hits the right paddle
        let mut ball = Ball::new(Vec2::new(600.0, 200.0), Vec2::new(4.0, 2.0));
        assert!(ball.hit(5.0));
        assert_eq!(ball.vel.x, -4.0);
        assert!((ball.vel.y - (3.0 * 2.0 + 5.0) / 4.0).abs() < 1e-6);

        // Still overlapping on the next tick: ignored
        let vel = ball.vel;
        assert!(!ball.hit(5.0));
        assert_eq!(ball.vel, vel);

        // Left half moving left: hits the left paddle
        let mut ball = Ball::new(Vec2::new(30.0, 200.0), Vec2::new(-4.0, 0.0));
        assert!(ball.hit(-5.0));
        assert_eq!(ball.vel.x, 4.0);
        assert_eq!(ball.vel.y, -1.25);
        assert!(!ball.hit(-5.0));
    }

    #[test]
    fn test_in_bounds_and_exit_side() {
        let mut ball = centered(Vec2::new(4.0, 0.0));
        assert!(ball.in_bounds());
        assert_eq!(ball.exit_side(), None);

        ball.rect.center.x = -10.0;
        assert!(!ball.in_bounds());
        assert_eq!(ball.exit_side(), None);

        ball.rect.center.x = -PLAYFIELD_WIDTH / 2.0 - 1.0;
        assert_eq!(ball.exit_side(), Some(Side::Left));

        ball.rect.center.x = PLAYFIELD_WIDTH * 1.5 + 1.0;
        assert_eq!(ball.exit_side(), Some(Side::Right));
    }

    #[test]
    fn test_reflect_into_bounds_mirrors() {
        assert_eq!(reflect_into_bounds(100.0), 100.0);
        assert_eq!(reflect_into_bounds(-30.0), 30.0);
        assert_eq!(reflect_into_bounds(PLAYFIELD_HEIGHT + 40.0), PLAYFIELD_HEIGHT - 40.0);
        // Two bounces: past the bottom, back past the top
        assert_eq!(reflect_into_bounds(2.0 * PLAYFIELD_HEIGHT + 25.0), 25.0);
        assert_eq!(reflect_into_bounds(f32::INFINITY), PLAYFIELD_HEIGHT);
        assert_eq!(reflect_into_bounds(f32::NEG_INFINITY), 0.0);
    }

    proptest! {
        #[test]
        fn prop_reflect_lands_in_bounds(y in -1.0e6f32..1.0e6) {
            let folded = reflect_into_bounds(y);
            prop_assert!((0.0..=PLAYFIELD_HEIGHT).contains(&folded));
        }

        #[test]
        fn prop_reflect_is_identity_in_range(y in 0.0f32..=PLAYFIELD_HEIGHT) {
            prop_assert_eq!(reflect_into_bounds(y), y);
            prop_assert_eq!(reflect_into_bounds(reflect_into_bounds(y)), reflect_into_bounds(y));
        }
    }
}
