//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives here, so a cloned (or
//! serialized) state replays identically given the same inputs.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::paddle::{Command, Paddle};
use super::rect::Quad;
use crate::settings::AiMode;

/// Side of the playfield. The human plays left, the computer right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Something that happened during a tick that the platform may react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall inside the playfield
    WallBounce,
    /// Ball was returned by a paddle
    PaddleHit { side: Side },
    /// Ball left the playfield and `scorer` got the point
    Scored { scorer: Side },
}

impl GameEvent {
    /// Whether this event triggers the bounce sound
    pub fn plays_blip(&self) -> bool {
        matches!(self, GameEvent::WallBounce | GameEvent::PaddleHit { .. })
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    /// Give a point to `side`
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    /// HUD text
    pub fn text(&self) -> String {
        format!("{}    {}", self.left, self.right)
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    /// Fixed at startup
    pub ai_mode: AiMode,
    /// Human paddle
    pub left: Paddle,
    /// Computer paddle
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Computer command, kept until the AI resamples
    pub ai_command: Command,
    /// Ticks simulated so far
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game with the given seed
    pub fn new(seed: u64, ai_mode: AiMode) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball::spawn(&mut rng);
        Self {
            seed,
            rng,
            ai_mode,
            left: Paddle::new(Side::Left),
            right: Paddle::new(Side::Right),
            ball,
            score: Score::default(),
            ai_command: Command::None,
            time_ticks: 0,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Replace the ball with a fresh serve
    pub fn respawn_ball(&mut self) {
        self.ball = Ball::spawn(&mut self.rng);
    }

    /// Everything drawn on the playfield this frame
    pub fn quads(&self) -> [Quad; 3] {
        [
            self.left.rect().corners(),
            self.right.rect().corners(),
            self.ball.rect.corners(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::Vec2;

    #[test]
    fn test_new_state() {
        let state = GameState::new(42, AiMode::Reactive);
        assert_eq!(state.score, Score::default());
        assert_eq!(state.ai_command, Command::None);
        assert_eq!(state.ball.pos(), Vec2::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT / 2.0));
        assert_eq!(state.left.rect().center.y, PLAYFIELD_HEIGHT / 2.0);
        assert_eq!(state.right.rect().center.y, PLAYFIELD_HEIGHT / 2.0);
    }

    #[test]
    fn test_same_seed_same_serve() {
        let a = GameState::new(99999, AiMode::Predictive);
        let b = GameState::new(99999, AiMode::Predictive);
        assert_eq!(a.ball.vel, b.ball.vel);
    }

    #[test]
    fn test_score_award_and_text() {
        let mut score = Score::default();
        score.award(Side::Left);
        score.award(Side::Left);
        score.award(Side::Right);
        assert_eq!(score, Score { left: 2, right: 1 });
        assert_eq!(score.text(), "2    1");
        assert_eq!(Side::Left.opponent(), Side::Right);
    }

    #[test]
    fn test_quads_cover_all_entities() {
        let state = GameState::new(1, AiMode::Reactive);
        let quads = state.quads();
        assert_eq!(quads[0], state.left.rect().corners());
        assert_eq!(quads[2].color, BALL_COLOR);
        assert!(quads[0].x1 < quads[2].x1 && quads[2].x2 < quads[1].x2);
    }

    #[test]
    fn test_events_that_play_blip() {
        assert!(GameEvent::WallBounce.plays_blip());
        assert!(GameEvent::PaddleHit { side: Side::Right }.plays_blip());
        assert!(!GameEvent::Scored { scorer: Side::Left }.plays_blip());
    }
}
