//! Per-frame simulation tick
//!
//! Advances paddles, AI and ball in a fixed order and reports what
//! happened so the caller can play sounds and log goals.

use rand::Rng;

use super::ai;
use super::paddle::Command;
use super::state::{GameEvent, GameState, Side};
use crate::consts::*;

/// Input snapshot for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Up key held
    pub up: bool,
    /// Down key held
    pub down: bool,
    /// Idle/attract mode - the reactive AI drives the human paddle
    pub idle_mode: bool,
}

impl TickInput {
    /// Command from the held keys; both or neither held means no movement
    pub fn command(&self) -> Command {
        match (self.up, self.down) {
            (true, false) => Command::Up,
            (false, true) => Command::Down,
            _ => Command::None,
        }
    }
}

/// Advance the game by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    // Human paddle (or its stand-in)
    let human = if input.idle_mode {
        ai::reactive(&state.ball, &state.left)
    } else {
        input.command()
    };
    state.left.apply_command(human);

    // Computer paddle: keep the last decision unless the dice say rethink
    if state.rng.random_bool(AI_RESAMPLE_CHANCE) {
        let aim_error = state.rng.random_range(-AI_AIM_ERROR..=AI_AIM_ERROR);
        state.ai_command = state.ai_mode.decide(&state.ball, &state.right, aim_error);
    }
    state.right.apply_command(state.ai_command);

    // Ball
    if state.ball.update(dt) && state.ball.in_bounds() {
        events.push(GameEvent::WallBounce);
    }

    for side in [Side::Left, Side::Right] {
        let paddle = state.paddle(side);
        let paddle_velocity = paddle.velocity();
        let touching = paddle.rect().intersects(&state.ball.rect);
        if touching && state.ball.hit(paddle_velocity) {
            events.push(GameEvent::PaddleHit { side });
        }
    }

    // Scoring: the side the ball left through concedes
    if let Some(exit) = state.ball.exit_side() {
        let scorer = exit.opponent();
        state.score.award(scorer);
        events.push(GameEvent::Scored { scorer });
        state.respawn_ball();
    }

    events
}
