//! Computer opponent
//!
//! Two steering strategies that turn the current ball into a paddle
//! command. Neither touches state; the tick decides when to ask.

use super::ball::{Ball, reflect_into_bounds};
use super::paddle::{Command, Paddle};
use crate::settings::AiMode;

impl AiMode {
    /// Pick a command for `paddle` with the strategy this mode names.
    /// `aim_error` is only used by the predictive strategy.
    pub fn decide(self, ball: &Ball, paddle: &Paddle, aim_error: f32) -> Command {
        match self {
            AiMode::Reactive => reactive(ball, paddle),
            AiMode::Predictive => predictive(ball, paddle, aim_error),
        }
    }
}

/// Move toward `target_y` unless it is already within the paddle's span
fn steer_toward(target_y: f32, paddle: &Paddle) -> Command {
    let (top, bottom) = paddle.rect().vertical_span();
    if target_y < top {
        Command::Up
    } else if target_y > bottom {
        Command::Down
    } else {
        Command::None
    }
}

/// Chase the ball's current height
pub fn reactive(ball: &Ball, paddle: &Paddle) -> Command {
    steer_toward(ball.pos().y, paddle)
}

/// Ticks until the ball reaches `paddle`, taking the long way: back to
/// the wall behind the far paddle, then across to this one. Applied
/// whichever way the ball is moving.
pub fn time_to_impact(ball: &Ball, paddle: &Paddle) -> f32 {
    let speed_x = ball.vel.x.abs();
    if speed_x <= f32::EPSILON {
        return 0.0;
    }
    (ball.pos().x + paddle.rect().center.x) / speed_x
}

/// Steer toward where the ball will cross, folding in wall bounces.
/// Ignores the speed ramp and any paddle hit on the way.
pub fn predictive(ball: &Ball, paddle: &Paddle, aim_error: f32) -> Command {
    let t = time_to_impact(ball, paddle);
    let projected = ball.pos().y + ball.vel.y * t + aim_error;
    steer_toward(reflect_into_bounds(projected), paddle)
}
