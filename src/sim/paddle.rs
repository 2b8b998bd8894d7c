//! Paddle entity and its movement command

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::Side;
use crate::consts::*;

/// Vertical movement command for a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Command {
    #[default]
    None,
    Up,
    Down,
}

impl Command {
    /// Sign of the movement along y (up is toward y = 0)
    pub fn direction(self) -> f32 {
        match self {
            Command::None => 0.0,
            Command::Up => -1.0,
            Command::Down => 1.0,
        }
    }
}

/// A player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    rect: Rect,
    /// Last applied command (drives the velocity handed to ball hits)
    command: Command,
}

impl Paddle {
    /// Create a paddle vertically centered on its side of the playfield
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => PADDLE_MARGIN,
            Side::Right => PLAYFIELD_WIDTH - PADDLE_MARGIN,
        };
        Self {
            rect: Rect::new(
                Vec2::new(x, PLAYFIELD_HEIGHT / 2.0),
                Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
                PADDLE_COLOR,
            ),
            command: Command::None,
        }
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    pub fn command(&self) -> Command {
        self.command
    }

    /// Record the command and move one step, staying inside the playfield
    pub fn apply_command(&mut self, command: Command) {
        self.command = command;
        let half = self.rect.half_extents().y;
        let y = self.rect.center.y + command.direction() * PADDLE_SPEED;
        self.rect.center.y = y.clamp(half, PLAYFIELD_HEIGHT - half);
    }

    /// Instantaneous vertical velocity (units per tick)
    pub fn velocity(&self) -> f32 {
        self.command.direction() * PADDLE_SPEED
    }
}
