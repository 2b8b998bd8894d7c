//! Paddle Duel - a minimal human-vs-computer Pong
//!
//! Core modules:
//! - `sim`: Simulation (paddles, ball, AI, scoring)
//! - `renderer`: WebGPU quad pipeline
//! - `platform`: Input state and startup errors
//! - `audio`: Blip effect and background loop
//! - `settings`: AI mode and audio levels

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{AiMode, Settings};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (logical units = pixels)
    pub const PLAYFIELD_WIDTH: f32 = 640.0;
    pub const PLAYFIELD_HEIGHT: f32 = 480.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 60.0;
    /// Distance from the paddle center to its side edge
    pub const PADDLE_MARGIN: f32 = 20.0;
    /// Units moved per tick while a command is held
    pub const PADDLE_SPEED: f32 = 5.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 10.0;
    /// Horizontal serve speed (units per tick, sign is random)
    pub const BALL_SERVE_SPEED_X: f32 = 4.0;
    /// Maximum vertical serve speed (units per tick)
    pub const BALL_SERVE_SPEED_Y: f32 = 3.0;
    /// Pause after (re)spawn before the ball starts moving (seconds)
    pub const SERVE_DELAY: f32 = 1.0;
    /// Seconds of play for the speed multiplier to grow by 1.0
    pub const SPEED_RAMP_SECONDS: f32 = 15.0;

    /// Per-tick chance the computer re-evaluates its command
    pub const AI_RESAMPLE_CHANCE: f64 = 0.1;
    /// Max aim offset of the predictive AI (units)
    pub const AI_AIM_ERROR: f32 = 12.0;

    /// Longest frame delta fed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Nominal frame delta used for the first frame and the headless demo
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Colors for game elements
    pub const PADDLE_COLOR: [f32; 4] = [0.9, 0.9, 0.9, 1.0];
    pub const BALL_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.02, 0.02, 0.05, 1.0];
}
