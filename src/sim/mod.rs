//! Simulation module
//!
//! All gameplay logic lives here. No rendering, audio or platform
//! dependencies: the loop feeds in input and a frame delta, and gets
//! back the events it should turn into effects.

pub mod ai;
pub mod ball;
pub mod paddle;
pub mod rect;
pub mod state;
pub mod tick;

pub use ball::{Ball, reflect_into_bounds};
pub use paddle::{Command, Paddle};
pub use rect::{Quad, Rect};
pub use state::{GameEvent, GameState, Score, Side};
pub use tick::{TickInput, tick};
