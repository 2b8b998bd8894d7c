//! Audio
//!
//! Everything is synthesized - no sound files. The background track is
//! rendered to samples up front (`track`), effects are short oscillator
//! envelopes played through Web Audio (`AudioManager`, WASM only).

pub mod track;

#[cfg(target_arch = "wasm32")]
mod manager;

#[cfg(target_arch = "wasm32")]
pub use manager::AudioManager;
