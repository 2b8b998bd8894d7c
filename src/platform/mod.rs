//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (held-key polling)
//! - Startup resource acquisition errors

pub mod input;

pub use input::{HeldKeys, KeyAction};

use std::fmt;

/// Failure to acquire a resource the game cannot start without
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupError {
    /// No browser window (not running in a page)
    NoWindow,
    /// Window has no document
    NoDocument,
    /// Required DOM element is missing or has the wrong type
    MissingElement(&'static str),
    /// Could not create the GPU surface
    Surface(String),
    /// No suitable GPU adapter
    Adapter(String),
    /// GPU device request failed
    Device(String),
    /// Audio context or buffer could not be created
    Audio(String),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::NoWindow => write!(f, "no window available"),
            StartupError::NoDocument => write!(f, "window has no document"),
            StartupError::MissingElement(id) => write!(f, "missing element #{id}"),
            StartupError::Surface(e) => write!(f, "failed to create surface: {e}"),
            StartupError::Adapter(e) => write!(f, "failed to get GPU adapter: {e}"),
            StartupError::Device(e) => write!(f, "failed to create GPU device: {e}"),
            StartupError::Audio(e) => write!(f, "audio unavailable: {e}"),
        }
    }
}

impl std::error::Error for StartupError {}

#[cfg(target_arch = "wasm32")]
impl From<StartupError> for wasm_bindgen::JsValue {
    fn from(err: StartupError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_error_messages() {
        assert_eq!(
            StartupError::MissingElement("canvas").to_string(),
            "missing element #canvas"
        );
        assert_eq!(
            StartupError::Adapter("none".into()).to_string(),
            "failed to get GPU adapter: none"
        );
    }
}
