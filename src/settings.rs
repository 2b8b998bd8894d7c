//! Game settings
//!
//! Fixed for the lifetime of the process: read once at startup from the
//! command line (native) or the page URL (web). Nothing is persisted.

use serde::{Deserialize, Serialize};

/// Which strategy drives the computer paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AiMode {
    /// Chase the ball's current height
    #[default]
    Reactive,
    /// Aim for where the ball is projected to arrive (`--hard`)
    Predictive,
}

impl AiMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AiMode::Reactive => "reactive",
            AiMode::Predictive => "predictive",
        }
    }
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Computer opponent strategy
    pub ai_mode: AiMode,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ai_mode: AiMode::Reactive,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.5,
        }
    }
}

impl Settings {
    /// Flag that selects the predictive AI
    pub const HARD_FLAG: &'static str = "--hard";

    /// Build settings from command-line arguments (program name excluded).
    /// Anything other than `--hard` is ignored.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut settings = Self::default();
        for arg in args {
            let arg = arg.as_ref();
            if arg == Self::HARD_FLAG {
                settings.ai_mode = AiMode::Predictive;
            } else {
                log::debug!("Ignoring argument {:?}", arg);
            }
        }
        settings
    }

    /// Build settings from a URL query string such as `?hard` or `?--hard&x=1`
    pub fn from_query(query: &str) -> Self {
        let args = query
            .trim_start_matches('?')
            .split('&')
            .filter(|part| !part.is_empty())
            .map(|part| {
                let key = part.split('=').next().unwrap_or(part);
                if key == "hard" {
                    Self::HARD_FLAG
                } else {
                    key
                }
            });
        Self::from_args(args)
    }

    /// Settings for the current page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn from_location() -> Self {
        let query = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reactive() {
        let settings = Settings::from_args(Vec::<String>::new());
        assert_eq!(settings.ai_mode, AiMode::Reactive);
    }

    #[test]
    fn test_hard_flag_selects_predictive() {
        let settings = Settings::from_args(["--verbose", "--hard"]);
        assert_eq!(settings.ai_mode, AiMode::Predictive);
        assert_eq!(settings.ai_mode.as_str(), "predictive");
    }

    #[test]
    fn test_unknown_flags_are_ignored() {
        let settings = Settings::from_args(["hard", "--harder", "-h"]);
        assert_eq!(settings.ai_mode, AiMode::Reactive);
    }

    #[test]
    fn test_query_string() {
        assert_eq!(Settings::from_query("?hard").ai_mode, AiMode::Predictive);
        assert_eq!(Settings::from_query("?x=1&--hard").ai_mode, AiMode::Predictive);
        assert_eq!(Settings::from_query("?hard=1").ai_mode, AiMode::Predictive);
        assert_eq!(Settings::from_query("").ai_mode, AiMode::Reactive);
        assert_eq!(Settings::from_query("?easy").ai_mode, AiMode::Reactive);
    }
}
