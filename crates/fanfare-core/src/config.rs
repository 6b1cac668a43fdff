//! Configuration for the presentation screen
//!
//! Every field has a default, so a config file only needs the values it changes:
//!
//! ```json
//! { "video_src": "/media/graduation.mp4", "confetti": { "trigger_at": 6.5 } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::caption::CaptionTable;
use crate::error::ConfigError;
use crate::name::FALLBACK_NAME;

pub const DEFAULT_VIDEO_SRC: &str = "/video.mp4";
pub const CONFETTI_TRIGGER_SECS: f64 = 7.0;
pub const CONFETTI_RESET_SECS: f64 = 0.2;
pub const CONFETTI_PIECES: usize = 220;
/// Pixels per frame squared at 60 fps.
pub const CONFETTI_GRAVITY: f64 = 0.25;

pub const CONFETTI_PALETTE: [&str; 17] = [
    "#f44336", "#e91e63", "#9c27b0", "#673ab7", "#3f51b5", "#2196f3", "#03a9f4", "#00bcd4",
    "#009688", "#4CAF50", "#8BC34A", "#CDDC39", "#FFEB3B", "#FFC107", "#FF9800", "#FF5722",
    "#795548",
];

/// Top-level presentation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    /// Name used when the entry form is submitted blank
    pub fallback_name: String,

    /// Path or URL of the looping video
    pub video_src: String,

    /// Caption timeline
    pub captions: CaptionTable,

    /// Confetti trigger and particle settings
    pub confetti: ConfettiConfig,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            fallback_name: FALLBACK_NAME.to_string(),
            video_src: DEFAULT_VIDEO_SRC.to_string(),
            captions: CaptionTable::standard(),
            confetti: ConfettiConfig::default(),
        }
    }
}

impl PresentationConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        tracing::info!(path = %path.as_ref().display(), "Loaded presentation config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fallback_name.trim().is_empty() {
            return Err(ConfigError::BlankFallbackName);
        }
        self.captions.validate()?;
        self.confetti.validate()
    }
}

/// Confetti trigger thresholds and particle settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfettiConfig {
    /// Playback second at which confetti starts
    pub trigger_at: f64,
    /// Playback second below which a loop restart is assumed
    pub reset_below: f64,
    /// Number of pieces on screen
    pub pieces: usize,
    /// Fall acceleration in px/frame² at 60 fps
    pub gravity: f64,
    /// CSS colors pieces are drawn from
    pub colors: Vec<String>,
    /// Seed for the particle layout
    pub seed: u64,
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        Self {
            trigger_at: CONFETTI_TRIGGER_SECS,
            reset_below: CONFETTI_RESET_SECS,
            pieces: CONFETTI_PIECES,
            gravity: CONFETTI_GRAVITY,
            colors: CONFETTI_PALETTE.iter().map(|c| c.to_string()).collect(),
            seed: 0x0c0d_e175,
        }
    }
}

impl ConfettiConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds_ok = self.trigger_at.is_finite()
            && self.reset_below.is_finite()
            && self.reset_below > 0.0
            && self.reset_below < self.trigger_at
            && self.gravity.is_finite()
            && self.gravity > 0.0;
        if !thresholds_ok {
            return Err(ConfigError::InvalidThresholds {
                trigger_at: self.trigger_at,
                reset_below: self.reset_below,
            });
        }
        if self.colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = PresentationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fallback_name, "스프린터");
        assert_eq!(config.confetti.pieces, 220);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = PresentationConfig::from_json(
            r#"{ "video_src": "/clip.webm", "confetti": { "trigger_at": 6.5 } }"#,
        )
        .unwrap();
        assert_eq!(config.video_src, "/clip.webm");
        assert_eq!(config.confetti.trigger_at, 6.5);
        assert_eq!(config.confetti.reset_below, CONFETTI_RESET_SECS);
        assert_eq!(config.captions, CaptionTable::standard());
    }

    #[test]
    fn rejects_inverted_thresholds() {
        let result = PresentationConfig::from_json(
            r#"{ "confetti": { "trigger_at": 0.1, "reset_below": 0.2 } }"#,
        );
        assert!(matches!(result, Err(ConfigError::InvalidThresholds { .. })));
    }

    #[test]
    fn rejects_non_positive_reset() {
        // Clock samples are clamped at zero, so the loop restart could never be seen
        for reset in ["0.0", "-1.0"] {
            let json = format!(r#"{{ "confetti": {{ "reset_below": {reset} }} }}"#);
            assert!(
                matches!(
                    PresentationConfig::from_json(&json),
                    Err(ConfigError::InvalidThresholds { .. })
                ),
                "reset_below = {reset}"
            );
        }
    }

    #[test]
    fn rejects_empty_palette() {
        let result = PresentationConfig::from_json(r#"{ "confetti": { "colors": [] } }"#);
        assert!(matches!(result, Err(ConfigError::EmptyPalette)));
    }

    #[test]
    fn rejects_blank_fallback_name() {
        let result = PresentationConfig::from_json(r#"{ "fallback_name": "  " }"#);
        assert!(matches!(result, Err(ConfigError::BlankFallbackName)));
    }

    #[test]
    fn rejects_bad_json() {
        assert!(matches!(
            PresentationConfig::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn load_reports_missing_file() {
        let result = PresentationConfig::load("/definitely/not/here/fanfare.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
