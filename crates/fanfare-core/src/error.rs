//! Error types for Fanfare

use thiserror::Error;

/// Errors raised while loading or validating a [`PresentationConfig`](crate::PresentationConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Caption cue {index} has an empty or non-finite interval")]
    InvalidInterval { index: usize },

    #[error("Caption cue {index} starts before the previous cue ends")]
    OverlappingIntervals { index: usize },

    #[error("Caption cue {index} is open-ended but is not the last cue")]
    OpenIntervalNotLast { index: usize },

    #[error("Confetti reset {reset_below}s must be positive and below trigger {trigger_at}s")]
    InvalidThresholds { trigger_at: f64, reset_below: f64 },

    #[error("Confetti palette is empty")]
    EmptyPalette,

    #[error("Fallback name is blank")]
    BlankFallbackName,
}

/// Errors reported by a [`MediaSurface`](crate::MediaSurface)
///
/// These never leave [`dispatch`](crate::media::dispatch); the platform is allowed to refuse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    #[error("Element not found: {0}")]
    ElementMissing(String),

    #[error("Request rejected by platform: {0}")]
    Rejected(String),
}
