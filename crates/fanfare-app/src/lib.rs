//! Fanfare celebration app
//!
//! A Dioxus application with two routes: a name entry form and a looping celebration video
//! with timed captions and confetti. Runs as a desktop window or, with the `web` feature,
//! in the browser.

use std::sync::OnceLock;

use fanfare_core::PresentationConfig;

use crate::theme::Theme;

pub mod components;
pub mod media;
pub mod routes;
pub mod theme;

/// CSS styles embedded at compile time.
pub const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Presentation config chosen at startup.
static CONFIG: OnceLock<PresentationConfig> = OnceLock::new();

/// Theme chosen at startup.
static THEME: OnceLock<Theme> = OnceLock::new();

/// Stores the startup config; only the first call takes effect.
pub fn set_config(config: PresentationConfig) {
    if CONFIG.set(config).is_err() {
        tracing::warn!("Presentation config already set, keeping the first one");
    }
}

/// The startup config, or defaults when none was set.
pub fn config() -> PresentationConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Stores the startup theme; only the first call takes effect.
pub fn set_theme(theme: Theme) {
    if THEME.set(theme).is_err() {
        tracing::warn!("Theme already set, keeping the first one");
    }
}

/// The startup theme, or the default theme when none was set.
pub fn startup_theme() -> Theme {
    THEME.get().copied().unwrap_or_default()
}
