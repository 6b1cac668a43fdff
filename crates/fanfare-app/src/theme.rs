//! Stage themes, chosen once at startup.

/// Value of the root `data-theme` attribute; see `assets/styles.css`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(not(target_arch = "wasm32"), derive(clap::ValueEnum))]
pub enum Theme {
    /// Dark surround for the video.
    #[default]
    Curtain,
    /// For bright rooms and projectors.
    Daylight,
}

impl Theme {
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Curtain => "curtain",
            Theme::Daylight => "daylight",
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::ValueEnum;

    use super::*;

    #[test]
    fn cli_names_match_css_values() {
        for theme in Theme::value_variants() {
            let name = theme.to_possible_value().map(|v| v.get_name().to_string());
            assert_eq!(name.as_deref(), Some(theme.css_value()));
        }
    }

    #[test]
    fn unknown_cli_value_is_rejected() {
        assert_eq!(Theme::from_str("daylight", false), Ok(Theme::Daylight));
        assert!(Theme::from_str("neon", false).is_err());
    }
}
