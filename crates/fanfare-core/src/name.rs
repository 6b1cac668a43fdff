//! Session display name.

use std::fmt;

/// Fallback used when the name entry form is submitted blank.
pub const FALLBACK_NAME: &str = "스프린터";

/// The effective display name for one visit to the presentation screen.
///
/// Always trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayName(String);

impl DisplayName {
    /// Resolves a submitted form value, substituting `fallback` when the input is blank.
    pub fn resolve(input: &str, fallback: &str) -> Self {
        match input.trim() {
            "" => Self(fallback.trim().to_string()),
            trimmed => Self(trimmed.to_string()),
        }
    }

    /// Reads a name carried by the presentation route.
    ///
    /// Returns `None` when the value is absent or blank: the name was never submitted.
    pub fn from_param(value: Option<&str>) -> Option<Self> {
        let trimmed = value?.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_trims_input() {
        assert_eq!(DisplayName::resolve("  김코드 ", FALLBACK_NAME).as_str(), "김코드");
    }

    #[test]
    fn resolve_blank_uses_fallback() {
        assert_eq!(DisplayName::resolve("", FALLBACK_NAME).as_str(), FALLBACK_NAME);
        assert_eq!(DisplayName::resolve(" \t\n", FALLBACK_NAME).as_str(), FALLBACK_NAME);
    }

    #[test]
    fn resolve_keeps_inner_whitespace() {
        let name = DisplayName::resolve(" Ada  Lovelace ", FALLBACK_NAME);
        assert_eq!(name.as_str(), "Ada  Lovelace");
    }

    #[test]
    fn from_param_rejects_missing_and_blank() {
        assert_eq!(DisplayName::from_param(None), None);
        assert_eq!(DisplayName::from_param(Some("")), None);
        assert_eq!(DisplayName::from_param(Some("   ")), None);
    }

    #[test]
    fn from_param_trims() {
        let name = DisplayName::from_param(Some(" 김코드")).unwrap();
        assert_eq!(name.to_string(), "김코드");
    }
}
