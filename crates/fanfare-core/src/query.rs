//! Query string carrying the display name between the two screens.

use std::fmt;

use url::form_urlencoded;

use crate::name::DisplayName;

/// Query parameter key for the display name.
pub const NAME_PARAM: &str = "name";

/// Parsed `?name=...` query.
///
/// Holds the raw decoded value; trimming and fallback happen in [`DisplayName`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameQuery {
    name: Option<String>,
}

impl NameQuery {
    /// Parses a query string, with or without the leading `?`.
    ///
    /// The first `name` pair wins; unknown keys are ignored.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let name = form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == NAME_PARAM)
            .map(|(_, value)| value.into_owned());
        Self { name }
    }

    /// Builds the query a submitted name navigates with.
    pub fn for_name(name: &DisplayName) -> Self {
        Self {
            name: Some(name.as_str().to_string()),
        }
    }

    /// Raw decoded value, if the parameter was present.
    pub fn raw(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Trimmed value to pre-fill the name entry field with.
    pub fn prefill(&self) -> String {
        self.name.as_deref().map(str::trim).unwrap_or_default().to_string()
    }

    /// Effective display name, or `None` when absent or blank.
    pub fn display_name(&self) -> Option<DisplayName> {
        DisplayName::from_param(self.raw())
    }
}

/// Renders `name=<urlencoded>` without the leading `?`, or nothing when empty.
impl fmt::Display for NameQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(name) = &self.name else {
            return Ok(());
        };
        let encoded = form_urlencoded::Serializer::new(String::new())
            .append_pair(NAME_PARAM, name)
            .finish();
        f.write_str(&encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::FALLBACK_NAME;

    #[test]
    fn encodes_korean_name() {
        let query = NameQuery::for_name(&DisplayName::resolve("김코드", FALLBACK_NAME));
        assert_eq!(query.to_string(), "name=%EA%B9%80%EC%BD%94%EB%93%9C");
    }

    #[test]
    fn parses_encoded_name() {
        let query = NameQuery::parse("?name=%EA%B9%80%EC%BD%94%EB%93%9C");
        assert_eq!(query.raw(), Some("김코드"));
        assert_eq!(query.display_name().unwrap().as_str(), "김코드");
    }

    #[test]
    fn plus_decodes_to_space() {
        let query = NameQuery::parse("name=Ada+Lovelace");
        assert_eq!(query.raw(), Some("Ada Lovelace"));
    }

    #[test]
    fn missing_param_has_no_name() {
        let query = NameQuery::parse("?other=1");
        assert_eq!(query.raw(), None);
        assert_eq!(query.display_name(), None);
        assert_eq!(query.prefill(), "");
        assert_eq!(query.to_string(), "");
    }

    #[test]
    fn blank_param_has_no_display_name() {
        let query = NameQuery::parse("name=%20%20");
        assert_eq!(query.raw(), Some("  "));
        assert_eq!(query.display_name(), None);
    }

    #[test]
    fn prefill_is_trimmed() {
        assert_eq!(NameQuery::parse("name=+%EA%B9%80+").prefill(), "김");
    }

    #[test]
    fn first_name_pair_wins() {
        let query = NameQuery::parse("name=first&name=second");
        assert_eq!(query.raw(), Some("first"));
    }

    #[test]
    fn reserved_characters_survive() {
        let name = DisplayName::resolve("a&b=c?d", FALLBACK_NAME);
        let query = NameQuery::for_name(&name);
        assert_eq!(NameQuery::parse(&query.to_string()).display_name(), Some(name));
    }
}
