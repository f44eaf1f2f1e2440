//! Language code to display name mapping.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Read-only mapping from a language code (`"en"`, `"sql"`) to the name shown to users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct LanguageCatalog {
    names: BTreeMap<String, String>,
}

impl LanguageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display name for `code`, or the raw code when it is not mapped.
    pub fn display_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.names.get(code).map(String::as_str).unwrap_or(code)
    }

    /// Describe a prompt's language pair.
    ///
    /// Identical codes collapse to a single display name; otherwise the result
    /// reads `from <input> to <output>`. Each side falls back to its raw code
    /// independently.
    pub fn describe(&self, input_code: &str, output_code: &str) -> String {
        if input_code == output_code {
            self.display_name(input_code).to_string()
        } else {
            format!(
                "from {} to {}",
                self.display_name(input_code),
                self.display_name(output_code)
            )
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.names.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for LanguageCatalog
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            names: iter
                .into_iter()
                .map(|(code, name)| (code.into(), name.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> LanguageCatalog {
        [("en", "English"), ("fr", "French")].into_iter().collect()
    }

    #[test]
    fn test_same_code_uses_display_name() {
        assert_eq!(catalog().describe("en", "en"), "English");
    }

    #[test]
    fn test_different_codes_describe_direction() {
        assert_eq!(catalog().describe("en", "fr"), "from English to French");
    }

    #[test]
    fn test_unmapped_code_falls_back_to_raw_code() {
        assert_eq!(catalog().describe("xx", "xx"), "xx");
        assert_eq!(catalog().describe("xx", "fr"), "from xx to French");
        assert_eq!(catalog().describe("en", "yy"), "from English to yy");
    }

    #[test]
    fn test_deserializes_from_json_object() {
        let catalog: LanguageCatalog =
            serde_json::from_str(r#"{"en": "English", "sql": "SQL"}"#).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("sql"));
        assert_eq!(catalog.display_name("sql"), "SQL");
    }
}
