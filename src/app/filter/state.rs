/// Current search text and active tag filters.
///
/// Active tags are stored lower-cased in insertion order and are never duplicated.
/// The search text is kept as typed; matching lower-cases both sides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_text: String,
    active_tags: Vec<String>,
}

impl FilterState {
    pub fn new<I, S>(search_text: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = Self {
            search_text: search_text.into(),
            active_tags: Vec::new(),
        };
        for tag in tags {
            state.insert_tag(tag.as_ref());
        }
        state
    }

    pub fn active_tags(&self) -> &[String] {
        &self.active_tags
    }

    /// Case-insensitive membership test.
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.active_tags.iter().any(|t| *t == wanted)
    }

    /// Lower-case and append `tag`. Returns `false` when it was already active.
    pub fn insert_tag(&mut self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        if self.active_tags.contains(&tag) {
            return false;
        }
        self.active_tags.push(tag);
        true
    }

    /// Remove an exact match. Returns `false` when `tag` was not active.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.active_tags.len();
        self.active_tags.retain(|t| t != tag);
        self.active_tags.len() != before
    }

    pub fn clear(&mut self) {
        self.search_text.clear();
        self.active_tags.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.search_text.is_empty() && self.active_tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_lowercases_and_dedupes() {
        let mut state = FilterState::default();
        assert!(state.insert_tag("Refactor"));
        assert!(!state.insert_tag("REFACTOR"));
        assert!(!state.insert_tag("refactor"));
        assert_eq!(state.active_tags(), ["refactor"]);
    }

    #[test]
    fn test_insert_preserves_order() {
        let state = FilterState::new("", ["b", "a", "c"]);
        assert_eq!(state.active_tags(), ["b", "a", "c"]);
    }

    #[test]
    fn test_remove_is_exact_and_tolerates_absent() {
        let mut state = FilterState::new("", ["sql", "js"]);
        assert!(!state.remove_tag("python"));
        assert!(state.remove_tag("sql"));
        assert_eq!(state.active_tags(), ["js"]);
    }

    #[test]
    fn test_has_tag_ignores_case() {
        let state = FilterState::new("", ["sql"]);
        assert!(state.has_tag("SQL"));
        assert!(!state.has_tag("js"));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut state = FilterState::new("tuner", ["sql"]);
        assert!(!state.is_empty());
        state.clear();
        assert!(state.is_empty());
    }
}
