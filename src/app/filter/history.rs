//! Address history.
//!
//! The application keeps its filter state in an address, the query part of a
//! link such as `?search=tuner&tags=sql`. [`Location`] is the seam between the
//! filter state manager and whatever stores that address; [`SessionHistory`] is
//! the in-memory back/forward stack used by the desktop shell.

/// Something that holds the current address and a navigable history of earlier ones.
///
/// Queries are stored without the leading `?`.
pub trait Location {
    fn current_query(&self) -> &str;

    /// Add a new history entry, discarding anything ahead of the current one.
    fn push_query(&mut self, query: String);

    /// Overwrite the current entry without adding history.
    fn replace_query(&mut self, query: String);

    /// Move one entry back. Returns `false` at the start of history.
    fn back(&mut self) -> bool;

    /// Move one entry forward. Returns `false` at the end of history.
    fn forward(&mut self) -> bool;

    fn can_go_back(&self) -> bool;

    fn can_go_forward(&self) -> bool;
}

/// Browser-style history stack kept for the lifetime of the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionHistory {
    entries: Vec<String>,
    index: usize,
}

impl SessionHistory {
    pub fn new(initial_query: impl Into<String>) -> Self {
        let initial_query = initial_query.into();
        let initial_query = initial_query
            .strip_prefix('?')
            .map(str::to_string)
            .unwrap_or(initial_query);
        Self {
            entries: vec![initial_query],
            index: 0,
        }
    }

    /// Number of entries, never zero.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Default for SessionHistory {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl Location for SessionHistory {
    fn current_query(&self) -> &str {
        &self.entries[self.index]
    }

    fn push_query(&mut self, query: String) {
        self.entries.truncate(self.index + 1);
        self.entries.push(query);
        self.index = self.entries.len() - 1;
    }

    fn replace_query(&mut self, query: String) {
        self.entries[self.index] = query;
    }

    fn back(&mut self) -> bool {
        if self.can_go_back() {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    fn forward(&mut self) -> bool {
        if self.can_go_forward() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    fn can_go_back(&self) -> bool {
        self.index > 0
    }

    fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }
}
