//! Owner of the filter state and its address synchronisation.
//!
//! State flows in two directions, each with its own trigger:
//!
//! - address → state: [`FilterStateManager::initialize`] on the first frame and
//!   [`FilterStateManager::on_pop_state`] after back/forward navigation. Neither
//!   writes history.
//! - state → address: every mutation ends in `sync_address`, which pushes a
//!   history entry only when the encoded state differs from the current address.
//!
//! Keeping both directions in one owner with that comparison is what prevents a
//! navigation from echoing back into a new history entry.

use super::history::{Location, SessionHistory};
use super::query;
use super::state::FilterState;

pub struct FilterStateManager<L: Location = SessionHistory> {
    location: L,
    state: FilterState,
    initialized: bool,
}

impl<L: Location> FilterStateManager<L> {
    pub fn new(location: L) -> Self {
        Self {
            location,
            state: FilterState::default(),
            initialized: false,
        }
    }

    /// Read the initial state from the address. Only the first call has any effect,
    /// and only that call returns `true`.
    ///
    /// The current entry is rewritten in canonical form (lower-cased tags, dropped
    /// empty segments) so later comparisons against it are exact.
    pub fn initialize(&mut self) -> bool {
        if self.initialized {
            return false;
        }
        self.initialized = true;
        self.read_address();

        let canonical = query::encode(&self.state);
        if canonical != self.location.current_query() {
            trace_debug!(
                "Normalising initial address {:?} to {:?}",
                self.location.current_query(),
                canonical
            );
            self.location.replace_query(canonical);
        }
        trace_info!("Filter state initialised: {:?}", self.state);
        true
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Re-read state after the address moved through history.
    pub fn on_pop_state(&mut self) {
        self.read_address();
        trace_debug!("Filter state restored from history: {:?}", self.state);
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.state.search_text = text.into();
        self.sync_address();
    }

    /// Add a tag filter (lower-cased). Already active tags are ignored.
    pub fn add_tag(&mut self, tag: &str) {
        if self.state.insert_tag(tag) {
            trace_debug!("Tag filter added: {}", tag.to_lowercase());
        }
        self.sync_address();
    }

    pub fn remove_tag(&mut self, tag: &str) {
        if self.state.remove_tag(tag) {
            trace_debug!("Tag filter removed: {}", tag);
        }
        self.sync_address();
    }

    /// Drop the search text and every tag filter as a single history entry.
    pub fn clear_filters(&mut self) {
        self.state.clear();
        self.sync_address();
    }

    /// Navigate back and restore the earlier state. Returns whether anything moved.
    pub fn back(&mut self) -> bool {
        if self.location.back() {
            self.on_pop_state();
            true
        } else {
            false
        }
    }

    /// Navigate forward and restore the later state. Returns whether anything moved.
    pub fn forward(&mut self) -> bool {
        if self.location.forward() {
            self.on_pop_state();
            true
        } else {
            false
        }
    }

    /// Open a pasted link as a new history entry.
    pub fn open_address(&mut self, address: &str) {
        self.state = query::decode(&query::query_from_address(address));
        log_info!("Opened address {:?}", address);
        self.sync_address();
    }

    /// The current address as a shareable `?query` link, or an empty string when
    /// no filter is active.
    pub fn share_link(&self) -> String {
        let current = self.location.current_query();
        if current.is_empty() {
            String::new()
        } else {
            format!("?{}", current)
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn can_go_back(&self) -> bool {
        self.location.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.location.can_go_forward()
    }

    fn read_address(&mut self) {
        self.state = query::decode(self.location.current_query());
    }

    /// Push the encoded state unless the address already says the same thing.
    fn sync_address(&mut self) -> bool {
        let target = query::encode(&self.state);
        if target == self.location.current_query() {
            return false;
        }
        self.location.push_query(target);
        true
    }
}

impl Default for FilterStateManager<SessionHistory> {
    fn default() -> Self {
        Self::new(SessionHistory::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn manager(initial: &str) -> FilterStateManager {
        let mut manager = FilterStateManager::new(SessionHistory::new(initial));
        manager.initialize();
        manager
    }

    #[test]
    fn test_initialize_reads_address() {
        let manager = manager("?search=tuner&tags=sql,performance");
        assert_eq!(manager.state().search_text, "tuner");
        assert_eq!(manager.state().active_tags(), ["sql", "performance"]);
    }

    #[test]
    fn test_initialize_runs_once() {
        let mut fresh = FilterStateManager::new(SessionHistory::new("search=first"));
        assert!(fresh.initialize());
        assert!(!fresh.initialize());

        let mut manager = manager("search=first");
        manager.set_search_text("second");
        assert!(!manager.initialize());
        assert_eq!(manager.state().search_text, "second");
    }

    #[test]
    fn test_initialize_normalises_without_new_entry() {
        let manager = manager("tags=SQL,,Js");
        assert_eq!(manager.location().entry_count(), 1);
        assert_eq!(manager.location().current_query(), "tags=sql,js");
    }

    #[test]
    fn test_mutations_push_history() {
        let mut manager = manager("");
        manager.set_search_text("sql");
        manager.add_tag("Performance");
        assert_eq!(manager.location().entry_count(), 3);
        assert_eq!(
            manager.location().current_query(),
            "search=sql&tags=performance"
        );
    }

    #[test]
    fn test_noop_mutations_do_not_push() {
        let mut manager = manager("tags=sql");
        manager.add_tag("SQL");
        manager.remove_tag("python");
        manager.set_search_text("");
        assert_eq!(manager.location().entry_count(), 1);
        assert_eq!(manager.state().active_tags().len(), 1);
    }

    #[test]
    fn test_empty_params_are_omitted() {
        let mut manager = manager("");
        manager.add_tag("sql");
        manager.remove_tag("sql");
        assert_eq!(manager.location().current_query(), "");
        assert_eq!(manager.share_link(), "");
    }

    #[test]
    fn test_back_and_forward_restore_state_without_pushing() {
        let mut manager = manager("");
        manager.set_search_text("s");
        manager.add_tag("sql");

        assert!(manager.back());
        assert_eq!(manager.state().search_text, "s");
        assert!(manager.state().active_tags().is_empty());

        assert!(manager.back());
        assert!(manager.state().is_empty());
        assert!(!manager.back());

        assert!(manager.forward());
        assert!(manager.forward());
        assert_eq!(manager.state().active_tags(), ["sql"]);
        assert_eq!(manager.location().entry_count(), 3);
    }

    #[test]
    fn test_pop_state_never_grows_history() {
        let mut manager = manager("search=x");
        manager.add_tag("a");
        manager.back();
        manager.on_pop_state();
        manager.on_pop_state();
        assert_eq!(manager.location().entry_count(), 2);
    }

    #[test]
    fn test_open_address_pushes_canonical_entry() {
        let mut manager = manager("");
        manager.open_address("https://prompts.example/?tags=SQL&search=tuner");
        assert_eq!(manager.state().search_text, "tuner");
        assert_eq!(manager.state().active_tags(), ["sql"]);
        assert_eq!(manager.share_link(), "?search=tuner&tags=sql");
        assert_eq!(manager.location().entry_count(), 2);

        manager.open_address("?search=tuner&tags=sql");
        assert_eq!(manager.location().entry_count(), 2);
    }

    #[test]
    fn test_clear_filters_is_single_entry() {
        let mut manager = manager("search=x&tags=a,b");
        manager.clear_filters();
        assert!(manager.state().is_empty());
        assert_eq!(manager.location().entry_count(), 2);
        assert!(manager.back());
        assert_eq!(manager.state().active_tags(), ["a", "b"]);
    }
}
