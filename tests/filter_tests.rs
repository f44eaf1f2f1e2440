//! Filter pipeline tests against the embedded catalog.
//!
//! These exercise the manager, the query codec and the visible list together,
//! the way the desktop shell drives them.

use pretty_assertions::assert_eq;
use promptdash::app::catalog::{PromptCatalog, PromptRecord};
use promptdash::app::filter::history::Location;
use promptdash::app::filter::query::{decode, encode, query_from_address};
use promptdash::app::filter::{
    available_tags, visible_prompts, FilterState, FilterStateManager, SessionHistory, TagUniverse,
};

fn catalog() -> PromptCatalog {
    PromptCatalog::embedded().expect("embedded dataset parses")
}

fn titles(prompts: &[&PromptRecord]) -> Vec<String> {
    prompts.iter().map(|p| p.title.clone()).collect()
}

fn started(address: &str) -> FilterStateManager {
    let mut manager = FilterStateManager::new(SessionHistory::new(query_from_address(address)));
    manager.initialize();
    manager
}

#[test]
fn test_search_then_tag_narrows_to_nothing() {
    let catalog = catalog();
    let mut manager = started("");

    manager.set_search_text("sql");
    assert_eq!(
        titles(&visible_prompts(catalog.prompts(), manager.state())),
        vec!["SQL Tuner".to_string()]
    );
    assert_eq!(manager.location().current_query(), "search=sql");

    manager.add_tag("refactor");
    assert!(visible_prompts(catalog.prompts(), manager.state()).is_empty());
    assert_eq!(manager.location().current_query(), "search=sql&tags=refactor");
}

#[test]
fn test_adding_tags_never_grows_the_visible_list() {
    let catalog = catalog();
    let mut manager = started("");
    let mut previous = visible_prompts(catalog.prompts(), manager.state()).len();

    for tag in ["docs", "translation", "es"] {
        manager.add_tag(tag);
        let now = visible_prompts(catalog.prompts(), manager.state()).len();
        assert!(now <= previous, "adding {} grew the list", tag);
        previous = now;
    }
}

#[test]
fn test_tag_filter_is_case_insensitive() {
    let catalog = catalog();
    let mut manager = started("");

    manager.add_tag("Code Review");
    assert_eq!(manager.state().active_tags(), &["code review".to_string()]);
    assert_eq!(
        titles(&visible_prompts(catalog.prompts(), manager.state())),
        vec![
            "Refactor Helper".to_string(),
            "Unit Test Generator".to_string(),
            "Explain Like a Reviewer".to_string(),
        ]
    );
}

#[test]
fn test_launch_address_restores_filters() {
    let catalog = catalog();
    let manager = started("https://prompts.example/?search=Tuner&tags=SQL,performance");

    assert_eq!(manager.state().search_text, "Tuner");
    assert_eq!(
        manager.state().active_tags(),
        &["sql".to_string(), "performance".to_string()]
    );
    assert_eq!(
        titles(&visible_prompts(catalog.prompts(), manager.state())),
        vec!["SQL Tuner".to_string()]
    );
    // Rewritten in place, not pushed
    assert_eq!(manager.location().entry_count(), 1);
    assert_eq!(manager.location().current_query(), "search=Tuner&tags=sql,performance");
}

#[test]
fn test_back_and_forward_restore_without_new_entries() {
    let mut manager = started("");
    manager.set_search_text("port");
    manager.add_tag("rust");
    assert_eq!(manager.location().entry_count(), 3);

    assert!(manager.back());
    assert_eq!(manager.state().search_text, "port");
    assert!(manager.state().active_tags().is_empty());

    assert!(manager.back());
    assert!(manager.state().is_empty());
    assert!(!manager.back());

    assert!(manager.forward());
    assert!(manager.forward());
    assert_eq!(manager.state().active_tags(), &["rust".to_string()]);
    assert_eq!(manager.location().entry_count(), 3);
}

#[test]
fn test_new_change_after_back_drops_forward_entries() {
    let mut manager = started("");
    manager.add_tag("sql");
    manager.add_tag("design");
    manager.back();

    manager.add_tag("performance");
    assert!(!manager.can_go_forward());
    assert_eq!(
        manager.location().entries(),
        &[
            "".to_string(),
            "tags=sql".to_string(),
            "tags=sql,performance".to_string(),
        ]
    );
}

#[test]
fn test_repeated_add_tag_is_a_no_op() {
    let mut manager = started("");
    manager.add_tag("docs");
    let entries = manager.location().entry_count();

    manager.add_tag("docs");
    manager.add_tag("DOCS");
    assert_eq!(manager.state().active_tags(), &["docs".to_string()]);
    assert_eq!(manager.location().entry_count(), entries);
}

#[test]
fn test_shared_link_opens_to_the_same_state() {
    let mut sender = started("");
    sender.set_search_text("unit test");
    sender.add_tag("ts");
    sender.add_tag("code review");
    let link = sender.share_link();
    assert!(link.starts_with('?'));

    let receiver = started(&link);
    assert_eq!(receiver.state(), sender.state());
}

#[test]
fn test_codec_preserves_awkward_values() {
    let state = FilterState::new("50% off & more", ["c++", "a,b", "naïve"]);
    let encoded = encode(&state);

    assert!(!encoded.contains(' '));
    assert_eq!(decode(&encoded), state);
}

#[test]
fn test_language_descriptions() {
    let catalog = catalog();
    let languages = catalog.languages();

    assert_eq!(languages.describe("en", "es"), "from English to Spanish");
    assert_eq!(languages.describe("xx", "en"), "from xx to English");

    let polisher = catalog
        .prompts()
        .iter()
        .find(|p| p.title == "Error Message Polisher")
        .expect("polisher prompt present");
    assert_eq!(
        languages.describe(&polisher.language_input, &polisher.language_output),
        "English"
    );
}

#[test]
fn test_tag_universe_from_embedded_dataset() {
    let catalog = catalog();
    let tags = available_tags(catalog.prompts());
    let universe = TagUniverse::from_prompts(catalog.prompts());

    assert_eq!(universe.tags(), tags.as_slice());
    assert_eq!(tags.first().map(String::as_str), Some("refactor"));
    // "code review" only differs in case from "Code Review"
    assert!(tags.iter().any(|t| t == "Code Review"));
    assert!(!tags.iter().any(|t| t == "code review"));

    assert_eq!(universe.suggestions("RE", &[]), vec!["refactor", "Code Review"]);
    let active = vec!["refactor".to_string()];
    assert_eq!(universe.suggestions("re", &active), vec!["Code Review"]);
}
