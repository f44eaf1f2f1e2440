use super::state::FilterState;
use crate::app::catalog::PromptRecord;

/// Whether `prompt` passes both filters: the title contains the search text and
/// every active tag is present on the record (all comparisons case-insensitive).
pub fn matches_filters(prompt: &PromptRecord, state: &FilterState) -> bool {
    let search = state.search_text.to_lowercase();
    matches_with_lowered_search(prompt, &search, state.active_tags())
}

/// The records that pass the current filters, in dataset order.
pub fn visible_prompts<'a>(prompts: &'a [PromptRecord], state: &FilterState) -> Vec<&'a PromptRecord> {
    let search = state.search_text.to_lowercase();
    prompts
        .iter()
        .filter(|prompt| matches_with_lowered_search(prompt, &search, state.active_tags()))
        .collect()
}

fn matches_with_lowered_search(prompt: &PromptRecord, search: &str, active_tags: &[String]) -> bool {
    prompt.title.to_lowercase().contains(search)
        && active_tags.iter().all(|tag| prompt.has_tag(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompts() -> Vec<PromptRecord> {
        vec![
            PromptRecord::new("Refactor Helper", &["refactor", "js"], "js", "js", "..."),
            PromptRecord::new("SQL Tuner", &["sql"], "sql", "sql", "..."),
            PromptRecord::new("Schema Designer", &["SQL", "design"], "en", "sql", "..."),
        ]
    }

    fn titles(prompts: Vec<&PromptRecord>) -> Vec<&str> {
        prompts.into_iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_empty_filters_return_everything_in_order() {
        let prompts = prompts();
        let visible = visible_prompts(&prompts, &FilterState::default());
        assert_eq!(
            titles(visible),
            vec!["Refactor Helper", "SQL Tuner", "Schema Designer"]
        );
    }

    #[test]
    fn test_title_search_is_case_insensitive() {
        let prompts = prompts();
        let state = FilterState::new("TUNER", Vec::<String>::new());
        assert_eq!(titles(visible_prompts(&prompts, &state)), vec!["SQL Tuner"]);
    }

    #[test]
    fn test_search_matches_title_only() {
        let prompts = prompts();
        let state = FilterState::new("design", Vec::<String>::new());
        assert_eq!(
            titles(visible_prompts(&prompts, &state)),
            vec!["Schema Designer"]
        );
        let state = FilterState::new("...", Vec::<String>::new());
        assert!(visible_prompts(&prompts, &state).is_empty());
    }

    #[test]
    fn test_tags_combine_with_and() {
        let prompts = prompts();
        let state = FilterState::new("", ["sql"]);
        assert_eq!(
            titles(visible_prompts(&prompts, &state)),
            vec!["SQL Tuner", "Schema Designer"]
        );

        let state = FilterState::new("", ["sql", "design"]);
        assert_eq!(
            titles(visible_prompts(&prompts, &state)),
            vec!["Schema Designer"]
        );
    }

    #[test]
    fn test_matches_filters_agrees_with_visible_prompts() {
        let prompts = prompts();
        let state = FilterState::new("s", ["sql"]);
        let visible = visible_prompts(&prompts, &state);
        for prompt in &prompts {
            assert_eq!(
                matches_filters(prompt, &state),
                visible.iter().any(|v| std::ptr::eq(*v, prompt))
            );
        }
    }
}
