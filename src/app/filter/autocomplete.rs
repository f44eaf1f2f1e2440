use crate::app::catalog::PromptRecord;
use std::collections::HashSet;

/// Every distinct tag in `prompts`, compared case-insensitively, in first-seen
/// order and first-seen casing.
pub fn available_tags(prompts: &[PromptRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    prompts
        .iter()
        .flat_map(|prompt| prompt.tags.iter())
        .filter(|tag| seen.insert(tag.to_lowercase()))
        .cloned()
        .collect()
}

/// The set of tags offered for autocompletion. Computed once from the dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagUniverse {
    tags: Vec<String>,
}

impl TagUniverse {
    pub fn from_prompts(prompts: &[PromptRecord]) -> Self {
        let tags = available_tags(prompts);
        trace_debug!("Tag universe built with {} tags", tags.len());
        Self { tags }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Tags containing `input` (case-insensitive) that are not already active.
    ///
    /// Nothing is suggested until the user has typed something.
    pub fn suggestions(&self, input: &str, active_tags: &[String]) -> Vec<&str> {
        if input.is_empty() {
            return Vec::new();
        }

        let needle = input.to_lowercase();
        self.tags
            .iter()
            .filter(|tag| {
                let lowered = tag.to_lowercase();
                lowered.contains(&needle) && !active_tags.iter().any(|a| a.to_lowercase() == lowered)
            })
            .map(String::as_str)
            .collect()
    }
}
