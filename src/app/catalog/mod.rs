//! Static prompt dataset.
//!
//! The catalog is loaded once at startup and never mutated afterwards. By default it
//! comes from the JSON files embedded at compile time (`data/prompts.json` and
//! `data/languages.json`); either file can be replaced by one on disk through
//! [`DatasetSources`].

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub mod language;

pub use language::LanguageCatalog;

/// Prompts shipped with the binary.
pub const EMBEDDED_PROMPTS: &str = include_str!("../../../data/prompts.json");
/// Language names shipped with the binary.
pub const EMBEDDED_LANGUAGES: &str = include_str!("../../../data/languages.json");

/// One catalog entry.
///
/// Tags keep their authored casing and order, duplicates included.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "PromptRecordFile")]
pub struct PromptRecord {
    pub title: String,
    pub tags: Vec<String>,
    pub language_input: String,
    pub language_output: String,
    pub body: String,
}

impl PromptRecord {
    pub fn new(
        title: impl Into<String>,
        tags: &[&str],
        language_input: impl Into<String>,
        language_output: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            language_input: language_input.into(),
            language_output: language_output.into(),
            body: body.into(),
        }
    }

    /// Case-insensitive check for a tag on this record.
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }
}

/// On-disk shape of a prompt. Older datasets carry a single `language` code
/// instead of an input/output pair.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptRecordFile {
    title: String,
    #[serde(default)]
    tags: Vec<String>,
    language_input: Option<String>,
    language_output: Option<String>,
    language: Option<String>,
    #[serde(alias = "body")]
    prompt: String,
}

impl From<PromptRecordFile> for PromptRecord {
    fn from(file: PromptRecordFile) -> Self {
        let language_input = file
            .language_input
            .or_else(|| file.language.clone())
            .unwrap_or_default();
        let language_output = file
            .language_output
            .or(file.language)
            .unwrap_or_else(|| language_input.clone());

        Self {
            title: file.title,
            tags: file.tags,
            language_input,
            language_output,
            body: file.prompt,
        }
    }
}

/// Optional on-disk replacements for the embedded dataset files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetSources {
    pub prompts_path: Option<PathBuf>,
    pub languages_path: Option<PathBuf>,
}

impl DatasetSources {
    pub fn is_embedded(&self) -> bool {
        self.prompts_path.is_none() && self.languages_path.is_none()
    }
}

/// The immutable prompt dataset together with its language names.
#[derive(Debug, Clone, Default)]
pub struct PromptCatalog {
    prompts: Vec<PromptRecord>,
    languages: LanguageCatalog,
}

impl PromptCatalog {
    pub fn new(prompts: Vec<PromptRecord>, languages: LanguageCatalog) -> Self {
        Self { prompts, languages }
    }

    /// Parse the dataset embedded in the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_PROMPTS, EMBEDDED_LANGUAGES)
            .context("Embedded prompt dataset is invalid")
    }

    pub fn from_json(prompts_json: &str, languages_json: &str) -> Result<Self> {
        let prompts: Vec<PromptRecord> =
            serde_json::from_str(prompts_json).context("Failed to parse prompt records")?;
        let languages: LanguageCatalog =
            serde_json::from_str(languages_json).context("Failed to parse language catalog")?;
        Ok(Self::new(prompts, languages))
    }

    /// Load the dataset, reading any file named in `sources` and using the
    /// embedded copy for the rest.
    pub fn load(sources: &DatasetSources) -> Result<Self> {
        let prompts_json = match &sources.prompts_path {
            Some(path) => read_dataset_file(path)?,
            None => EMBEDDED_PROMPTS.to_string(),
        };
        let languages_json = match &sources.languages_path {
            Some(path) => read_dataset_file(path)?,
            None => EMBEDDED_LANGUAGES.to_string(),
        };

        let catalog = Self::from_json(&prompts_json, &languages_json)?;
        log_info!(
            "Loaded {} prompts and {} language names ({})",
            catalog.prompts.len(),
            catalog.languages.len(),
            if sources.is_embedded() {
                "embedded"
            } else {
                "file override"
            }
        );
        Ok(catalog)
    }

    /// Like [`PromptCatalog::load`], but a broken override file is logged and the
    /// embedded dataset is used instead.
    pub fn load_or_embedded(sources: &DatasetSources) -> Result<Self> {
        match Self::load(sources) {
            Ok(catalog) => Ok(catalog),
            Err(e) if !sources.is_embedded() => {
                log_error!("Failed to load prompt dataset override: {:#}", e);
                Self::embedded()
            }
            Err(e) => Err(e),
        }
    }

    pub fn prompts(&self) -> &[PromptRecord] {
        &self.prompts
    }

    pub fn languages(&self) -> &LanguageCatalog {
        &self.languages
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}

fn read_dataset_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset file {}", path.display()))
}
