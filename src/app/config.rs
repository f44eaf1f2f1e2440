//! Startup configuration.
//!
//! Values come from three places, highest priority first:
//!
//! 1. Command line: `promptdash [ADDRESS] [--query ADDRESS] [--prompts PATH]
//!    [--languages PATH] [--settings PATH]`
//! 2. `settings.toml` in the platform config directory (or the `--settings` path)
//! 3. Built-in defaults (embedded dataset, empty address)
//!
//! UI preferences such as the theme are not part of this; eframe persists them.

use crate::app::catalog::DatasetSources;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_FILTER: &str = "promptdash=info,eframe=info,egui=warn,wgpu=warn,winit=warn";
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Contents of `settings.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub prompts_path: Option<PathBuf>,
    pub languages_path: Option<PathBuf>,
    pub initial_address: Option<String>,
    pub log_filter: Option<String>,
}

impl Settings {
    /// `settings.toml` inside the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "", "promptdash")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE_NAME))
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings file {}", path.display()))
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize settings")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write settings file {}", path.as_ref().display()))
    }

    /// Load from `path`, or from [`Settings::default_path`] when none is given.
    ///
    /// A missing file is not an error and yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(path) => path,
            None => return Ok(Self::default()),
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_file(&path)
    }
}

/// Options given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    pub address: Option<String>,
    pub prompts_path: Option<PathBuf>,
    pub languages_path: Option<PathBuf>,
    pub settings_path: Option<PathBuf>,
}

/// Parse the process arguments (including the program name in `args[0]`).
///
/// Unknown flags are ignored. The first bare argument is taken as the address.
pub fn parse_launch_args(args: &[String]) -> LaunchOptions {
    let mut options = LaunchOptions::default();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--query" | "--url" => options.address = iter.next().cloned(),
            "--prompts" => options.prompts_path = iter.next().map(PathBuf::from),
            "--languages" => options.languages_path = iter.next().map(PathBuf::from),
            "--settings" => options.settings_path = iter.next().map(PathBuf::from),
            other if other.starts_with("--") => {}
            other => {
                if options.address.is_none() {
                    options.address = Some(other.to_string());
                }
            }
        }
    }

    options
}

/// Effective configuration after merging the command line over the settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub dataset: DatasetSources,
    pub initial_address: String,
    pub log_filter: String,
}

impl AppConfig {
    pub fn resolve(launch: &LaunchOptions, settings: &Settings) -> Self {
        Self {
            dataset: DatasetSources {
                prompts_path: launch
                    .prompts_path
                    .clone()
                    .or_else(|| settings.prompts_path.clone()),
                languages_path: launch
                    .languages_path
                    .clone()
                    .or_else(|| settings.languages_path.clone()),
            },
            initial_address: launch
                .address
                .clone()
                .or_else(|| settings.initial_address.clone())
                .unwrap_or_default(),
            log_filter: settings
                .log_filter
                .clone()
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::resolve(&LaunchOptions::default(), &Settings::default())
    }
}
