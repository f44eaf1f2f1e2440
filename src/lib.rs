//! Prompt Dash - a browsable, filterable catalog of text prompts
//!
//! Prompt Dash is a desktop application that lists a static set of prompts and lets the
//! user narrow the list by title and by tags. The active filters live in an address
//! (`?search=tuner&tags=sql`) with back/forward history, so a filtered view can be
//! copied as a link, pasted back later, or passed on the command line. Each prompt card
//! has a button that copies the prompt text to the clipboard.
//!
//! # Architecture Overview
//!
//! - **Dataset** ([`app::catalog`]): immutable prompt records and language names,
//!   embedded at compile time or read from JSON files at startup
//! - **Filtering** ([`app::filter`]): filter state, its query string encoding, the
//!   history stack, tag autocompletion, and the visible-prompt computation
//! - **UI Layer** ([`app::dashui`]): egui-based window with address bar, filter bar and
//!   prompt cards
//! - **Clipboard and notices** ([`app::clipboard`], [`app::notifications`])
//! - **Configuration** ([`app::config`]): command line and `settings.toml`
//!
//! The entry point is [`PromptApp`].

#![warn(clippy::all, rust_2018_idioms)]

// Include logging macros first
#[macro_use]
pub mod logging_macros;

pub mod app;
pub use app::PromptApp;
