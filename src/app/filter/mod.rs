//! Filtering of the prompt catalog and its reflection in the address.
//!
//! - [`state`] - the search text and active tag set
//! - [`query`] - encoding of that state as a `?search=..&tags=..` query string
//! - [`history`] - the address and its back/forward stack
//! - [`manager`] - the single owner that keeps state and address in step
//! - [`autocomplete`] - the tag universe and suggestions for the tag input
//! - [`visible`] - which prompts pass the current filters

pub mod autocomplete;
pub mod history;
pub mod manager;
pub mod query;
pub mod state;
pub mod visible;

pub use autocomplete::{available_tags, TagUniverse};
pub use history::{Location, SessionHistory};
pub use manager::FilterStateManager;
pub use state::FilterState;
pub use visible::{matches_filters, visible_prompts};
