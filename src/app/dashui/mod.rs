//! Desktop user interface for Prompt Dash.
//!
//! A single eframe window drawn with egui. The layout, top to bottom:
//!
//! - **Menu bar** ([`menu`]): history navigation, copy link, clear filters, help,
//!   quit, and the Catppuccin theme picker
//! - **Address bar**: back/forward buttons and the editable `?query` link
//! - **Filter bar**: title search, the [`tag_input::TagInput`] with suggestions, and
//!   the active tags as removable chips
//! - **Prompt cards** ([`prompt_list`]): one card per visible prompt
//! - **Status bar**: result counter
//!
//! Widgets never mutate application state directly. They return
//! [`app::UiAction`] values which [`app::PromptApp`] applies after the frame is
//! built, routing filter changes through [`crate::app::filter::FilterStateManager`].
//!
//! [`help_window::HelpWindow`] lists the keyboard shortcuts and the address format.
//! The copy confirmation is drawn by [`crate::app::notifications::notice_window`].

pub mod app;
pub mod help_window;
pub mod menu;
pub mod prompt_list;
pub mod tag_input;

pub use app::{PromptApp, ThemeChoice, UiAction};
pub use help_window::HelpWindow;
pub use menu::{MenuAction, NavigationAvailability};
pub use tag_input::TagInput;
