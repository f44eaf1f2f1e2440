//! Modular implementation of PromptApp
//!
//! - initialization: App creation and restored preferences
//! - theme: Theme management
//! - keyboard_input: History navigation shortcuts
//! - event_handling: Applying the actions collected while rendering
//! - rendering: Top menu bar, address bar, status bar and central panel

use super::help_window::HelpWindow;
use super::tag_input::TagInput;
use crate::app::catalog::{PromptCatalog, PromptRecord};
use crate::app::filter::{visible_prompts, FilterStateManager, TagUniverse};
use crate::app::notifications::notice_window::NoticeWindow;
use crate::app::notifications::NotificationManager;
use eframe::egui;

// Module declarations
mod event_handling;
mod initialization;
mod keyboard_input;
mod rendering;
pub mod theme;

#[derive(serde::Deserialize, serde::Serialize, Clone, Copy, Debug, PartialEq, Default)]
pub enum ThemeChoice {
    #[default]
    Latte,
    Frappe,
    Macchiato,
    Mocha,
}

impl std::fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeChoice::Latte => write!(f, "Latte"),
            ThemeChoice::Frappe => write!(f, "Frappe"),
            ThemeChoice::Macchiato => write!(f, "Macchiato"),
            ThemeChoice::Mocha => write!(f, "Mocha"),
        }
    }
}

/// Something the user asked for during a frame.
///
/// Widgets only record actions while they render; the app applies them once the
/// frame's UI is built, so no widget holds a borrow of the state it changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    SetSearch(String),
    AddTag(String),
    RemoveTag(String),
    ClearFilters,
    Back,
    Forward,
    OpenAddress(String),
    CopyPrompt(String),
    CopyLink,
    ShowHelp,
    Quit,
}

#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct PromptApp {
    pub theme: ThemeChoice,

    #[serde(skip)]
    pub catalog: PromptCatalog,
    #[serde(skip)]
    pub tag_universe: TagUniverse,
    #[serde(skip)]
    pub filters: FilterStateManager,
    #[serde(skip)]
    pub tag_input: TagInput,
    #[serde(skip)]
    /// Text in the address bar while the user edits it
    pub address_draft: String,
    #[serde(skip)]
    pub help_window: HelpWindow,
    #[serde(skip)]
    pub notification_manager: NotificationManager,
}

impl Default for PromptApp {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::default(),
            catalog: PromptCatalog::default(),
            tag_universe: TagUniverse::default(),
            filters: FilterStateManager::default(),
            tag_input: TagInput::default(),
            address_draft: String::new(),
            help_window: HelpWindow::new(),
            notification_manager: NotificationManager::new(),
        }
    }
}

impl PromptApp {
    /// Prompts passing the current filters, in dataset order.
    pub fn visible_prompts(&self) -> Vec<&PromptRecord> {
        visible_prompts(self.catalog.prompts(), self.filters.state())
    }
}

impl eframe::App for PromptApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // First frame reads the filters from the launch address
        self.initialize_filters(ctx);

        let mut actions = Vec::new();
        self.handle_keyboard_input(ctx, &mut actions);

        self.render_top_menu_bar(ctx, &mut actions);
        self.render_address_bar(ctx, &mut actions);
        self.render_status_bar(ctx);
        self.render_central_panel(ctx, &mut actions);

        self.help_window.show(ctx);
        NoticeWindow::show(&mut self.notification_manager, ctx);

        if !actions.is_empty() {
            for action in actions {
                self.apply_action(ctx, action);
            }
            ctx.request_repaint();
        }
    }
}
