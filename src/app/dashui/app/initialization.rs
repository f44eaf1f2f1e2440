//! App creation and restored preferences

use super::PromptApp;
use crate::app::catalog::PromptCatalog;
use crate::app::filter::query::query_from_address;
use crate::app::filter::{FilterStateManager, SessionHistory, TagUniverse};
use eframe::egui;

impl PromptApp {
    /// Create the app from the eframe creation context, restoring the saved theme.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        catalog: PromptCatalog,
        initial_address: &str,
    ) -> Self {
        let mut app = Self::with_catalog(catalog, initial_address);

        if let Some(storage) = cc.storage {
            if let Some(saved) = eframe::get_value::<PromptApp>(storage, eframe::APP_KEY) {
                app.theme = saved.theme;
            }
        }

        app.apply_theme(&cc.egui_ctx);
        app
    }

    /// Build the app around a loaded catalog, starting history at `initial_address`.
    ///
    /// The tag universe is derived here once and never recomputed. Filters are
    /// read from the address on the first frame.
    pub fn with_catalog(catalog: PromptCatalog, initial_address: &str) -> Self {
        let tag_universe = TagUniverse::from_prompts(catalog.prompts());
        let history = SessionHistory::new(query_from_address(initial_address));

        trace_info!(
            "Prompt catalog ready: {} prompts, {} distinct tags",
            catalog.len(),
            tag_universe.len()
        );

        Self {
            catalog,
            tag_universe,
            filters: FilterStateManager::new(history),
            ..Self::default()
        }
    }

    /// Read the filters from the launch address on the first frame and put the
    /// resulting link in the window title. Later calls do nothing.
    pub fn initialize_filters(&mut self, ctx: &egui::Context) -> bool {
        if !self.filters.initialize() {
            return false;
        }
        self.sync_window_title(ctx);
        true
    }

    /// Window title reflecting the current address.
    pub fn window_title(&self) -> String {
        let link = self.filters.share_link();
        if link.is_empty() {
            "Prompt Dash".to_string()
        } else {
            format!("Prompt Dash {}", link)
        }
    }

    pub(super) fn sync_window_title(&self, ctx: &egui::Context) {
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.window_title()));
    }
}
