//! Applying the actions collected while rendering

use super::{PromptApp, UiAction};
use crate::app::clipboard::{copy_to_clipboard, CopyTarget, EguiClipboard};
use eframe::egui;

impl PromptApp {
    /// Apply one user action to the app state.
    pub fn apply_action(&mut self, ctx: &egui::Context, action: UiAction) {
        let link_before = self.filters.share_link();

        match action {
            UiAction::SetSearch(text) => self.filters.set_search_text(text),
            UiAction::AddTag(tag) => self.filters.add_tag(&tag),
            UiAction::RemoveTag(tag) => self.filters.remove_tag(&tag),
            UiAction::ClearFilters => {
                self.filters.clear_filters();
                self.tag_input.text.clear();
            }
            UiAction::Back => {
                if !self.filters.back() {
                    trace_debug!("Back requested at start of history");
                }
            }
            UiAction::Forward => {
                if !self.filters.forward() {
                    trace_debug!("Forward requested at end of history");
                }
            }
            UiAction::OpenAddress(address) => self.filters.open_address(&address),
            UiAction::CopyPrompt(body) => {
                copy_to_clipboard(
                    &mut EguiClipboard::new(ctx),
                    &body,
                    CopyTarget::Prompt,
                    &mut self.notification_manager,
                );
            }
            UiAction::CopyLink => {
                let link = self.filters.share_link();
                copy_to_clipboard(
                    &mut EguiClipboard::new(ctx),
                    &link,
                    CopyTarget::Link,
                    &mut self.notification_manager,
                );
            }
            UiAction::ShowHelp => {
                self.help_window.open = true;
                trace_info!("Help window opened");
            }
            UiAction::Quit => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                log_info!("Quit requested from menu");
            }
        }

        if self.filters.share_link() != link_before {
            self.sync_window_title(ctx);
        }
    }
}
