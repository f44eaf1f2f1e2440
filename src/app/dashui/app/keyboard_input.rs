//! History navigation shortcuts

use super::{PromptApp, UiAction};
use eframe::egui;

impl PromptApp {
    /// Alt+Left / Alt+Right move through history, F1 opens help.
    pub(super) fn handle_keyboard_input(&self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        if self.notification_manager.has_blocking_notice() {
            return;
        }

        ctx.input(|input| {
            if input.modifiers.alt && input.key_pressed(egui::Key::ArrowLeft) {
                actions.push(UiAction::Back);
            }
            if input.modifiers.alt && input.key_pressed(egui::Key::ArrowRight) {
                actions.push(UiAction::Forward);
            }
            if input.key_pressed(egui::Key::F1) {
                actions.push(UiAction::ShowHelp);
            }
        });
    }
}
