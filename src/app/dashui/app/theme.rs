//! Theme management

use super::{PromptApp, ThemeChoice};
use eframe::egui;

pub fn catppuccin_theme(choice: ThemeChoice) -> catppuccin_egui::Theme {
    match choice {
        ThemeChoice::Latte => catppuccin_egui::LATTE,
        ThemeChoice::Frappe => catppuccin_egui::FRAPPE,
        ThemeChoice::Macchiato => catppuccin_egui::MACCHIATO,
        ThemeChoice::Mocha => catppuccin_egui::MOCHA,
    }
}

impl PromptApp {
    /// Apply the selected theme to the UI context
    pub(super) fn apply_theme(&self, ctx: &egui::Context) {
        catppuccin_egui::set_theme(ctx, catppuccin_theme(self.theme));

        // Square-ish cards and windows
        let mut style = (*ctx.style()).clone();
        style.visuals.window_corner_radius = egui::CornerRadius::same(2);
        ctx.set_style(style);
    }
}
