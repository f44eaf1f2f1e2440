use crate::app::filter::query::{SEARCH_PARAM, TAGS_PARAM};
use eframe::egui;
use egui::{Context, RichText, Ui};

#[derive(Default)]
pub struct HelpWindow {
    pub open: bool,
}

impl HelpWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, ctx: &Context) {
        if !self.open {
            return;
        }

        let central_panel_size = ctx.available_rect().size();
        let window_width = central_panel_size.x.min(520.0);
        let window_height = central_panel_size.y.min(420.0);

        let mut open = self.open;
        egui::Window::new("Help")
            .open(&mut open)
            .fixed_size([window_width, window_height])
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                Self::ui_content(ui);
            });
        self.open = open;
    }

    fn ui_content(ui: &mut Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(5.0);

            ui.heading("Keyboard Shortcuts");
            ui.add_space(5.0);

            ui.horizontal(|ui| {
                ui.label(RichText::new("Alt+Left").strong());
                ui.label("- Back to the previous filters");
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new("Alt+Right").strong());
                ui.label("- Forward to the next filters");
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new("F1").strong());
                ui.label("- Show this window");
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new("Enter").strong());
                ui.label("- In the tag box, add the typed tag");
            });

            ui.add_space(15.0);

            ui.heading("Filters");
            ui.add_space(5.0);

            ui.label("The search box matches prompt titles, ignoring case.");
            ui.label("Every active tag must be present on a prompt for it to show.");
            ui.label("Click a tag on a card to add it, or click an active tag to remove it.");

            ui.add_space(15.0);

            ui.heading("Sharing");
            ui.add_space(5.0);

            ui.label("The address bar holds the current filters, for example:");
            ui.monospace(format!("?{}=sql&{}=performance,sql", SEARCH_PARAM, TAGS_PARAM));
            ui.label("Copy link puts it on the clipboard. Paste an address and press Enter to open it.");

            ui.add_space(15.0);
            ui.label(
                RichText::new(format!("Build {}", env!("PROMPTDASH_BUILD")))
                    .small()
                    .weak(),
            );
        });
    }
}
