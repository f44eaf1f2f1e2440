//! UI rendering for top menu, address bar, status bar and central panel

use super::{PromptApp, UiAction};
use crate::app::dashui::menu::{self, MenuAction, NavigationAvailability};
use crate::app::dashui::prompt_list;
use eframe::egui;
use egui::RichText;

impl PromptApp {
    /// Render the top menu bar
    pub(super) fn render_top_menu_bar(&mut self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        let navigation = NavigationAvailability {
            can_go_back: self.filters.can_go_back(),
            can_go_forward: self.filters.can_go_forward(),
            has_filters: !self.filters.state().is_empty(),
        };

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                let menu_action = menu::build_menu(ui, ctx, &mut self.theme, navigation);

                match menu_action {
                    MenuAction::ThemeChanged => {
                        trace_info!("Theme changed to {}", self.theme);
                    }
                    MenuAction::Back => actions.push(UiAction::Back),
                    MenuAction::Forward => actions.push(UiAction::Forward),
                    MenuAction::CopyLink => actions.push(UiAction::CopyLink),
                    MenuAction::ClearFilters => actions.push(UiAction::ClearFilters),
                    MenuAction::Help => actions.push(UiAction::ShowHelp),
                    MenuAction::Quit => actions.push(UiAction::Quit),
                    MenuAction::None => {}
                }
            });
        });
    }

    /// Render the back/forward buttons and the editable address
    pub(super) fn render_address_bar(&mut self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        egui::TopBottomPanel::top("address_bar").show(ctx, |ui| {
            ui.add_space(2.0);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(self.filters.can_go_back(), egui::Button::new("⬅"))
                    .on_hover_text("Back (Alt+Left)")
                    .clicked()
                {
                    actions.push(UiAction::Back);
                }
                if ui
                    .add_enabled(self.filters.can_go_forward(), egui::Button::new("➡"))
                    .on_hover_text("Forward (Alt+Right)")
                    .clicked()
                {
                    actions.push(UiAction::Forward);
                }

                let copy_width = 80.0;
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.address_draft)
                        .hint_text("?search=...&tags=...")
                        .desired_width((ui.available_width() - copy_width).max(120.0)),
                );

                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    actions.push(UiAction::OpenAddress(self.address_draft.clone()));
                }
                if !response.has_focus() {
                    self.address_draft = self.filters.share_link();
                }

                if ui
                    .button("Copy link")
                    .on_hover_text("Copy the current address to the clipboard")
                    .clicked()
                {
                    actions.push(UiAction::CopyLink);
                }
            });
            ui.add_space(2.0);
        });
    }

    /// Render the result counter
    pub(super) fn render_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let visible = self.visible_prompts().len();
                ui.label(format!("{} of {} prompts", visible, self.catalog.len()));
                ui.separator();
                ui.label(format!("{} tags", self.tag_universe.len()));
            });
        });
    }

    /// Render the filter bar and the prompt cards
    pub(super) fn render_central_panel(&mut self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Prompt Library");
            ui.add_space(6.0);

            self.render_filter_bar(ui, actions);

            ui.separator();

            let visible = self.visible_prompts();
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    actions.extend(prompt_list::show_prompt_list(
                        ui,
                        &visible,
                        self.catalog.languages(),
                        self.filters.state().active_tags(),
                    ));
                });
        });
    }

    fn render_filter_bar(&mut self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        ui.horizontal_top(|ui| {
            let mut search = self.filters.state().search_text.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut search)
                    .hint_text("Search by title...")
                    .desired_width(260.0),
            );
            if response.changed() {
                actions.push(UiAction::SetSearch(search));
            }

            if let Some(tag) = self.tag_input.show(
                ui,
                &self.tag_universe,
                self.filters.state().active_tags(),
            ) {
                actions.push(UiAction::AddTag(tag));
            }
        });

        let active_tags = self.filters.state().active_tags();
        if !active_tags.is_empty() {
            ui.add_space(4.0);
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new("Tags:").strong());
                for tag in active_tags {
                    if ui
                        .button(format!("{} ×", tag))
                        .on_hover_text("Remove tag filter")
                        .clicked()
                    {
                        actions.push(UiAction::RemoveTag(tag.clone()));
                    }
                }
                if ui.small_button("Clear filters").clicked() {
                    actions.push(UiAction::ClearFilters);
                }
            });
        }
    }
}
