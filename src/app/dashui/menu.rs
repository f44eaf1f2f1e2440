use crate::app::dashui::app::theme::catppuccin_theme;
use crate::app::dashui::app::ThemeChoice;
use eframe::egui;
use egui::RichText;

#[derive(Debug, PartialEq)]
pub enum MenuAction {
    None,
    ThemeChanged,
    Back,
    Forward,
    CopyLink,
    ClearFilters,
    Help,
    Quit,
}

/// Which history and filter entries are currently usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationAvailability {
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub has_filters: bool,
}

pub fn build_menu(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    theme: &mut ThemeChoice,
    navigation: NavigationAvailability,
) -> MenuAction {
    let mut menu_action = MenuAction::None;
    let original_theme = *theme;

    ui.menu_button("Dash", |ui| {
        if ui
            .add_enabled(navigation.can_go_back, egui::Button::new("Back"))
            .clicked()
        {
            menu_action = MenuAction::Back;
            ui.close();
        }
        if ui
            .add_enabled(navigation.can_go_forward, egui::Button::new("Forward"))
            .clicked()
        {
            menu_action = MenuAction::Forward;
            ui.close();
        }
        ui.separator();
        if ui.button("Copy link").clicked() {
            menu_action = MenuAction::CopyLink;
            ui.close();
        }
        if ui
            .add_enabled(navigation.has_filters, egui::Button::new("Clear filters"))
            .clicked()
        {
            menu_action = MenuAction::ClearFilters;
            ui.close();
        }
        ui.separator();
        if ui.button("Help").clicked() {
            menu_action = MenuAction::Help;
            ui.close();
        }
        if ui.button("Quit").clicked() {
            menu_action = MenuAction::Quit;
        }
    });

    ui.menu_button(RichText::new("🎨").size(18.0), |ui| {
        for choice in [
            ThemeChoice::Latte,
            ThemeChoice::Frappe,
            ThemeChoice::Macchiato,
            ThemeChoice::Mocha,
        ] {
            if ui.selectable_label(*theme == choice, choice.to_string()).clicked() {
                catppuccin_egui::set_theme(ctx, catppuccin_theme(choice));
                *theme = choice;
            }
        }
    });

    if original_theme != *theme && menu_action == MenuAction::None {
        menu_action = MenuAction::ThemeChanged;
    }

    menu_action
}
