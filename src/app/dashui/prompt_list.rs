//! Prompt cards.

use crate::app::catalog::{LanguageCatalog, PromptRecord};
use crate::app::dashui::app::UiAction;
use eframe::egui;
use egui::RichText;

/// Render one card per prompt and return what the user clicked.
pub fn show_prompt_list(
    ui: &mut egui::Ui,
    prompts: &[&PromptRecord],
    languages: &LanguageCatalog,
    active_tags: &[String],
) -> Vec<UiAction> {
    let mut actions = Vec::new();

    if prompts.is_empty() {
        ui.add_space(12.0);
        ui.label(RichText::new("No prompts match the current filters.").italics().weak());
        return actions;
    }

    for (index, prompt) in prompts.iter().enumerate() {
        ui.push_id(index, |ui| {
            if let Some(action) = show_prompt_card(ui, prompt, languages, active_tags) {
                actions.push(action);
            }
        });
        ui.add_space(6.0);
    }

    actions
}

/// Title, language description, body, tag chips and the copy button.
///
/// Clicking a tag chip asks for that tag to be added as a filter; chips for tags
/// that are already active are drawn selected.
pub fn show_prompt_card(
    ui: &mut egui::Ui,
    prompt: &PromptRecord,
    languages: &LanguageCatalog,
    active_tags: &[String],
) -> Option<UiAction> {
    let mut action = None;

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.label(RichText::new(&prompt.title).size(18.0).strong());
        ui.label(
            RichText::new(languages.describe(&prompt.language_input, &prompt.language_output))
                .small()
                .weak(),
        );
        ui.add_space(4.0);
        ui.label(prompt.body.as_str());
        ui.add_space(4.0);

        ui.horizontal_wrapped(|ui| {
            for tag in &prompt.tags {
                let is_active = active_tags.contains(&tag.to_lowercase());
                let chip = egui::Button::new(RichText::new(tag).small()).selected(is_active);
                if ui.add(chip).on_hover_text("Filter by this tag").clicked() {
                    action = Some(UiAction::AddTag(tag.clone()));
                }
            }
        });

        ui.add_space(4.0);
        if ui
            .button("Copy")
            .on_hover_text("Copy the prompt text to the clipboard")
            .clicked()
        {
            action = Some(UiAction::CopyPrompt(prompt.body.clone()));
        }
    });

    action
}
