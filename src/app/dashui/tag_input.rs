use crate::app::filter::TagUniverse;
use eframe::egui;

const MAX_SUGGESTIONS: usize = 8;

/// Tag filter input with autocompletion from the tag universe.
#[derive(Debug, Default)]
pub struct TagInput {
    pub text: String,
}

impl TagInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the input and its suggestions. Returns the tag the user picked,
    /// either by clicking a suggestion or by pressing Enter on typed text.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        universe: &TagUniverse,
        active_tags: &[String],
    ) -> Option<String> {
        let mut picked = None;

        ui.vertical(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.text)
                    .hint_text("Filter by tag...")
                    .desired_width(200.0),
            );

            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                picked = self.submit_typed();
                return;
            }

            let suggestions = universe.suggestions(&self.text, active_tags);
            if suggestions.is_empty() {
                return;
            }

            ui.horizontal_wrapped(|ui| {
                for tag in suggestions.iter().take(MAX_SUGGESTIONS) {
                    if ui.small_button(*tag).on_hover_text("Add tag filter").clicked() {
                        picked = Some(tag.to_string());
                    }
                }
                if suggestions.len() > MAX_SUGGESTIONS {
                    ui.weak(format!("+{} more", suggestions.len() - MAX_SUGGESTIONS));
                }
            });
        });

        if let Some(tag) = &picked {
            trace_debug!("Tag picked from input: {}", tag);
            self.text.clear();
        }
        picked
    }

    /// The trimmed typed text as a tag, clearing the input. Blank input yields nothing.
    pub fn submit_typed(&mut self) -> Option<String> {
        let typed = self.text.trim().to_string();
        self.text.clear();
        (!typed.is_empty()).then_some(typed)
    }
}
