use super::NotificationManager;
use egui::{Context, RichText};

pub struct NoticeWindow;

impl NoticeWindow {
    /// Render the blocking notice as a modal. Input to the rest of the window is
    /// blocked until the user presses OK, presses Escape, or clicks outside.
    pub fn show(manager: &mut NotificationManager, ctx: &Context) {
        let Some(notification) = manager.current().cloned() else {
            return;
        };

        let mut dismissed = false;
        let modal = egui::Modal::new(egui::Id::new("blocking_notice")).show(ctx, |ui| {
            ui.set_min_width(280.0);

            ui.colored_label(
                notification.get_color(),
                RichText::new(format!("{} {}", notification.get_icon(), notification.title))
                    .strong(),
            );
            ui.separator();
            ui.label(notification.message.as_str());
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label(RichText::new(&notification.source).small().weak());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });
        });

        if dismissed || modal.should_close() {
            manager.dismiss();
        }
    }
}
