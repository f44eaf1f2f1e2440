use egui::Color32;

pub mod notice_window;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Error,
    Success,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    pub source: String, // e.g., "Copy Prompt", "Copy Link"
}

impl Notification {
    pub fn new_success(title: String, message: String, source: String) -> Self {
        Self {
            title,
            message,
            notification_type: NotificationType::Success,
            source,
        }
    }

    pub fn new_error(title: String, message: String, source: String) -> Self {
        Self {
            title,
            message,
            notification_type: NotificationType::Error,
            source,
        }
    }

    pub fn get_color(&self) -> Color32 {
        match self.notification_type {
            NotificationType::Error => Color32::from_rgb(220, 50, 50),
            NotificationType::Success => Color32::from_rgb(40, 180, 40),
        }
    }

    pub fn get_icon(&self) -> &'static str {
        match self.notification_type {
            NotificationType::Error => "✗",
            NotificationType::Success => "✓",
        }
    }
}

/// Holds the blocking notice, if any.
///
/// Only one notice is shown at a time; a newer one replaces the current one. The
/// notice stays until the user dismisses it.
#[derive(Debug, Default)]
pub struct NotificationManager {
    blocking_notice: Option<Notification>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_blocking(&mut self, notification: Notification) {
        self.blocking_notice = Some(notification);
    }

    pub fn current(&self) -> Option<&Notification> {
        self.blocking_notice.as_ref()
    }

    pub fn has_blocking_notice(&self) -> bool {
        self.blocking_notice.is_some()
    }

    pub fn dismiss(&mut self) {
        self.blocking_notice = None;
    }
}
