//! Copying prompt text to the system clipboard.

use crate::app::notifications::{Notification, NotificationManager};
use anyhow::Result;

/// Destination for copied text.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The platform clipboard, reached through egui's output commands.
///
/// The write is handed to the windowing backend at the end of the frame and its
/// outcome is not reported back.
pub struct EguiClipboard<'a> {
    ctx: &'a egui::Context,
}

impl<'a> EguiClipboard<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx }
    }
}

impl ClipboardSink for EguiClipboard<'_> {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.ctx.copy_text(text.to_owned());
        Ok(())
    }
}

/// What is being copied, which decides the notice wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    Prompt,
    Link,
}

impl CopyTarget {
    pub fn source(&self) -> &'static str {
        match self {
            CopyTarget::Prompt => "Copy Prompt",
            CopyTarget::Link => "Copy Link",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            CopyTarget::Prompt => "Prompt copied to clipboard!",
            CopyTarget::Link => "Link copied to clipboard!",
        }
    }
}

/// Copy `text` verbatim and raise a blocking notice describing the outcome.
///
/// A notice is shown after every attempt. Failures are logged and produce an
/// error notice instead of the confirmation.
pub fn copy_to_clipboard(
    sink: &mut dyn ClipboardSink,
    text: &str,
    target: CopyTarget,
    notifications: &mut NotificationManager,
) -> bool {
    let source = target.source();
    match sink.write_text(text) {
        Ok(()) => {
            log_info!("{}: copied {} characters to clipboard", source, text.chars().count());
            notifications.show_blocking(Notification::new_success(
                "Copied".to_string(),
                target.success_message().to_string(),
                source.to_string(),
            ));
            true
        }
        Err(e) => {
            log_warn!("{}: clipboard write failed: {:#}", source, e);
            notifications.show_blocking(Notification::new_error(
                "Copy failed".to_string(),
                format!("Could not copy to the clipboard: {}", e),
                source.to_string(),
            ));
            false
        }
    }
}
