use crate::notifier::{Notice, Notifier};
use arboard::Clipboard;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Clipboard not available")]
    Unavailable,

    #[error("Failed to set clipboard text: {0}")]
    Write(#[from] arboard::Error),
}

/// Anything that can put text on a clipboard
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard
pub struct SystemClipboard {
    clipboard: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let clipboard = Clipboard::new().ok();
        if clipboard.is_none() {
            tracing::warn!("Failed to initialize clipboard support");
        }
        Self { clipboard }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = self.clipboard.as_mut().ok_or(ClipboardError::Unavailable)?;
        clipboard.set_text(text.to_string())?;
        tracing::debug!("Copied {} chars to clipboard", text.len());
        Ok(())
    }
}

/// Copy `text` and tell the user how it went. Returns whether the copy succeeded.
///
/// `what` names the copied thing in the notice, e.g. "Original query".
pub fn copy_with_notice(
    writer: &mut dyn ClipboardWriter,
    notifier: &mut dyn Notifier,
    what: &str,
    text: &str,
) -> bool {
    match writer.write_text(text) {
        Ok(()) => {
            notifier.notify(Notice::info(format!("{} copied to clipboard", what)));
            true
        }
        Err(e) => {
            tracing::error!("Failed to copy {}: {}", what, e);
            notifier.notify(Notice::error(format!("Could not copy {}: {}", what, e)));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifier::NoticeLevel;

    #[derive(Default)]
    struct MemoryClipboard {
        text: Option<String>,
        broken: bool,
    }

    impl ClipboardWriter for MemoryClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.broken {
                return Err(ClipboardError::Unavailable);
            }
            self.text = Some(text.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        notices: Vec<Notice>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&mut self, notice: Notice) {
            self.notices.push(notice);
        }
    }

    #[test]
    fn successful_copy_sends_info() {
        let mut clipboard = MemoryClipboard::default();
        let mut notifier = RecordingNotifier::default();

        assert!(copy_with_notice(
            &mut clipboard,
            &mut notifier,
            "Diff",
            "+ C"
        ));
        assert_eq!(clipboard.text.as_deref(), Some("+ C"));
        assert_eq!(notifier.notices.len(), 1);
        assert_eq!(notifier.notices[0].level, NoticeLevel::Info);
        assert_eq!(notifier.notices[0].message, "Diff copied to clipboard");
    }

    #[test]
    fn failed_copy_sends_error() {
        let mut clipboard = MemoryClipboard {
            broken: true,
            ..Default::default()
        };
        let mut notifier = RecordingNotifier::default();

        assert!(!copy_with_notice(
            &mut clipboard,
            &mut notifier,
            "Original query",
            "SELECT 1"
        ));
        assert!(clipboard.text.is_none());
        assert_eq!(notifier.notices[0].level, NoticeLevel::Error);
        assert!(notifier.notices[0].message.contains("Clipboard not available"));
    }
}
