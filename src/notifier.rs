use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Something that can show a short message to the user
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Toast notifications, shown for a fixed time and then hidden.
///
/// A new notice replaces the one on screen.
pub struct Toasts {
    current: Option<(Notice, Instant)>,
    duration: Duration,
}

impl Toasts {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    /// The toast to draw at `now`, dropping it once its time is up
    pub fn visible(&mut self, now: Instant) -> Option<&Notice> {
        if let Some((_, hide_time)) = &self.current
            && now >= *hide_time
        {
            self.current = None;
        }
        self.current.as_ref().map(|(notice, _)| notice)
    }

    /// Time left before the current toast hides, for scheduling a repaint
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.current
            .as_ref()
            .map(|(_, hide_time)| hide_time.saturating_duration_since(now))
    }
}

impl Notifier for Toasts {
    fn notify(&mut self, notice: Notice) {
        match notice.level {
            NoticeLevel::Info => tracing::info!("{}", notice.message),
            NoticeLevel::Error => tracing::warn!("{}", notice.message),
        }
        let hide_time = Instant::now() + self.duration;
        self.current = Some((notice, hide_time));
    }
}
