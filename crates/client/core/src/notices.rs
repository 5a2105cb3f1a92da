//! Client-side status log.
//!
//! Holds transport failures, rejections, and local guidance. Kept apart from
//! the server-authored `logs` in the snapshot, which the HUD renders as-is.
use std::collections::VecDeque;

/// Severity of a client-side notice.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// One client-side status line.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub text: String,
    pub level: NoticeLevel,
}

impl Notice {
    pub fn new(text: impl Into<String>, level: NoticeLevel) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }
}

/// Circular buffer of notices shown to the player.
#[derive(Clone, Debug)]
pub struct NoticeLog {
    entries: VecDeque<Notice>,
    capacity: usize,
}

impl NoticeLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, notice: Notice) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(notice);
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(Notice::new(text, NoticeLevel::Info));
    }

    pub fn warn(&mut self, text: impl Into<String>) {
        self.push(Notice::new(text, NoticeLevel::Warning));
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(Notice::new(text, NoticeLevel::Error));
    }

    /// Most recent first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &Notice> {
        self.entries.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
