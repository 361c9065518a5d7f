//! Toast notices shown over the page.

use std::collections::VecDeque;

/// How long a notice stays up before dismissing itself.
pub const NOTICE_TTL_MS: u64 = 4000;
pub const MAX_NOTICES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
            NoticeKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Bounded queue, oldest first. Pushing past the cap drops the oldest notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeQueue {
    next_id: u64,
    cap: usize,
    notices: VecDeque<Notice>,
}

impl Default for NoticeQueue {
    fn default() -> Self {
        Self::with_capacity(MAX_NOTICES)
    }
}

impl NoticeQueue {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            next_id: 0,
            cap: cap.max(1),
            notices: VecDeque::new(),
        }
    }

    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        if self.notices.len() == self.cap {
            self.notices.pop_front();
        }
        self.notices.push_back(Notice {
            id: self.next_id,
            kind,
            message: message.into(),
        });
        self.next_id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Error, message)
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Info, message)
    }

    /// Unknown or already-dismissed ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
