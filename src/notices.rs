//! Operator-facing notices.
//!
//! Workflows report their outcome as a [`Notice`] published on a
//! [`NoticeBus`]; whatever renders the console drains the receiving end.

use tokio::sync::mpsc;

use crate::services::{Saved, ServiceError, ServiceResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Debug,
    Info,
    Success,
    Warning,
    Error,
}

/// Display class of a notice level.
pub fn alert_level_to_str(level: &NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Error => "danger",
        NoticeLevel::Warning => "warning",
        NoticeLevel::Success => "success",
        NoticeLevel::Info => "info",
        NoticeLevel::Debug => "info",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn css_class(&self) -> &'static str {
        alert_level_to_str(&self.level)
    }
}

impl From<&ServiceError> for Notice {
    fn from(err: &ServiceError) -> Self {
        Notice::error(err.user_message())
    }
}

/// Sending half of the console's notice channel. Cheap to clone.
#[derive(Debug, Clone)]
pub struct NoticeBus {
    tx: mpsc::UnboundedSender<Notice>,
}

impl NoticeBus {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notice>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Returns `false` when nobody listens anymore.
    pub fn publish(&self, notice: Notice) -> bool {
        match self.tx.send(notice) {
            Ok(()) => true,
            Err(err) => {
                log::debug!("Dropping notice, receiver closed: {}", err.0.message);
                false
            }
        }
    }

    /// Publishes the outcome of a save workflow.
    pub fn report<T>(&self, result: &ServiceResult<Saved<T>>) -> bool {
        let notice = match result {
            Ok(saved) => Notice::success(saved.message.as_str()),
            Err(err) => Notice::from(err),
        };
        self.publish(notice)
    }
}
