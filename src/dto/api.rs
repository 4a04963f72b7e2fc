//! Response envelope shared by every backend endpoint.

use serde::{Deserialize, Serialize};

/// Status code the backend uses for a successful read or update.
pub const STATUS_OK: u16 = 200;
/// Status code the backend uses for a successful insert.
pub const STATUS_CREATED: u16 = 201;

/// Envelope wrapping every backend payload.
///
/// `status` mirrors the HTTP semantics of the operation even when the
/// transport itself succeeded; `message` is meant to be shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceResponse<T> {
    pub status: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> ServiceResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: STATUS_OK,
            message: String::new(),
            data: Some(data),
        }
    }

    pub fn failure(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            data: None,
        }
    }

    /// `true` for 200/201 regardless of whether `data` is present.
    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK || self.status == STATUS_CREATED
    }

    /// Backend message, or `None` when it is blank.
    pub fn message(&self) -> Option<&str> {
        let message = self.message.trim();
        (!message.is_empty()).then_some(message)
    }
}

/// One page of a server-side filtered list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    /// Number of matching records across all pages.
    #[serde(alias = "totalCount")]
    pub total: usize,
}

impl<T> PagedResult<T> {
    pub fn new(items: Vec<T>, total: usize) -> Self {
        Self { items, total }
    }

    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}
