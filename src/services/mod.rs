//! Workflows behind the console pages.
//!
//! Save services are free async functions generic over the repository trait
//! they need; list services wire a repository into a [`PagedQuery`].
//!
//! [`PagedQuery`]: crate::query::PagedQuery

use thiserror::Error;

use crate::dto::api::ServiceResponse;
use crate::forms::FormError;
use crate::query::NETWORK_ERROR_MESSAGE;
use crate::repository::errors::RepositoryError;

pub mod admin_users;
pub mod negocios;
pub mod notifications;
pub mod settings;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("form error: {0}")]
    Form(#[from] FormError),

    #[error("type constraint violation: {0}")]
    TypeConstraint(String),

    #[error("backend rejected the request with status {status}: {message}")]
    Backend { status: u16, message: String },

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// Text shown to the operator when the workflow fails.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Form(err) => err.user_message(),
            ServiceError::TypeConstraint(_) => "Revisa los campos del formulario.".to_string(),
            ServiceError::Backend { message, .. } => message.clone(),
            ServiceError::Repository(_) => NETWORK_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Successful save: the message to show and whatever the backend echoed.
#[derive(Debug, Clone, PartialEq)]
pub struct Saved<T> {
    pub message: String,
    pub data: Option<T>,
}

/// Interprets a save envelope: `200`/`201` succeed with the backend message
/// (or `success`), anything else fails with the backend message (or
/// `failure`).
pub(crate) fn accept<T>(
    response: ServiceResponse<T>,
    success: &str,
    failure: &str,
) -> ServiceResult<Saved<T>> {
    if response.is_success() {
        let message = response.message().unwrap_or(success).to_string();
        return Ok(Saved {
            message,
            data: response.data,
        });
    }

    let message = response.message().unwrap_or(failure).to_string();
    log::error!(
        "Backend rejected save with status {}: {message}",
        response.status
    );
    Err(ServiceError::Backend {
        status: response.status,
        message,
    })
}
