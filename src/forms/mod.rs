//! Form definitions backing the console pages.

use thiserror::Error;
use validator::ValidationErrors;

pub mod admin_user;
pub mod business_config;
pub mod negocio;
pub mod notification;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("name is required")]
    MissingName,

    #[error("required field missing: {0}")]
    MissingField(&'static str),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid phone number")]
    InvalidPhoneNumber,

    #[error("invalid business id")]
    InvalidNegocioId,

    #[error("invalid user id")]
    InvalidAdminUserId,

    #[error("business must be selected")]
    MissingNegocio,

    #[error("title must have between 1 and {0} characters")]
    InvalidTitle(usize),

    #[error("body must have between 1 and {0} characters")]
    InvalidBody(usize),

    #[error("invalid url")]
    InvalidUrl,

    #[error("percentage must be between 0 and 100")]
    InvalidPercentage,
}

impl FormError {
    /// Text shown next to the form when the submission is rejected locally.
    pub fn user_message(&self) -> String {
        match self {
            FormError::Validation(_) => "Revisa los campos del formulario.".to_string(),
            FormError::MissingName => "El nombre es obligatorio.".to_string(),
            FormError::MissingField(field) => format!("El campo {field} es obligatorio."),
            FormError::InvalidEmail => "El correo electrónico no es válido.".to_string(),
            FormError::InvalidPhoneNumber => "El teléfono no es válido.".to_string(),
            FormError::InvalidNegocioId => "El negocio seleccionado no es válido.".to_string(),
            FormError::InvalidAdminUserId => "El usuario no es válido.".to_string(),
            FormError::MissingNegocio => "Selecciona un negocio.".to_string(),
            FormError::InvalidTitle(max) => {
                format!("El título debe tener entre 1 y {max} caracteres.")
            }
            FormError::InvalidBody(max) => {
                format!("El mensaje debe tener entre 1 y {max} caracteres.")
            }
            FormError::InvalidUrl => "La URL no es válida.".to_string(),
            FormError::InvalidPercentage => "El porcentaje debe estar entre 0 y 100.".to_string(),
        }
    }
}

/// Maps a non-positive optional identifier (the "new record" sentinel used by
/// the grids) to `None`.
pub(crate) fn editing_id(value: Option<i32>) -> Option<i32> {
    value.filter(|id| *id > 0)
}
