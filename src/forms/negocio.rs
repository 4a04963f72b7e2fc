//! Create/update form for business records.

use serde::Deserialize;

use crate::domain::negocio::NegocioUpsert;
use crate::domain::types::{NegocioId, NegocioName, optional_text};
use crate::forms::{FormError, editing_id};

/// Fields bound to the business editor.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NegocioForm {
    /// Identifier of the record being edited; `None` or `0` for a new one.
    pub id: Option<i32>,
    pub nombre: String,
    pub facebook: String,
    pub instagram: String,
    pub sitio: String,
    pub direccion: String,
    pub categoria: String,
    pub activo: bool,
}

impl Default for NegocioForm {
    fn default() -> Self {
        Self {
            id: None,
            nombre: String::new(),
            facebook: String::new(),
            instagram: String::new(),
            sitio: String::new(),
            direccion: String::new(),
            categoria: String::new(),
            activo: true,
        }
    }
}

impl NegocioForm {
    /// Clears every field back to the "new business" state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_editing(&self) -> bool {
        editing_id(self.id).is_some()
    }
}

impl TryFrom<&NegocioForm> for NegocioUpsert {
    type Error = FormError;

    fn try_from(form: &NegocioForm) -> Result<Self, Self::Error> {
        let nombre = NegocioName::new(form.nombre.as_str()).map_err(|_| FormError::MissingName)?;
        let id = editing_id(form.id)
            .map(NegocioId::new)
            .transpose()
            .map_err(|_| FormError::InvalidNegocioId)?;

        Ok(Self {
            id,
            nombre,
            categoria: optional_text(Some(&form.categoria)),
            facebook: optional_text(Some(&form.facebook)),
            instagram: optional_text(Some(&form.instagram)),
            sitio_web: optional_text(Some(&form.sitio)),
            direccion: optional_text(Some(&form.direccion)),
            activo: form.activo,
        })
    }
}
