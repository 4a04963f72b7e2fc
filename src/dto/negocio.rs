//! DTOs for business records.

use serde::{Deserialize, Serialize};

use crate::domain::negocio::{NegocioOption, NegocioUpsert};
use crate::domain::types::{NegocioId, TypeConstraintError};
use crate::dto::{cell, yes_no};

/// Business record as listed by `/Negocio/GetPaged`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NegocioDto {
    pub id_negocio: i32,
    pub nombre: String,
    #[serde(default)]
    pub categoria: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub sitio_web: Option<String>,
    #[serde(default)]
    pub direccion: Option<String>,
    #[serde(default)]
    pub es_activo: Option<bool>,
}

/// Body of `/Negocio/CreateOrUpdate`; `idNegocio` is null for inserts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUpdateNegocioDto {
    #[serde(default)]
    pub id_negocio: Option<i32>,
    pub nombre: String,
    pub categoria: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub sitio_web: Option<String>,
    pub direccion: Option<String>,
    pub activo: bool,
}

impl From<&NegocioUpsert> for CreateUpdateNegocioDto {
    fn from(value: &NegocioUpsert) -> Self {
        Self {
            id_negocio: value.id.map(NegocioId::get),
            nombre: value.nombre.as_str().to_string(),
            categoria: value.categoria.clone(),
            facebook: value.facebook.clone(),
            instagram: value.instagram.clone(),
            sitio_web: value.sitio_web.clone(),
            direccion: value.direccion.clone(),
            activo: value.activo,
        }
    }
}

/// Row of the businesses grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NegocioRow {
    pub id: i32,
    pub nombre: String,
    pub categoria: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub sitio: Option<String>,
    pub direccion: Option<String>,
    pub activo: bool,
}

impl NegocioRow {
    /// Cell texts in column order: name, category, facebook, instagram,
    /// site, address, active.
    pub fn cells(&self) -> [&str; 7] {
        [
            self.nombre.as_str(),
            cell(self.categoria.as_deref()),
            cell(self.facebook.as_deref()),
            cell(self.instagram.as_deref()),
            cell(self.sitio.as_deref()),
            cell(self.direccion.as_deref()),
            yes_no(self.activo),
        ]
    }
}

impl From<NegocioDto> for NegocioRow {
    fn from(dto: NegocioDto) -> Self {
        Self {
            id: dto.id_negocio,
            nombre: dto.nombre,
            categoria: dto.categoria,
            facebook: dto.facebook,
            instagram: dto.instagram,
            sitio: dto.sitio_web,
            direccion: dto.direccion,
            // Records without the flag are treated as active.
            activo: dto.es_activo.unwrap_or(true),
        }
    }
}

/// Picking a row from the business picker.
impl TryFrom<&NegocioRow> for NegocioOption {
    type Error = TypeConstraintError;

    fn try_from(row: &NegocioRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: NegocioId::new(row.id)?,
            nombre: row.nombre.clone(),
        })
    }
}
