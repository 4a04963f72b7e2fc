//! DTOs for administrative users.

use serde::{Deserialize, Serialize};

use crate::domain::admin_user::{AdminUserUpsert, full_name};
use crate::domain::types::{AdminUserId, NegocioId};
use crate::dto::cell;

/// Administrative user as listed by `/UsuarioAdmin/GetPaged`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserDto {
    pub id_usuario: i32,
    pub nombre: String,
    pub apellido_paterno: String,
    #[serde(default)]
    pub apellido_materno: Option<String>,
    pub email: String,
    #[serde(default)]
    pub telefono: Option<String>,
    pub usuario: String,
    #[serde(default)]
    pub es_admin: bool,
    #[serde(default)]
    pub id_negocio: Option<i32>,
    #[serde(default)]
    pub negocio_nombre: Option<String>,
}

/// Body of `/UsuarioAdmin/CreateOrUpdate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUpdateAdminUserDto {
    #[serde(default)]
    pub id_usuario: Option<i32>,
    pub nombre: String,
    pub apellido_paterno: String,
    pub apellido_materno: Option<String>,
    pub email: String,
    pub telefono: String,
    pub usuario: String,
    pub es_admin: bool,
    pub id_negocio: Option<i32>,
}

impl From<&AdminUserUpsert> for CreateUpdateAdminUserDto {
    fn from(value: &AdminUserUpsert) -> Self {
        Self {
            id_usuario: value.id.map(AdminUserId::get),
            nombre: value.nombre.as_str().to_string(),
            apellido_paterno: value.apellido_paterno.as_str().to_string(),
            apellido_materno: value
                .apellido_materno
                .as_ref()
                .map(|s| s.as_str().to_string()),
            email: value.email.as_str().to_string(),
            telefono: value.telefono.as_str().to_string(),
            usuario: value.usuario.as_str().to_string(),
            es_admin: value.es_admin,
            id_negocio: value.negocio_id.map(NegocioId::get),
        }
    }
}

/// Row of the administrative users grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminUserRow {
    pub id: i32,
    pub nombre_completo: String,
    pub usuario: String,
    pub email: String,
    pub telefono: Option<String>,
    pub negocio: Option<String>,
    pub admin: bool,
}

impl AdminUserRow {
    pub fn telefono_cell(&self) -> &str {
        cell(self.telefono.as_deref())
    }

    pub fn negocio_cell(&self) -> &str {
        cell(self.negocio.as_deref())
    }
}

impl From<AdminUserDto> for AdminUserRow {
    fn from(dto: AdminUserDto) -> Self {
        Self {
            id: dto.id_usuario,
            nombre_completo: full_name(
                &dto.nombre,
                &dto.apellido_paterno,
                dto.apellido_materno.as_deref(),
            ),
            usuario: dto.usuario,
            email: dto.email,
            telefono: dto.telefono,
            negocio: dto.negocio_nombre,
            admin: dto.es_admin,
        }
    }
}
