use serde::{Deserialize, Serialize};

use crate::domain::types::{AdminEmail, AdminUserId, NegocioId, PersonName, PhoneNumber, Username};

/// Validated create-or-update payload for an administrative user.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminUserUpsert {
    pub id: Option<AdminUserId>,
    pub nombre: PersonName,
    pub apellido_paterno: PersonName,
    pub apellido_materno: Option<PersonName>,
    pub email: AdminEmail,
    pub telefono: PhoneNumber,
    pub usuario: Username,
    pub es_admin: bool,
    pub negocio_id: Option<NegocioId>,
}

impl AdminUserUpsert {
    #[must_use]
    pub fn is_update(&self) -> bool {
        self.id.is_some()
    }

    /// Display name composed of the given name and both surnames.
    pub fn full_name(&self) -> String {
        full_name(
            self.nombre.as_str(),
            self.apellido_paterno.as_str(),
            self.apellido_materno.as_ref().map(|s| s.as_str()),
        )
    }
}

/// Joins name parts with single spaces, skipping blank ones.
pub fn full_name(nombre: &str, apellido_paterno: &str, apellido_materno: Option<&str>) -> String {
    [Some(nombre), Some(apellido_paterno), apellido_materno]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
