//! Create/update form for administrative users.

use serde::Deserialize;
use validator::Validate;

use crate::domain::admin_user::AdminUserUpsert;
use crate::domain::negocio::NegocioOption;
use crate::domain::types::{
    AdminEmail, AdminUserId, NegocioId, PersonName, PhoneNumber, TypeConstraintError, Username,
};
use crate::forms::{FormError, editing_id};

/// Fields bound to the administrative user editor.
#[derive(Debug, Clone, Deserialize, Validate, PartialEq, Eq)]
#[serde(default)]
pub struct AdminUserForm {
    /// Identifier of the user being edited; `None` or `0` for a new one.
    pub editing_id: Option<i32>,
    #[validate(length(max = 100))]
    pub nombre: String,
    #[validate(length(max = 100))]
    pub apellido_paterno: String,
    #[validate(length(max = 100))]
    pub apellido_materno: String,
    #[validate(length(max = 254))]
    pub email: String,
    pub telefono: String,
    #[validate(length(max = 50))]
    pub usuario: String,
    pub es_admin: bool,
    pub id_negocio: Option<i32>,
    /// Label of the selected business, kept so the picker can show it
    /// before the option list has loaded.
    pub negocio_nombre: String,
}

impl Default for AdminUserForm {
    fn default() -> Self {
        Self {
            editing_id: None,
            nombre: String::new(),
            apellido_paterno: String::new(),
            apellido_materno: String::new(),
            email: String::new(),
            telefono: String::new(),
            usuario: String::new(),
            es_admin: true,
            id_negocio: None,
            negocio_nombre: String::new(),
        }
    }
}

impl AdminUserForm {
    pub fn is_editing(&self) -> bool {
        editing_id(self.editing_id).is_some()
    }

    /// Leaves edit mode and clears every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Binds the picker selection (or clears it).
    pub fn select_negocio(&mut self, option: Option<&NegocioOption>) {
        match option {
            Some(option) => {
                self.id_negocio = Some(option.id.get());
                self.negocio_nombre = option.nombre.clone();
            }
            None => {
                self.id_negocio = None;
                self.negocio_nombre.clear();
            }
        }
    }

    /// Label of the submit button.
    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Actualizar"
        } else {
            "Guardar"
        }
    }
}

fn required(value: &str, field: &'static str) -> Result<PersonName, FormError> {
    PersonName::new(value).map_err(|_| FormError::MissingField(field))
}

impl TryFrom<&AdminUserForm> for AdminUserUpsert {
    type Error = FormError;

    fn try_from(form: &AdminUserForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let nombre = required(&form.nombre, "nombre")?;
        let apellido_paterno = required(&form.apellido_paterno, "apellido_paterno")?;
        let apellido_materno = PersonName::new(form.apellido_materno.as_str()).ok();

        let email = match AdminEmail::new(form.email.as_str()) {
            Ok(email) => email,
            Err(_) if form.email.trim().is_empty() => {
                return Err(FormError::MissingField("email"));
            }
            Err(_) => return Err(FormError::InvalidEmail),
        };
        let telefono = PhoneNumber::new(form.telefono.as_str()).map_err(|err| match err {
            TypeConstraintError::EmptyString => FormError::MissingField("telefono"),
            _ => FormError::InvalidPhoneNumber,
        })?;
        let usuario =
            Username::new(form.usuario.as_str()).map_err(|_| FormError::MissingField("usuario"))?;

        let id = editing_id(form.editing_id)
            .map(AdminUserId::new)
            .transpose()
            .map_err(|_| FormError::InvalidAdminUserId)?;
        let negocio_id = form
            .id_negocio
            .map(NegocioId::new)
            .transpose()
            .map_err(|_| FormError::InvalidNegocioId)?;

        Ok(Self {
            id,
            nombre,
            apellido_paterno,
            apellido_materno,
            email,
            telefono,
            usuario,
            es_admin: form.es_admin,
            negocio_id,
        })
    }
}
