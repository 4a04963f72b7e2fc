//! DTO for per-business settings.

use serde::{Deserialize, Serialize};

use crate::domain::business_config::BusinessConfig;

/// Body of `/Negocio/Config`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessConfigDto {
    pub porcentaje_ventas: f64,
    pub logo_url: Option<String>,
}

impl From<&BusinessConfig> for BusinessConfigDto {
    fn from(value: &BusinessConfig) -> Self {
        Self {
            porcentaje_ventas: value.porcentaje_ventas.get(),
            logo_url: value.logo_url.as_ref().map(|u| u.as_str().to_string()),
        }
    }
}
