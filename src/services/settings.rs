//! Per-business configuration.

use crate::domain::business_config::BusinessConfig;
use crate::domain::types::NegocioId;
use crate::dto::business_config::BusinessConfigDto;
use crate::forms::business_config::BusinessConfigForm;
use crate::repository::NegocioWriter;
use crate::services::{Saved, ServiceResult, accept};

pub const CONFIG_SAVED: &str = "Configuración guardada.";
pub const CONFIG_SAVE_FAILED: &str = "No se pudo guardar la configuración.";

/// Stores the sales percentage and logo of `negocio_id`.
pub async fn save_business_config<R>(
    negocio_id: NegocioId,
    form: &BusinessConfigForm,
    repo: &R,
) -> ServiceResult<Saved<BusinessConfigDto>>
where
    R: NegocioWriter + ?Sized,
{
    let config = BusinessConfig::try_from(form)?;

    let response = repo
        .save_business_config(negocio_id, &config)
        .await
        .map_err(|err| {
            log::error!("Failed to save configuration of negocio {negocio_id}: {err}");
            err
        })?;

    accept(response, CONFIG_SAVED, CONFIG_SAVE_FAILED)
}
