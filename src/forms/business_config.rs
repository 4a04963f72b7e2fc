//! Settings form for a single business.

use serde::Deserialize;
use validator::Validate;

use crate::domain::business_config::BusinessConfig;
use crate::domain::types::{SalesPercentage, WebUrl};
use crate::forms::FormError;

#[derive(Debug, Clone, Default, Deserialize, Validate, PartialEq)]
#[serde(default)]
pub struct BusinessConfigForm {
    /// `None` while the input is empty or not a number.
    #[validate(range(min = 0.0, max = 100.0))]
    pub porcentaje_ventas: Option<f64>,
    pub logo_url: String,
}

impl BusinessConfigForm {
    pub fn can_save(&self) -> bool {
        BusinessConfig::try_from(self).is_ok()
    }

    /// Logo preview source, present only when the field is not blank.
    pub fn preview_url(&self) -> Option<&str> {
        let trimmed = self.logo_url.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

impl TryFrom<&BusinessConfigForm> for BusinessConfig {
    type Error = FormError;

    fn try_from(form: &BusinessConfigForm) -> Result<Self, Self::Error> {
        form.validate().map_err(|_| FormError::InvalidPercentage)?;
        let porcentaje_ventas = form
            .porcentaje_ventas
            .ok_or(FormError::InvalidPercentage)
            .and_then(|value| {
                SalesPercentage::new(value).map_err(|_| FormError::InvalidPercentage)
            })?;
        let logo_url = form
            .preview_url()
            .map(WebUrl::new)
            .transpose()
            .map_err(|_| FormError::InvalidUrl)?;

        Ok(Self {
            porcentaje_ventas,
            logo_url,
        })
    }
}
