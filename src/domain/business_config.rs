use serde::{Deserialize, Serialize};

use crate::domain::types::{SalesPercentage, WebUrl};

/// Per-business settings edited from the configuration page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BusinessConfig {
    pub porcentaje_ventas: SalesPercentage,
    pub logo_url: Option<WebUrl>,
}
