use serde::{Deserialize, Serialize};

use crate::domain::types::{NegocioId, NegocioName};

/// Validated create-or-update payload for a business record.
///
/// `id` is `None` when the record is new; the backend decides between insert
/// and update based on its presence.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NegocioUpsert {
    pub id: Option<NegocioId>,
    pub nombre: NegocioName,
    pub categoria: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub sitio_web: Option<String>,
    pub direccion: Option<String>,
    pub activo: bool,
}

impl NegocioUpsert {
    #[must_use]
    pub fn is_update(&self) -> bool {
        self.id.is_some()
    }
}

/// Business entry offered by the search-as-you-type picker.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NegocioOption {
    pub id: NegocioId,
    pub nombre: String,
}
