use serde::{Deserialize, Serialize};

use crate::domain::types::{NegocioId, NotificationBody, NotificationTitle, WebUrl};

/// Validated push notification addressed to the followers of one business.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewNotification {
    pub negocio_id: NegocioId,
    pub title: NotificationTitle,
    pub body: NotificationBody,
    pub image_url: Option<WebUrl>,
}
