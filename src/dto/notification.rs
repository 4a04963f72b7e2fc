//! DTOs for push notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::notification::NewNotification;
use crate::domain::types::NegocioId;

/// Sent notification as listed by `/Notificacion/GetPaged`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    pub id: i32,
    pub business_id: i32,
    pub business_name: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body of `/Notificacion/Send`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendNotificationDto {
    pub business_id: i32,
    pub title: String,
    pub body: String,
    pub image_url: Option<String>,
}

impl From<&NewNotification> for SendNotificationDto {
    fn from(value: &NewNotification) -> Self {
        Self {
            business_id: NegocioId::get(value.negocio_id),
            title: value.title.as_str().to_string(),
            body: value.body.as_str().to_string(),
            image_url: value.image_url.as_ref().map(|u| u.as_str().to_string()),
        }
    }
}

/// Row of the notification history table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationRow {
    pub id: i32,
    pub business_name: String,
    pub title: String,
    pub body: String,
    pub image_url: Option<String>,
    /// Creation time formatted as `dd/mm/YYYY HH:MM` (UTC).
    pub sent_at: String,
}

impl From<NotificationDto> for NotificationRow {
    fn from(dto: NotificationDto) -> Self {
        Self {
            id: dto.id,
            business_name: dto.business_name,
            title: dto.title,
            body: dto.body,
            image_url: dto.image_url,
            sent_at: dto.created_at.format("%d/%m/%Y %H:%M").to_string(),
        }
    }
}
