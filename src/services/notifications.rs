//! Push notifications: composer and sent history.

use std::sync::Arc;

use crate::domain::notification::NewNotification;
use crate::dto::notification::{NotificationDto, NotificationRow};
use crate::forms::notification::NotificationForm;
use crate::pagination::PaginationError;
use crate::query::{PageFetcher, PagedQuery, QueryOptions};
use crate::repository::{NotificationReader, NotificationWriter, PageSource};
use crate::services::{Saved, ServiceResult, accept};

pub const NOTIFICATION_SENT: &str = "Notificación enviada.";
pub const NOTIFICATION_SEND_FAILED: &str = "No se pudo enviar.";

/// Sends the composed notification to the selected business' customers.
pub async fn send_notification<R>(
    form: &NotificationForm,
    repo: &R,
) -> ServiceResult<Saved<NotificationDto>>
where
    R: NotificationWriter + ?Sized,
{
    let notification = NewNotification::try_from(form)?;

    let response = repo
        .send_notification(&notification)
        .await
        .map_err(|err| {
            log::error!(
                "Failed to send notification to negocio {}: {err}",
                notification.negocio_id
            );
            err
        })?;

    let saved = accept(response, NOTIFICATION_SENT, NOTIFICATION_SEND_FAILED)?;
    log::info!("Notification sent to negocio {}", notification.negocio_id);
    Ok(saved)
}

/// Mounts the history of sent notifications.
pub fn notification_history<R>(
    repo: Arc<R>,
    options: QueryOptions,
) -> Result<PagedQuery<NotificationDto, NotificationRow>, PaginationError>
where
    R: NotificationReader + ?Sized + 'static,
{
    let fetcher: Arc<dyn PageFetcher<NotificationDto>> = Arc::new(PageSource::new(repo));
    PagedQuery::mount(fetcher, NotificationRow::from, options)
}
