//! Composer form for push notifications.

use serde::Deserialize;

use crate::domain::notification::NewNotification;
use crate::domain::types::{
    NOTIFICATION_BODY_MAX, NOTIFICATION_TITLE_MAX, NegocioId, NotificationBody, NotificationTitle,
    WebUrl,
};
use crate::forms::FormError;

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NotificationForm {
    pub business_id: Option<i32>,
    pub title: String,
    pub body: String,
    pub image_url: String,
}

impl NotificationForm {
    /// Whether the send button should be enabled.
    pub fn is_valid(&self) -> bool {
        NewNotification::try_from(self).is_ok()
    }

    /// Clears the message fields but keeps the selected business.
    pub fn reset(&mut self) {
        self.title.clear();
        self.body.clear();
        self.image_url.clear();
    }

    /// Characters left for the title, after trimming.
    pub fn title_remaining(&self) -> isize {
        NOTIFICATION_TITLE_MAX as isize - self.title.trim().chars().count() as isize
    }

    /// Characters left for the body, after trimming.
    pub fn body_remaining(&self) -> isize {
        NOTIFICATION_BODY_MAX as isize - self.body.trim().chars().count() as isize
    }
}

impl TryFrom<&NotificationForm> for NewNotification {
    type Error = FormError;

    fn try_from(form: &NotificationForm) -> Result<Self, Self::Error> {
        let negocio_id = form
            .business_id
            .ok_or(FormError::MissingNegocio)
            .and_then(|id| NegocioId::new(id).map_err(|_| FormError::InvalidNegocioId))?;
        let title = NotificationTitle::new(form.title.as_str())
            .map_err(|_| FormError::InvalidTitle(NOTIFICATION_TITLE_MAX))?;
        let body = NotificationBody::new(form.body.as_str())
            .map_err(|_| FormError::InvalidBody(NOTIFICATION_BODY_MAX))?;
        let image_url = if form.image_url.trim().is_empty() {
            None
        } else {
            Some(WebUrl::new(form.image_url.as_str()).map_err(|_| FormError::InvalidUrl)?)
        };

        Ok(Self {
            negocio_id,
            title,
            body,
            image_url,
        })
    }
}
