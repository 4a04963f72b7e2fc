//! `reqwest` implementation of the repository traits.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::admin_user::AdminUserUpsert;
use crate::domain::business_config::BusinessConfig;
use crate::domain::negocio::NegocioUpsert;
use crate::domain::notification::NewNotification;
use crate::domain::types::NegocioId;
use crate::dto::admin_user::{AdminUserDto, CreateUpdateAdminUserDto};
use crate::dto::api::ServiceResponse;
use crate::dto::business_config::BusinessConfigDto;
use crate::dto::negocio::{CreateUpdateNegocioDto, NegocioDto};
use crate::dto::notification::{NotificationDto, SendNotificationDto};
use crate::models::config::ConsoleConfig;
use crate::pagination::PageQuery;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    AdminUserReader, AdminUserWriter, NegocioReader, NegocioWriter, NotificationReader,
    NotificationWriter, PagedResponse,
};

/// Client for the directory backend rooted at `base_url`
/// (e.g. `http://localhost:5137/api`).
#[derive(Clone, Debug)]
pub struct HttpRepository {
    http: Client,
    base_url: String,
}

impl HttpRepository {
    pub fn new(base_url: &str, timeout: Duration) -> RepositoryResult<Self> {
        let parsed =
            Url::parse(base_url).map_err(|e| RepositoryError::InvalidUrl(format!("{base_url}: {e}")))?;
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ConsoleConfig) -> RepositoryResult<Self> {
        Self::new(&config.api_url, config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Sends the request and decodes the envelope.
    ///
    /// Error statuses without a JSON envelope are turned into a failure
    /// envelope carrying the HTTP status so callers handle both alike.
    async fn envelope<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> RepositoryResult<ServiceResponse<T>> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        match serde_json::from_slice::<ServiceResponse<T>>(&body) {
            Ok(envelope) => Ok(envelope),
            Err(err) if status.is_success() => Err(err.into()),
            Err(_) => {
                log::warn!("Backend answered {status} without an envelope");
                Ok(ServiceResponse::failure(status.as_u16(), String::new()))
            }
        }
    }

    async fn get_paged<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &PageQuery,
    ) -> RepositoryResult<PagedResponse<T>> {
        log::debug!("GET {path} {query:?}");
        self.envelope(self.http.get(self.endpoint(path)).query(query))
            .await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> RepositoryResult<ServiceResponse<T>> {
        log::debug!("POST {path}");
        self.envelope(self.http.post(self.endpoint(path)).json(body))
            .await
    }
}

#[async_trait]
impl NegocioReader for HttpRepository {
    async fn list_negocios(&self, query: &PageQuery) -> RepositoryResult<PagedResponse<NegocioDto>> {
        self.get_paged("Negocio/GetPaged", query).await
    }
}

#[async_trait]
impl NegocioWriter for HttpRepository {
    async fn save_negocio(
        &self,
        negocio: &NegocioUpsert,
    ) -> RepositoryResult<ServiceResponse<CreateUpdateNegocioDto>> {
        self.post("Negocio/CreateOrUpdate", &CreateUpdateNegocioDto::from(negocio))
            .await
    }

    async fn save_business_config(
        &self,
        negocio_id: NegocioId,
        config: &BusinessConfig,
    ) -> RepositoryResult<ServiceResponse<BusinessConfigDto>> {
        let path = format!("Negocio/{negocio_id}/Config");
        log::debug!("PUT {path}");
        self.envelope(
            self.http
                .put(self.endpoint(&path))
                .json(&BusinessConfigDto::from(config)),
        )
        .await
    }
}

#[async_trait]
impl AdminUserReader for HttpRepository {
    async fn list_admin_users(
        &self,
        query: &PageQuery,
    ) -> RepositoryResult<PagedResponse<AdminUserDto>> {
        self.get_paged("UsuarioAdmin/GetPaged", query).await
    }
}

#[async_trait]
impl AdminUserWriter for HttpRepository {
    async fn save_admin_user(
        &self,
        user: &AdminUserUpsert,
    ) -> RepositoryResult<ServiceResponse<CreateUpdateAdminUserDto>> {
        self.post("UsuarioAdmin/CreateOrUpdate", &CreateUpdateAdminUserDto::from(user))
            .await
    }
}

#[async_trait]
impl NotificationReader for HttpRepository {
    async fn list_notifications(
        &self,
        query: &PageQuery,
    ) -> RepositoryResult<PagedResponse<NotificationDto>> {
        self.get_paged("Notificacion/GetPaged", query).await
    }
}

#[async_trait]
impl NotificationWriter for HttpRepository {
    async fn send_notification(
        &self,
        notification: &NewNotification,
    ) -> RepositoryResult<ServiceResponse<NotificationDto>> {
        self.post("Notificacion/Send", &SendNotificationDto::from(notification))
            .await
    }
}
