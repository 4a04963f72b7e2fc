//! Access to the REST backend.
//!
//! Every endpoint answers with a [`ServiceResponse`] envelope; readers and
//! writers return it untouched so callers can interpret `status` and
//! `message` themselves. Transport level failures surface as
//! [`RepositoryError`](errors::RepositoryError).

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::admin_user::AdminUserUpsert;
use crate::domain::business_config::BusinessConfig;
use crate::domain::negocio::NegocioUpsert;
use crate::domain::notification::NewNotification;
use crate::domain::types::NegocioId;
use crate::dto::admin_user::{AdminUserDto, CreateUpdateAdminUserDto};
use crate::dto::api::{PagedResult, ServiceResponse};
use crate::dto::business_config::BusinessConfigDto;
use crate::dto::negocio::{CreateUpdateNegocioDto, NegocioDto};
use crate::dto::notification::NotificationDto;
use crate::pagination::PageQuery;
use crate::query::PageFetcher;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use http::HttpRepository;

/// Envelope returned by every `GetPaged` endpoint.
pub type PagedResponse<T> = ServiceResponse<PagedResult<T>>;

#[async_trait]
pub trait NegocioReader: Send + Sync {
    async fn list_negocios(&self, query: &PageQuery) -> RepositoryResult<PagedResponse<NegocioDto>>;
}

#[async_trait]
pub trait NegocioWriter: Send + Sync {
    async fn save_negocio(
        &self,
        negocio: &NegocioUpsert,
    ) -> RepositoryResult<ServiceResponse<CreateUpdateNegocioDto>>;
    async fn save_business_config(
        &self,
        negocio_id: NegocioId,
        config: &BusinessConfig,
    ) -> RepositoryResult<ServiceResponse<BusinessConfigDto>>;
}

#[async_trait]
pub trait AdminUserReader: Send + Sync {
    async fn list_admin_users(
        &self,
        query: &PageQuery,
    ) -> RepositoryResult<PagedResponse<AdminUserDto>>;
}

#[async_trait]
pub trait AdminUserWriter: Send + Sync {
    async fn save_admin_user(
        &self,
        user: &AdminUserUpsert,
    ) -> RepositoryResult<ServiceResponse<CreateUpdateAdminUserDto>>;
}

#[async_trait]
pub trait NotificationReader: Send + Sync {
    async fn list_notifications(
        &self,
        query: &PageQuery,
    ) -> RepositoryResult<PagedResponse<NotificationDto>>;
}

#[async_trait]
pub trait NotificationWriter: Send + Sync {
    async fn send_notification(
        &self,
        notification: &NewNotification,
    ) -> RepositoryResult<ServiceResponse<NotificationDto>>;
}

/// Exposes a repository's list endpoints as [`PageFetcher`]s so a
/// [`PagedQuery`](crate::query::PagedQuery) can drive them.
pub struct PageSource<R: ?Sized>(Arc<R>);

impl<R: ?Sized> PageSource<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self(repo)
    }
}

#[async_trait]
impl<R> PageFetcher<NegocioDto> for PageSource<R>
where
    R: NegocioReader + ?Sized,
{
    async fn fetch_page(&self, query: PageQuery) -> RepositoryResult<PagedResponse<NegocioDto>> {
        self.0.list_negocios(&query).await
    }
}

#[async_trait]
impl<R> PageFetcher<AdminUserDto> for PageSource<R>
where
    R: AdminUserReader + ?Sized,
{
    async fn fetch_page(&self, query: PageQuery) -> RepositoryResult<PagedResponse<AdminUserDto>> {
        self.0.list_admin_users(&query).await
    }
}

#[async_trait]
impl<R> PageFetcher<NotificationDto> for PageSource<R>
where
    R: NotificationReader + ?Sized,
{
    async fn fetch_page(
        &self,
        query: PageQuery,
    ) -> RepositoryResult<PagedResponse<NotificationDto>> {
        self.0.list_notifications(&query).await
    }
}
