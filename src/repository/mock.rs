//! Mock repository implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::admin_user::AdminUserUpsert;
use crate::domain::business_config::BusinessConfig;
use crate::domain::negocio::NegocioUpsert;
use crate::domain::notification::NewNotification;
use crate::domain::types::NegocioId;
use crate::dto::admin_user::{AdminUserDto, CreateUpdateAdminUserDto};
use crate::dto::api::ServiceResponse;
use crate::dto::business_config::BusinessConfigDto;
use crate::dto::negocio::{CreateUpdateNegocioDto, NegocioDto};
use crate::dto::notification::NotificationDto;
use crate::pagination::PageQuery;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AdminUserReader, AdminUserWriter, NegocioReader, NegocioWriter, NotificationReader,
    NotificationWriter, PagedResponse,
};

mock! {
    pub Repository {}

    #[async_trait]
    impl NegocioReader for Repository {
        async fn list_negocios(&self, query: &PageQuery) -> RepositoryResult<PagedResponse<NegocioDto>>;
    }

    #[async_trait]
    impl NegocioWriter for Repository {
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
    impl AdminUserReader for Repository {
        async fn list_admin_users(
            &self,
            query: &PageQuery,
        ) -> RepositoryResult<PagedResponse<AdminUserDto>>;
    }

    #[async_trait]
    impl AdminUserWriter for Repository {
        async fn save_admin_user(
            &self,
            user: &AdminUserUpsert,
        ) -> RepositoryResult<ServiceResponse<CreateUpdateAdminUserDto>>;
    }

    #[async_trait]
    impl NotificationReader for Repository {
        async fn list_notifications(
            &self,
            query: &PageQuery,
        ) -> RepositoryResult<PagedResponse<NotificationDto>>;
    }

    #[async_trait]
    impl NotificationWriter for Repository {
        async fn send_notification(
            &self,
            notification: &NewNotification,
        ) -> RepositoryResult<ServiceResponse<NotificationDto>>;
    }
}
