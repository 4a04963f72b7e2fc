//! Administrative users: editor and list query.

use std::sync::Arc;

use crate::domain::admin_user::AdminUserUpsert;
use crate::dto::admin_user::{AdminUserDto, AdminUserRow, CreateUpdateAdminUserDto};
use crate::forms::admin_user::AdminUserForm;
use crate::pagination::PaginationError;
use crate::query::{PageFetcher, PagedQuery, QueryOptions};
use crate::repository::{AdminUserReader, AdminUserWriter, PageSource};
use crate::services::{Saved, ServiceResult, accept};

pub const ADMIN_USER_CREATED: &str = "Usuario creado con éxito.";
pub const ADMIN_USER_UPDATED: &str = "Usuario actualizado con éxito.";
pub const ADMIN_USER_SAVE_FAILED: &str = "No se pudo guardar el usuario.";

pub async fn save_admin_user<R>(
    form: &AdminUserForm,
    repo: &R,
) -> ServiceResult<Saved<CreateUpdateAdminUserDto>>
where
    R: AdminUserWriter + ?Sized,
{
    let user = AdminUserUpsert::try_from(form)?;
    let success = if user.is_update() {
        ADMIN_USER_UPDATED
    } else {
        ADMIN_USER_CREATED
    };

    let response = repo.save_admin_user(&user).await.map_err(|err| {
        log::error!("Failed to save admin user {}: {err}", user.usuario);
        err
    })?;

    accept(response, success, ADMIN_USER_SAVE_FAILED)
}

/// Mounts the administrative users grid.
pub fn admin_user_list<R>(
    repo: Arc<R>,
    options: QueryOptions,
) -> Result<PagedQuery<AdminUserDto, AdminUserRow>, PaginationError>
where
    R: AdminUserReader + ?Sized + 'static,
{
    let fetcher: Arc<dyn PageFetcher<AdminUserDto>> = Arc::new(PageSource::new(repo));
    PagedQuery::mount(fetcher, AdminUserRow::from, options)
}
