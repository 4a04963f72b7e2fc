//! Business records: editor and list/picker queries.

use std::sync::Arc;

use crate::domain::negocio::NegocioUpsert;
use crate::dto::negocio::{CreateUpdateNegocioDto, NegocioDto, NegocioRow};
use crate::forms::negocio::NegocioForm;
use crate::models::config::ConsoleConfig;
use crate::pagination::PaginationError;
use crate::query::{PageFetcher, PagedQuery, QueryOptions};
use crate::repository::{NegocioReader, NegocioWriter, PageSource};
use crate::services::{Saved, ServiceResult, accept};

pub const NEGOCIO_CREATED: &str = "Negocio creado con éxito.";
pub const NEGOCIO_UPDATED: &str = "Negocio actualizado con éxito.";
pub const NEGOCIO_SAVE_FAILED: &str = "No se pudo guardar el negocio.";

/// Validates the editor and creates or updates the business.
pub async fn save_negocio<R>(
    form: &NegocioForm,
    repo: &R,
) -> ServiceResult<Saved<CreateUpdateNegocioDto>>
where
    R: NegocioWriter + ?Sized,
{
    let negocio = NegocioUpsert::try_from(form)?;
    let success = if negocio.is_update() {
        NEGOCIO_UPDATED
    } else {
        NEGOCIO_CREATED
    };

    let response = repo.save_negocio(&negocio).await.map_err(|err| {
        log::error!("Failed to save negocio: {err}");
        err
    })?;

    accept(response, success, NEGOCIO_SAVE_FAILED)
}

/// Mounts the businesses grid.
pub fn negocio_list<R>(
    repo: Arc<R>,
    options: QueryOptions,
) -> Result<PagedQuery<NegocioDto, NegocioRow>, PaginationError>
where
    R: NegocioReader + ?Sized + 'static,
{
    let fetcher: Arc<dyn PageFetcher<NegocioDto>> = Arc::new(PageSource::new(repo));
    PagedQuery::mount(fetcher, NegocioRow::from, options)
}

/// Mounts the search-as-you-type business picker of the admin user editor:
/// first page of [`picker_page_size`](ConsoleConfig::picker_page_size)
/// entries, debounced like the grids.
///
/// Filtering happens on the server; rows are turned into a
/// [`NegocioOption`](crate::domain::negocio::NegocioOption) when picked.
pub fn negocio_picker<R>(
    repo: Arc<R>,
    config: &ConsoleConfig,
) -> Result<PagedQuery<NegocioDto, NegocioRow>, PaginationError>
where
    R: NegocioReader + ?Sized + 'static,
{
    negocio_list(repo, config.picker_options())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::negocio::NegocioOption;
    use crate::dto::api::{PagedResult, ServiceResponse};
    use crate::forms::FormError;
    use crate::pagination::PICKER_PAGE_SIZE;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use crate::services::ServiceError;

    fn form(nombre: &str) -> NegocioForm {
        NegocioForm {
            nombre: nombre.to_string(),
            instagram: " instagram.com/paletita ".to_string(),
            ..NegocioForm::default()
        }
    }

    fn negocio(id: i32, nombre: &str) -> NegocioDto {
        NegocioDto {
            id_negocio: id,
            nombre: nombre.to_string(),
            categoria: Some("Repostería".to_string()),
            facebook: None,
            instagram: None,
            sitio_web: None,
            direccion: None,
            es_activo: Some(true),
        }
    }

    #[tokio::test]
    async fn blank_name_never_reaches_backend() {
        let mut repo = MockRepository::new();
        repo.expect_save_negocio().times(0);

        let result = save_negocio(&form("   "), &repo).await;

        assert!(matches!(
            result,
            Err(ServiceError::Form(FormError::MissingName))
        ));
    }

    #[tokio::test]
    async fn new_business_uses_created_message() {
        let mut repo = MockRepository::new();
        repo.expect_save_negocio()
            .withf(|negocio| {
                negocio.id.is_none()
                    && negocio.nombre.as_str() == "Paletita"
                    && negocio.instagram.as_deref() == Some("instagram.com/paletita")
                    && negocio.facebook.is_none()
            })
            .times(1)
            .returning(|_| {
                Ok(ServiceResponse {
                    status: 201,
                    message: String::new(),
                    data: None,
                })
            });

        let saved = save_negocio(&form(" Paletita "), &repo).await.unwrap();

        assert_eq!(saved.message, NEGOCIO_CREATED);
    }

    #[tokio::test]
    async fn edit_uses_updated_message() {
        let mut repo = MockRepository::new();
        repo.expect_save_negocio()
            .withf(|negocio| negocio.id.map(|id| id.get()) == Some(4))
            .returning(|_| Ok(ServiceResponse::failure(200, "")));
        let mut form = form("AO Balloons");
        form.id = Some(4);

        let saved = save_negocio(&form, &repo).await.unwrap();

        assert_eq!(saved.message, NEGOCIO_UPDATED);
    }

    #[tokio::test]
    async fn rejected_save_surfaces_fallback() {
        let mut repo = MockRepository::new();
        repo.expect_save_negocio()
            .returning(|_| Ok(ServiceResponse::failure(500, "")));

        let err = save_negocio(&form("Amarok"), &repo).await.unwrap_err();

        assert_eq!(err.user_message(), NEGOCIO_SAVE_FAILED);
    }

    #[tokio::test]
    async fn transport_failure_is_network_error() {
        let mut repo = MockRepository::new();
        repo.expect_save_negocio()
            .returning(|_| Err(RepositoryError::Transport("connection refused".into())));

        let err = save_negocio(&form("Amarok"), &repo).await.unwrap_err();

        assert!(matches!(err, ServiceError::Repository(_)));
        assert_eq!(err.user_message(), "Error de red.");
    }

    #[tokio::test]
    async fn list_mounts_on_first_page() {
        let mut repo = MockRepository::new();
        repo.expect_list_negocios()
            .withf(|query| query.page == 1 && query.page_size == 5 && query.search.is_none())
            .times(1)
            .returning(|_| {
                Ok(ServiceResponse::ok(PagedResult::new(
                    vec![negocio(1, "Amarok"), negocio(2, "Paletita")],
                    12,
                )))
            });

        let query = negocio_list(Arc::new(repo), QueryOptions::default()).unwrap();
        let snapshot = query.settled().await;

        assert_eq!(snapshot.total, 12);
        assert_eq!(snapshot.rows[1].nombre, "Paletita");
        assert_eq!(snapshot.total_pages(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn picker_searches_server_side() {
        let mut repo = MockRepository::new();
        repo.expect_list_negocios()
            .withf(|query| {
                query.page == 1 && query.page_size == PICKER_PAGE_SIZE && query.search.is_none()
            })
            .times(1)
            .returning(|_| Ok(ServiceResponse::ok(PagedResult::empty())));
        repo.expect_list_negocios()
            .withf(|query| {
                query.page == 1
                    && query.page_size == PICKER_PAGE_SIZE
                    && query.search.as_deref() == Some("palet")
            })
            .times(1)
            .returning(|_| {
                Ok(ServiceResponse::ok(PagedResult::new(
                    vec![negocio(2, "Paletita")],
                    1,
                )))
            });

        let picker = negocio_picker(Arc::new(repo), &ConsoleConfig::default()).unwrap();
        let opened = picker.settled().await;
        assert_eq!(opened.page_size, 10);
        assert_eq!(opened.page_index, 0);

        picker.set_search_term("palet");
        tokio::time::sleep(Duration::from_millis(399)).await;
        assert_eq!(picker.snapshot().search_term.as_deref(), Some("palet"));
        assert!(!picker.snapshot().loading);

        tokio::time::sleep(Duration::from_millis(10)).await;
        let snapshot = picker.settled().await;

        let option = NegocioOption::try_from(&snapshot.rows[0]).unwrap();
        assert_eq!(option.id.get(), 2);
        assert_eq!(option.nombre, "Paletita");
    }
}
