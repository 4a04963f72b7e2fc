//! Paged, searchable list controller.
//!
//! A [`PagedQuery`] turns user intents (type a search term, move to a page,
//! pick a category) into fetches against a [`PageFetcher`] and publishes the
//! outcome as a [`QuerySnapshot`] through a `tokio::sync::watch` channel.
//!
//! Two rules keep the published state coherent:
//!
//! * search terms are debounced: every keystroke restarts the timer, so a
//!   burst of typing produces a single fetch with the last term;
//! * every fetch gets a sequence number and only the most recently *issued*
//!   one may publish. A slow earlier response arriving after a faster later
//!   one is dropped.
//!
//! Intent methods spawn tasks and therefore must be called from within a
//! Tokio runtime.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::dto::api::{PagedResult, STATUS_OK};
use crate::pagination::{
    DEFAULT_PAGE_SIZE, PageQuery, PageRequest, PaginationError, page_links, total_pages,
};
use crate::repository::PagedResponse;
use crate::repository::errors::RepositoryResult;

/// Default quiet period before a typed search term is sent.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(400);
/// Shown when the request itself failed (timeout, connection refused, ...).
pub const NETWORK_ERROR_MESSAGE: &str = "Error de red.";
/// Shown when the backend rejected the request without explaining why.
pub const LOAD_ERROR_MESSAGE: &str = "No se pudieron cargar los datos.";

/// Source of result pages for one resource.
#[async_trait]
pub trait PageFetcher<T>: Send + Sync {
    async fn fetch_page(&self, query: PageQuery) -> RepositoryResult<PagedResponse<T>>;
}

/// Tunables of a [`PagedQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    pub debounce: Duration,
    pub page_size: usize,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            debounce: SEARCH_DEBOUNCE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// State published to the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySnapshot<R> {
    pub rows: Vec<R>,
    /// Matching records across all pages.
    pub total: usize,
    pub loading: bool,
    pub error: Option<String>,
    pub page_index: usize,
    pub page_size: usize,
    pub search_term: Option<String>,
    pub category: Option<String>,
}

impl<R> QuerySnapshot<R> {
    fn idle(request: &PageRequest) -> Self {
        Self {
            rows: Vec::new(),
            total: 0,
            loading: false,
            error: None,
            page_index: request.page_index(),
            page_size: request.page_size(),
            search_term: request.search_term().map(str::to_string),
            category: request.category_filter().map(str::to_string),
        }
    }

    fn track(&mut self, request: &PageRequest) {
        self.page_index = request.page_index();
        self.page_size = request.page_size();
        self.search_term = request.search_term().map(str::to_string);
        self.category = request.category_filter().map(str::to_string);
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total, self.page_size)
    }

    /// Pager links (1-based) for the current window.
    pub fn pages(&self) -> Vec<Option<usize>> {
        page_links(self.page_index, self.page_size, self.total)
    }

    /// `true` when the list should render its empty state.
    pub fn is_empty(&self) -> bool {
        !self.loading && self.rows.is_empty()
    }
}

struct QueryState {
    request: PageRequest,
    latest_seq: u64,
    pending: Option<JoinHandle<()>>,
    debounce_gen: u64,
    disposed: bool,
}

type RowMapper<T, R> = dyn Fn(T) -> R + Send + Sync;

struct Shared<T, R> {
    fetcher: Arc<dyn PageFetcher<T>>,
    mapper: Box<RowMapper<T, R>>,
    debounce: Duration,
    state: Mutex<QueryState>,
    published: watch::Sender<QuerySnapshot<R>>,
}

/// Controller for one paginated, searchable list.
///
/// Dropping the controller disposes it.
pub struct PagedQuery<T, R> {
    shared: Arc<Shared<T, R>>,
}

impl<T, R> PagedQuery<T, R>
where
    T: Send + 'static,
    R: Clone + Send + Sync + 'static,
{
    /// Creates an idle controller; nothing is fetched until an intent or
    /// [`refresh`](Self::refresh) arrives.
    pub fn new<F>(
        fetcher: Arc<dyn PageFetcher<T>>,
        mapper: F,
        options: QueryOptions,
    ) -> Result<Self, PaginationError>
    where
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        let request = PageRequest::new(0, options.page_size)?;
        let (published, _) = watch::channel(QuerySnapshot::idle(&request));

        Ok(Self {
            shared: Arc::new(Shared {
                fetcher,
                mapper: Box::new(mapper),
                debounce: options.debounce,
                state: Mutex::new(QueryState {
                    request,
                    latest_seq: 0,
                    pending: None,
                    debounce_gen: 0,
                    disposed: false,
                }),
                published,
            }),
        })
    }

    /// Creates the controller and immediately loads the first page.
    pub fn mount<F>(
        fetcher: Arc<dyn PageFetcher<T>>,
        mapper: F,
        options: QueryOptions,
    ) -> Result<Self, PaginationError>
    where
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        let query = Self::new(fetcher, mapper, options)?;
        query.refresh();
        Ok(query)
    }

    /// Records the term and schedules a refresh after the debounce delay,
    /// replacing any refresh scheduled earlier that has not fired yet.
    pub fn set_search_term(&self, term: impl Into<String>) {
        let mut state = self.shared.lock();
        if state.disposed {
            return;
        }
        state.request.set_search_term(term);
        self.shared.cancel_pending(&mut state);

        state.debounce_gen += 1;
        let generation = state.debounce_gen;
        let shared = Arc::clone(&self.shared);
        let delay = self.shared.debounce;
        state.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            shared.fire_debounced(generation);
        }));

        let request = state.request.clone();
        self.shared.published.send_modify(|s| s.track(&request));
    }

    /// Moves the pagination window and refreshes right away. A pending
    /// debounced search is folded into this fetch.
    pub fn set_page(&self, page_index: usize, page_size: usize) -> Result<(), PaginationError> {
        let mut state = self.shared.lock();
        if state.disposed {
            return Ok(());
        }
        state.request.set_window(page_index, page_size)?;
        self.shared.cancel_pending(&mut state);
        self.shared.issue(&mut state);
        Ok(())
    }

    /// Filters by category (or clears the filter) and refreshes right away.
    pub fn set_category(&self, category: Option<String>) {
        let mut state = self.shared.lock();
        if state.disposed {
            return;
        }
        state.request.set_category(category);
        self.shared.cancel_pending(&mut state);
        self.shared.issue(&mut state);
    }

    /// Issues a fetch for the current request and returns its sequence
    /// number, or `None` once disposed.
    pub fn refresh(&self) -> Option<u64> {
        let mut state = self.shared.lock();
        if state.disposed {
            return None;
        }
        Some(self.shared.issue(&mut state))
    }

    /// Current published state.
    pub fn snapshot(&self) -> QuerySnapshot<R> {
        self.shared.published.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<QuerySnapshot<R>> {
        self.shared.published.subscribe()
    }

    /// Waits until no accepted request is outstanding and returns the state.
    pub async fn settled(&self) -> QuerySnapshot<R> {
        let mut rx = self.subscribe();
        match rx.wait_for(|s| !s.loading).await {
            Ok(snapshot) => snapshot.clone(),
            Err(_) => self.snapshot(),
        }
    }

    /// Stops accepting intents and publishing results. In-flight fetches
    /// still complete but their outcome is dropped.
    pub fn dispose(&self) {
        self.shared.dispose();
    }

    pub fn is_disposed(&self) -> bool {
        self.shared.lock().disposed
    }
}

impl<T, R> Drop for PagedQuery<T, R> {
    fn drop(&mut self) {
        self.shared.dispose();
    }
}

impl<T, R> Shared<T, R> {
    fn lock(&self) -> MutexGuard<'_, QueryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn cancel_pending(&self, state: &mut QueryState) {
        if let Some(pending) = state.pending.take() {
            pending.abort();
        }
    }

    fn dispose(&self) {
        let mut state = self.lock();
        if state.disposed {
            return;
        }
        state.disposed = true;
        self.cancel_pending(&mut state);
        self.published.send_modify(|s| s.loading = false);
        log::debug!("Paged query disposed after {} requests", state.latest_seq);
    }
}

impl<T, R> Shared<T, R>
where
    T: Send + 'static,
    R: Clone + Send + Sync + 'static,
{
    fn fire_debounced(self: &Arc<Self>, generation: u64) {
        let mut state = self.lock();
        // A newer keystroke or an explicit refresh may have replaced this
        // timer after it woke up.
        if state.disposed || state.debounce_gen != generation || state.pending.is_none() {
            return;
        }
        state.pending = None;
        self.issue(&mut state);
    }

    /// Must be called with the state lock held so sequence assignment and the
    /// loading flag change together.
    fn issue(self: &Arc<Self>, state: &mut QueryState) -> u64 {
        state.latest_seq += 1;
        let seq = state.latest_seq;
        let request = state.request.clone();
        let query = PageQuery::from(&request);

        self.published.send_modify(|s| {
            s.loading = true;
            s.track(&request);
        });
        log::debug!("Issuing page request #{seq}: {query:?}");

        let shared = Arc::clone(self);
        let page_size = request.page_size();
        tokio::spawn(async move {
            let outcome = shared.fetcher.fetch_page(query).await;
            shared.settle(seq, page_size, outcome);
        });

        seq
    }

    fn settle(&self, seq: u64, page_size: usize, outcome: RepositoryResult<PagedResponse<T>>) {
        let accepted = interpret(outcome).map(|mut page| {
            if page.items.len() > page_size {
                log::warn!(
                    "Backend returned {} items for a page of {page_size}; truncating",
                    page.items.len()
                );
                page.items.truncate(page_size);
            }
            let rows: Vec<R> = page.items.into_iter().map(|item| (self.mapper)(item)).collect();
            (rows, page.total)
        });

        let state = self.lock();
        if state.disposed {
            log::debug!("Dropping page request #{seq}: query disposed");
            return;
        }
        if seq != state.latest_seq {
            log::debug!(
                "Discarding superseded page request #{seq} (latest #{})",
                state.latest_seq
            );
            return;
        }

        match accepted {
            Ok((rows, total)) => self.published.send_modify(|s| {
                s.rows = rows;
                s.total = total;
                s.error = None;
                s.loading = false;
            }),
            Err(message) => {
                log::warn!("Page request #{seq} failed: {message}");
                self.published.send_modify(|s| {
                    s.rows.clear();
                    s.total = 0;
                    s.error = Some(message);
                    s.loading = false;
                });
            }
        }
    }
}

/// Applies the backend contract: `200` with data is a page, anything else a
/// user-facing failure message.
fn interpret<T>(outcome: RepositoryResult<PagedResponse<T>>) -> Result<PagedResult<T>, String> {
    match outcome {
        Ok(response) => {
            let message = response.message().unwrap_or(LOAD_ERROR_MESSAGE).to_string();
            match response.data {
                Some(page) if response.status == STATUS_OK => Ok(page),
                _ => Err(message),
            }
        }
        Err(err) => {
            log::error!("Failed to fetch page: {err}");
            Err(NETWORK_ERROR_MESSAGE.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use tokio::sync::oneshot;

    use super::*;
    use crate::dto::api::ServiceResponse;
    use crate::repository::errors::RepositoryError;

    type Reply = RepositoryResult<PagedResponse<String>>;

    enum Scripted {
        Now(Reply),
        Later(oneshot::Receiver<Reply>),
    }

    /// Fetcher double that records every query and answers from a script,
    /// optionally holding a reply until the test releases it.
    #[derive(Default)]
    struct ScriptedFetcher {
        calls: Mutex<Vec<PageQuery>>,
        script: Mutex<VecDeque<Scripted>>,
    }

    impl ScriptedFetcher {
        fn reply(&self, reply: Reply) {
            self.script.lock().unwrap().push_back(Scripted::Now(reply));
        }

        fn hold(&self) -> oneshot::Sender<Reply> {
            let (tx, rx) = oneshot::channel();
            self.script.lock().unwrap().push_back(Scripted::Later(rx));
            tx
        }

        fn calls(&self) -> Vec<PageQuery> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PageFetcher<String> for ScriptedFetcher {
        async fn fetch_page(&self, query: PageQuery) -> Reply {
            self.calls.lock().unwrap().push(query);
            let next = self.script.lock().unwrap().pop_front();
            match next {
                Some(Scripted::Now(reply)) => reply,
                Some(Scripted::Later(rx)) => rx
                    .await
                    .unwrap_or_else(|_| Err(RepositoryError::Unexpected("dropped".into()))),
                None => Ok(ServiceResponse::ok(PagedResult::empty())),
            }
        }
    }

    fn page(items: &[&str], total: usize) -> Reply {
        Ok(ServiceResponse::ok(PagedResult::new(
            items.iter().map(|s| s.to_string()).collect(),
            total,
        )))
    }

    fn controller(fetcher: &Arc<ScriptedFetcher>) -> PagedQuery<String, String> {
        let fetcher: Arc<dyn PageFetcher<String>> = fetcher.clone();
        PagedQuery::new(fetcher, |item: String| item.to_uppercase(), QueryOptions::default())
            .unwrap()
    }

    async fn let_tasks_run() {
        tokio::time::sleep(Duration::from_millis(1)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn initial_mount_loads_first_page() {
        let fetcher = Arc::new(ScriptedFetcher::default());
        fetcher.reply(page(&["amarok", "paletita", "ao balloons"], 3));
        let dyn_fetcher: Arc<dyn PageFetcher<String>> = fetcher.clone();

        let query =
            PagedQuery::mount(dyn_fetcher, |s: String| s, QueryOptions::default()).unwrap();
        assert!(query.snapshot().loading);

        let snapshot = query.settled().await;

        assert_eq!(
            fetcher.calls(),
            vec![PageQuery {
                page: 1,
                page_size: 5,
                search: None,
                category: None,
            }]
        );
        assert_eq!(snapshot.total, 3);
        assert_eq!(snapshot.rows.len(), 3);
        assert!(!snapshot.loading);
        assert_eq!(snapshot.error, None);
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_typing_collapses_into_one_fetch() {
        let fetcher = Arc::new(ScriptedFetcher::default());
        fetcher.reply(page(&["cafeteria central"], 1));
        let query = controller(&fetcher);

        query.set_search_term("cafe");
        tokio::time::sleep(Duration::from_millis(200)).await;
        query.set_search_term("cafeteria");
        assert!(fetcher.calls().is_empty());
        assert!(!query.snapshot().loading);

        tokio::time::sleep(SEARCH_DEBOUNCE + Duration::from_millis(50)).await;
        let snapshot = query.settled().await;

        let calls = fetcher.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].search.as_deref(), Some("cafeteria"));
        assert_eq!(snapshot.rows, vec!["CAFETERIA CENTRAL".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn search_term_does_not_fetch_before_delay() {
        let fetcher = Arc::new(ScriptedFetcher::default());
        let query = controller(&fetcher);

        query.set_search_term("pal");
        tokio::time::sleep(SEARCH_DEBOUNCE - Duration::from_millis(10)).await;
        assert!(fetcher.calls().is_empty());

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(fetcher.calls().len(), 1);
        assert_eq!(query.snapshot().search_term.as_deref(), Some("pal"));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_earlier_response_is_discarded() {
        let fetcher = Arc::new(ScriptedFetcher::default());
        let first = fetcher.hold();
        let second = fetcher.hold();
        let query = controller(&fetcher);

        let a = query.refresh().unwrap();
        query.set_page(1, 5).unwrap();
        let_tasks_run().await;
        assert_eq!(a, 1);
        assert_eq!(fetcher.calls().len(), 2);
        assert_eq!(fetcher.calls()[1].page, 2);

        second.send(page(&["b1", "b2"], 7)).unwrap();
        let settled = query.settled().await;
        assert_eq!(settled.rows, vec!["B1".to_string(), "B2".to_string()]);

        first.send(page(&["a1"], 7)).unwrap();
        let_tasks_run().await;

        let snapshot = query.snapshot();
        assert_eq!(snapshot.rows, vec!["B1".to_string(), "B2".to_string()]);
        assert_eq!(snapshot.page_index, 1);
        assert!(!snapshot.loading);
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_completion_keeps_loading_flag() {
        let fetcher = Arc::new(ScriptedFetcher::default());
        let first = fetcher.hold();
        let second = fetcher.hold();
        let query = controller(&fetcher);

        query.refresh();
        query.refresh();
        let_tasks_run().await;

        first.send(page(&["stale"], 1)).unwrap();
        let_tasks_run().await;
        let snapshot = query.snapshot();
        assert!(snapshot.loading);
        assert!(snapshot.rows.is_empty());

        second.send(page(&["fresh"], 1)).unwrap();
        let snapshot = query.settled().await;
        assert!(!snapshot.loading);
        assert_eq!(snapshot.rows, vec!["FRESH".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn backend_failure_clears_rows_and_shows_message() {
        let fetcher = Arc::new(ScriptedFetcher::default());
        fetcher.reply(page(&["a", "b"], 2));
        fetcher.reply(Ok(ServiceResponse::failure(500, "DB error")));
        let query = controller(&fetcher);

        query.refresh();
        assert_eq!(query.settled().await.rows.len(), 2);

        query.refresh();
        let snapshot = query.settled().await;

        assert!(snapshot.rows.is_empty());
        assert_eq!(snapshot.total, 0);
        assert_eq!(snapshot.error.as_deref(), Some("DB error"));
        assert!(!snapshot.loading);
        assert!(snapshot.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn transport_failure_uses_generic_message() {
        let fetcher = Arc::new(ScriptedFetcher::default());
        fetcher.reply(Err(RepositoryError::Timeout));
        fetcher.reply(Ok(ServiceResponse {
            status: 200,
            message: String::new(),
            data: None,
        }));
        let query = controller(&fetcher);

        query.refresh();
        let snapshot = query.settled().await;
        assert_eq!(snapshot.error.as_deref(), Some(NETWORK_ERROR_MESSAGE));

        query.refresh();
        let snapshot = query.settled().await;
        assert_eq!(snapshot.error.as_deref(), Some(LOAD_ERROR_MESSAGE));
    }

    #[tokio::test(start_paused = true)]
    async fn success_after_failure_clears_error() {
        let fetcher = Arc::new(ScriptedFetcher::default());
        fetcher.reply(Ok(ServiceResponse::failure(404, "")));
        fetcher.reply(page(&["ok"], 1));
        let query = controller(&fetcher);

        query.refresh();
        assert!(query.settled().await.error.is_some());

        query.refresh();
        let snapshot = query.settled().await;
        assert_eq!(snapshot.error, None);
        assert_eq!(snapshot.total, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn set_page_converts_to_one_based_and_caps_rows() {
        let fetcher = Arc::new(ScriptedFetcher::default());
        let oversized: Vec<String> = (0..12).map(|i| format!("n{i}")).collect();
        let refs: Vec<&str> = oversized.iter().map(String::as_str).collect();
        fetcher.reply(page(&refs, 40));
        let query = controller(&fetcher);

        query.set_page(3, 10).unwrap();
        let snapshot = query.settled().await;

        let calls = fetcher.calls();
        assert_eq!(calls[0].page, 4);
        assert_eq!(calls[0].page_size, 10);
        assert_eq!(snapshot.rows.len(), 10);
        assert_eq!(snapshot.page_index, 3);
        assert_eq!(snapshot.total_pages(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_page_size_is_rejected_without_fetch() {
        let fetcher = Arc::new(ScriptedFetcher::default());
        let query = controller(&fetcher);

        assert_eq!(query.set_page(0, 0), Err(PaginationError::ZeroPageSize));
        let_tasks_run().await;

        assert!(fetcher.calls().is_empty());
        assert!(!query.snapshot().loading);
    }

    #[test]
    fn zero_default_page_size_is_rejected() {
        let fetcher: Arc<dyn PageFetcher<String>> = Arc::new(ScriptedFetcher::default());
        let options = QueryOptions {
            page_size: 0,
            ..QueryOptions::default()
        };

        assert!(matches!(
            PagedQuery::new(fetcher, |s: String| s, options),
            Err(PaginationError::ZeroPageSize)
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn set_page_folds_pending_search() {
        let fetcher = Arc::new(ScriptedFetcher::default());
        let query = controller(&fetcher);

        query.set_search_term("globos");
        tokio::time::sleep(Duration::from_millis(100)).await;
        query.set_page(0, 25).unwrap();
        let_tasks_run().await;
        tokio::time::sleep(SEARCH_DEBOUNCE * 2).await;

        let calls = fetcher.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].search.as_deref(), Some("globos"));
        assert_eq!(calls[0].page_size, 25);
    }

    #[tokio::test(start_paused = true)]
    async fn search_rewinds_to_first_page() {
        let fetcher = Arc::new(ScriptedFetcher::default());
        let query = controller(&fetcher);

        query.set_page(4, 5).unwrap();
        query.set_search_term("  ");
        tokio::time::sleep(SEARCH_DEBOUNCE * 2).await;

        let calls = fetcher.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].page, 1);
        assert_eq!(calls[1].search, None);
    }

    #[tokio::test(start_paused = true)]
    async fn category_filter_is_sent() {
        let fetcher = Arc::new(ScriptedFetcher::default());
        let query = controller(&fetcher);

        query.set_category(Some("Diseño Gráfico".to_string()));
        query.settled().await;

        assert_eq!(
            fetcher.calls()[0].category.as_deref(),
            Some("Diseño Gráfico")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn disposed_query_ignores_results_and_intents() {
        let fetcher = Arc::new(ScriptedFetcher::default());
        let pending = fetcher.hold();
        let query = controller(&fetcher);

        query.refresh();
        let_tasks_run().await;
        query.set_search_term("late");
        query.dispose();

        pending.send(page(&["ghost"], 1)).unwrap();
        tokio::time::sleep(SEARCH_DEBOUNCE * 2).await;

        assert!(query.is_disposed());
        assert_eq!(query.refresh(), None);
        assert_eq!(fetcher.calls().len(), 1);
        let snapshot = query.snapshot();
        assert!(snapshot.rows.is_empty());
        assert!(!snapshot.loading);
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_query_publishes_nothing_more() {
        let fetcher = Arc::new(ScriptedFetcher::default());
        let release = fetcher.hold();
        let query = controller(&fetcher);
        let mut rx = query.subscribe();

        query.refresh();
        let_tasks_run().await;
        assert!(rx.borrow_and_update().loading);

        drop(query);
        assert!(rx.has_changed().unwrap());
        let last = rx.borrow_and_update().clone();
        assert!(!last.loading);
        assert!(last.rows.is_empty());

        release.send(page(&["late"], 1)).unwrap();
        let_tasks_run().await;

        // The in-flight task held the last handle; once it settles the
        // channel closes without a new value.
        assert!(rx.changed().await.is_err());
        assert!(rx.borrow().rows.is_empty());
        assert_eq!(fetcher.calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_see_loading_then_result() {
        let fetcher = Arc::new(ScriptedFetcher::default());
        let release = fetcher.hold();
        let query = controller(&fetcher);
        let mut rx = query.subscribe();

        query.refresh();
        assert!(rx.borrow_and_update().loading);

        release.send(page(&["x"], 1)).unwrap();
        rx.changed().await.unwrap();
        let snapshot = rx.borrow().clone();
        assert!(!snapshot.loading);
        assert_eq!(snapshot.rows, vec!["X".to_string()]);
    }
}
