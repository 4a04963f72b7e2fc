use serde::Serialize;
use thiserror::Error;

/// Page size used by the list grids until the user picks another one.
pub const DEFAULT_PAGE_SIZE: usize = 5;
/// Page sizes offered by the list grids.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 25];
/// Page size used by search-as-you-type pickers.
pub const PICKER_PAGE_SIZE: usize = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("page size must be greater than zero")]
    ZeroPageSize,
}

/// Pagination window and filters of a list, as tracked by the console.
///
/// `page_index` is 0-based; [`PageQuery`] carries the 1-based number the
/// backend expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    page_index: usize,
    page_size: usize,
    search_term: Option<String>,
    category: Option<String>,
}

impl PageRequest {
    pub fn new(page_index: usize, page_size: usize) -> Result<Self, PaginationError> {
        if page_size == 0 {
            return Err(PaginationError::ZeroPageSize);
        }
        Ok(Self {
            page_index,
            page_size,
            search_term: None,
            category: None,
        })
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.set_search_term(term);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.set_category(Some(category.into()));
        self
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref()
    }

    pub fn category_filter(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Moves the window; a zero page size leaves the request untouched.
    pub fn set_window(&mut self, page_index: usize, page_size: usize) -> Result<(), PaginationError> {
        if page_size == 0 {
            return Err(PaginationError::ZeroPageSize);
        }
        self.page_index = page_index;
        self.page_size = page_size;
        Ok(())
    }

    /// Stores the trimmed term (blank terms clear the filter) and rewinds to
    /// the first page.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = normalize_filter(term.into());
        self.page_index = 0;
    }

    /// Stores the category filter and rewinds to the first page.
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category.and_then(normalize_filter);
        self.page_index = 0;
    }
}

fn normalize_filter(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Query string sent to `GetPaged` endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    /// 1-based page number.
    pub page: usize,
    pub page_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl From<&PageRequest> for PageQuery {
    fn from(request: &PageRequest) -> Self {
        Self {
            page: request.page_index + 1,
            page_size: request.page_size,
            search: request.search_term.clone(),
            category: request.category.clone(),
        }
    }
}

/// Number of pages needed to show `total` records.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// 1-based page links for a pager, `None` marking an elided gap.
pub fn page_links(page_index: usize, page_size: usize, total: usize) -> Vec<Option<usize>> {
    get_pages(total_pages(total, page_size), page_index + 1, 2, 2, 4, 2)
}
