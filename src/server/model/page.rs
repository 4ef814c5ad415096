//! Page-number pagination for list endpoints.
//!
//! `PageRequest` is the validated `page`/`page_size` pair taken from the query string;
//! `Page` is one page of domain items together with the total row count. Pages are
//! 1-based. Link building for the response lives in `util::pagination`.

use crate::server::error::AppError;

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Validated pagination parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: u64,
    /// Rows per page, between 1 and `MAX_PAGE_SIZE`.
    pub page_size: u64,
}

impl PageRequest {
    /// Builds a request from optional query values.
    ///
    /// A missing page means page 1. A missing or zero page size falls back to
    /// `DEFAULT_PAGE_SIZE`; sizes above `MAX_PAGE_SIZE` are clamped.
    ///
    /// # Returns
    /// - `Ok(PageRequest)` - Normalised request
    /// - `Err(AppError::NotFound)` - Page 0 was requested
    pub fn new(page: Option<u64>, page_size: Option<u64>) -> Result<Self, AppError> {
        let page = page.unwrap_or(1);
        if page == 0 {
            return Err(invalid_page());
        }

        let page_size = match page_size {
            None | Some(0) => DEFAULT_PAGE_SIZE,
            Some(size) => size.min(MAX_PAGE_SIZE),
        };

        Ok(Self { page, page_size })
    }

    /// Zero-based page index for SeaORM's `fetch_page`.
    pub fn index(&self) -> u64 {
        self.page - 1
    }

    /// Number of rows skipped before this page.
    pub fn offset(&self) -> u64 {
        self.index().saturating_mul(self.page_size)
    }

    /// Total number of pages for `total` rows. An empty set still has one page.
    pub fn num_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.page_size).max(1)
    }

    /// Whether this page exists for a result set of `total` rows.
    ///
    /// Repositories check this before `fetch_page`, which multiplies the page index
    /// by the page size unchecked.
    pub fn contains(&self, total: u64) -> bool {
        self.page <= self.num_pages(total)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Rows across all pages.
    pub total: u64,
    pub request: PageRequest,
}

impl<T> Page<T> {
    /// Wraps fetched rows, rejecting pages past the end of the result set.
    ///
    /// # Returns
    /// - `Ok(Page)` - Page within range (page 1 of an empty set included)
    /// - `Err(AppError::NotFound)` - `Invalid page.`
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Result<Self, AppError> {
        if !request.contains(total) {
            return Err(invalid_page());
        }

        Ok(Self {
            items,
            total,
            request,
        })
    }

    /// Slices an already materialised collection into the requested page.
    pub fn from_vec(all: Vec<T>, request: PageRequest) -> Result<Self, AppError> {
        let total = all.len() as u64;
        if !request.contains(total) {
            return Err(invalid_page());
        }

        let items = all
            .into_iter()
            .skip(usize::try_from(request.offset()).unwrap_or(usize::MAX))
            .take(request.page_size as usize)
            .collect();

        Self::new(items, total, request)
    }

    pub fn has_next(&self) -> bool {
        self.request.page < self.request.num_pages(self.total)
    }

    pub fn has_previous(&self) -> bool {
        self.request.page > 1
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            request: self.request,
        }
    }
}

fn invalid_page() -> AppError {
    AppError::NotFound("Invalid page.".to_string())
}
