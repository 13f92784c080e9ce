//! Pagination adapters and the generic pager
//!
//! Two adapters wrap a backend plus the parameters of one query behind a
//! uniform count-and-slice interface: [`SubItemsAdapter`] for the items
//! below a location and [`SearchAdapter`] for full-text results. Both
//! are stateless replay handles; every `count` and `slice` call reaches
//! the backend, nothing is cached. [`build_page`] consumes either one to
//! compute a bounded, 1-based result page.

use crate::backend::{Backend, BackendError};
use crate::item::{Item, Location};

pub mod error;

pub use error::PagerError;

/// Uniform count-and-slice source consumed by the pager
pub trait PagerAdapter {
    /// Total number of results
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the underlying backend call fails.
    fn count(&self) -> Result<usize, BackendError>;

    /// A slice of at most `limit` results starting at `offset`
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the underlying backend call fails.
    fn slice(&self, offset: usize, limit: usize) -> Result<Vec<Box<dyn Item>>, BackendError>;
}

/// Adapter over the items below one location
pub struct SubItemsAdapter<'a> {
    backend: &'a dyn Backend,
    location: &'a dyn Location,
}

impl<'a> SubItemsAdapter<'a> {
    /// Create an adapter for the children of `location`
    #[must_use]
    pub const fn new(backend: &'a dyn Backend, location: &'a dyn Location) -> Self {
        Self { backend, location }
    }
}

impl PagerAdapter for SubItemsAdapter<'_> {
    fn count(&self) -> Result<usize, BackendError> {
        self.backend.sub_items_count(self.location)
    }

    fn slice(&self, offset: usize, limit: usize) -> Result<Vec<Box<dyn Item>>, BackendError> {
        self.backend.sub_items(self.location, offset, limit)
    }
}

/// Adapter over the results of one full-text search
pub struct SearchAdapter<'a> {
    backend: &'a dyn Backend,
    search_text: &'a str,
}

impl<'a> SearchAdapter<'a> {
    /// Create an adapter for the results of `search_text`
    #[must_use]
    pub const fn new(backend: &'a dyn Backend, search_text: &'a str) -> Self {
        Self {
            backend,
            search_text,
        }
    }
}

impl PagerAdapter for SearchAdapter<'_> {
    fn count(&self) -> Result<usize, BackendError> {
        self.backend.search_count(self.search_text)
    }

    fn slice(&self, offset: usize, limit: usize) -> Result<Vec<Box<dyn Item>>, BackendError> {
        self.backend.search(self.search_text, offset, limit)
    }
}

/// One computed result page
pub struct Page {
    /// Results on this page, at most `limit` of them
    pub items: Vec<Box<dyn Item>>,
    /// Total result count across all pages
    pub total: usize,
    /// 1-based page number this page was computed for
    pub page: usize,
    /// Page size this page was computed for
    pub limit: usize,
}

impl Page {
    /// Total number of pages, or zero when `limit` is zero
    ///
    /// [`build_page`] never produces a zero `limit`, but the fields are
    /// public and a hand-built `Page` must not panic here.
    #[must_use]
    pub const fn page_count(&self) -> usize {
        if self.limit == 0 {
            0
        } else {
            self.total.div_ceil(self.limit)
        }
    }

    /// Whether a page follows this one
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.page_count()
    }
}

/// Compute one result page from an adapter
///
/// `page` is 1-based; the slice starts at `(page - 1) * limit`. A page
/// past the end of the result set yields an empty `items`, not an error.
///
/// # Errors
///
/// Returns `PagerError::InvalidPage` or `PagerError::InvalidLimit` for a
/// zero `page` or `limit`, before any backend call is attempted, and
/// propagates backend failures from the count and slice calls.
pub fn build_page(adapter: &dyn PagerAdapter, page: usize, limit: usize) -> Result<Page, PagerError> {
    if page == 0 {
        return Err(PagerError::InvalidPage(page));
    }
    if limit == 0 {
        return Err(PagerError::InvalidLimit(limit));
    }

    let total = adapter.count()?;

    // Past-the-end pages are valid requests and never reach the backend.
    // An offset too large for usize is past the end of any result set.
    let items = match (page - 1).checked_mul(limit) {
        Some(offset) if offset < total => adapter.slice(offset, limit)?,
        _ => Vec::new(),
    };

    Ok(Page {
        items,
        total,
        page,
        limit,
    })
}
