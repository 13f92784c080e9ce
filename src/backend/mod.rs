//! Backend contract for data-access adapters
//!
//! A backend binds exactly one item type to an underlying data source
//! (database, REST API, search index). The core never talks to a store
//! directly; every read is a pass-through to the backend bound to the
//! resolved item type, with no caching and no retries in between.
//! Backends own their timeout/retry policy and their concurrency safety.

use crate::item::{Item, ItemId, Location};

pub mod error;

pub use error::BackendError;

/// Data-access contract every adapter implements
///
/// Paged operations (`sub_items`, `search`) return at most `limit`
/// results starting at the `offset`-th, in an ordering the backend
/// defines but must keep stable across calls with the same arguments,
/// absent underlying data changes. Counts and slices are consistent at
/// a given instant only; a caller paging while the store mutates may
/// observe count/slice skew, which the core accepts rather than
/// corrects.
pub trait Backend: Send + Sync {
    /// Returns the default sections available in the backend
    ///
    /// These are the root-level entry points for browsing; the set is
    /// finite and typically small.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Store` if the underlying data source fails.
    fn default_sections(&self) -> Result<Vec<Box<dyn Location>>, BackendError>;

    /// Loads a location by its ID
    ///
    /// # Errors
    ///
    /// Returns `BackendError::LocationNotFound` if no location with the
    /// given ID exists for this backend's item type.
    fn load_location(&self, id: &ItemId) -> Result<Box<dyn Location>, BackendError>;

    /// Loads an item by its ID
    ///
    /// # Errors
    ///
    /// Returns `BackendError::ItemNotFound` if no item with the given ID
    /// exists for this backend's item type.
    fn load_item(&self, id: &ItemId) -> Result<Box<dyn Item>, BackendError>;

    /// Returns the child locations of a location, unpaged
    ///
    /// Meant for tree-expansion contexts where the whole child set is
    /// consumed at once.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Store` if the underlying data source fails.
    fn sub_locations(&self, location: &dyn Location) -> Result<Vec<Box<dyn Location>>, BackendError>;

    /// Returns the number of child locations of a location
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Store` if the underlying data source fails.
    fn sub_locations_count(&self, location: &dyn Location) -> Result<usize, BackendError>;

    /// Returns a page of the items below a location
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Store` if the underlying data source fails.
    fn sub_items(
        &self,
        location: &dyn Location,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Box<dyn Item>>, BackendError>;

    /// Returns the total number of items below a location
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Store` if the underlying data source fails.
    fn sub_items_count(&self, location: &dyn Location) -> Result<usize, BackendError>;

    /// Searches for items by free text, paged
    ///
    /// Behavior for empty search text is backend-defined; a backend may
    /// return nothing or everything. Callers that require non-empty text
    /// enforce that at their own boundary.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Store` if the underlying data source fails.
    fn search(
        &self,
        search_text: &str,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Box<dyn Item>>, BackendError>;

    /// Returns the total number of search results for a text
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Store` if the underlying data source fails.
    fn search_count(&self, search_text: &str) -> Result<usize, BackendError>;
}

impl std::fmt::Debug for dyn Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Backend").finish_non_exhaustive()
    }
}
