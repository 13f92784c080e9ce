//! Backend-specific error types
//!
//! Every operation on the [`Backend`](super::Backend) contract reaches an
//! external data source and can therefore fail. Missing data is reported
//! through the two not-found variants; anything the underlying store
//! raises (connection loss, timeout, malformed response) is wrapped in
//! `Store` so the caller can still categorize it.

use crate::ErrorKind;
use crate::item::ItemId;
use thiserror::Error;

/// Backend-specific errors
#[derive(Debug, Error)]
pub enum BackendError {
    /// No location with the given ID exists for this backend's item type
    #[error("Location with ID {0} not found")]
    LocationNotFound(ItemId),

    /// No item with the given ID exists for this backend's item type
    #[error("Item with ID {0} not found")]
    ItemNotFound(ItemId),

    /// The underlying data source failed
    #[error("Backend store error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl BackendError {
    /// Wrap an arbitrary data-source failure
    pub fn store(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Store(Box::new(error))
    }

    /// Whether this error reports missing data
    ///
    /// The path builder uses this to tell a dangling parent reference
    /// (walk terminates) apart from a store failure (propagates).
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::LocationNotFound(_) | Self::ItemNotFound(_))
    }

    /// Categorize this error for the transport layer
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::LocationNotFound(_) | Self::ItemNotFound(_) => ErrorKind::NotFound,
            Self::Store(_) => ErrorKind::Backend,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
