//! Pagination-specific error types

use crate::ErrorKind;
use crate::backend::BackendError;
use thiserror::Error;

/// Pagination-specific errors
#[derive(Debug, Error)]
pub enum PagerError {
    /// Page numbers are 1-based; zero is rejected before any backend call
    #[error("Invalid page number: {0} (pages are 1-based)")]
    InvalidPage(usize),

    /// Page size must be positive; zero is rejected before any backend call
    #[error("Invalid page size: {0} (must be greater than zero)")]
    InvalidLimit(usize),

    /// Backend error occurred while fetching a count or slice
    #[error("Backend error: {0}")]
    BackendError(#[from] BackendError),
}

impl PagerError {
    /// Categorize this error for the transport layer
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidPage(_) | Self::InvalidLimit(_) => ErrorKind::InvalidArgument,
            Self::BackendError(e) => e.kind(),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
