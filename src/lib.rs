//! Burrow - a browsing core for heterogeneous hierarchical content
//!
//! This library lets a host application browse content trees (CMS nodes,
//! product catalogs, tag trees) through one uniform interface. Each item
//! type is backed by a data-access adapter implementing the [`Backend`]
//! contract; a startup-populated [`registry::BackendRegistry`] routes
//! every navigation, lookup and search operation to the right adapter.
//!
//! The crate owns the routing, pagination and breadcrumb logic only.
//! Transport, rendering and persistence belong to the host application.

use thiserror::Error;

pub mod backend;
pub mod browse;
pub mod config;
pub mod item;
pub mod pager;
pub mod path;
pub mod registry;
pub mod request;

#[cfg(test)]
pub mod testing;

pub use backend::Backend;
pub use item::{Item, ItemId, Location, PathSegment};

/// Error enum, contains all failure states of the library
#[derive(Debug, Error)]
pub enum BrowseError {
    /// Backend error
    #[error("Backend error: {0}")]
    BackendError(#[from] backend::BackendError),
    /// Registry error
    #[error("Registry error: {0}")]
    RegistryError(#[from] registry::RegistryError),
    /// Pagination error
    #[error("Pager error: {0}")]
    PagerError(#[from] pager::PagerError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

/// Coarse error category, used by the host to map failures onto
/// transport-level responses. The core never encodes a transport status
/// itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Requested item, location or search target does not exist
    NotFound,
    /// Malformed caller input, rejected before any backend call
    InvalidArgument,
    /// A named configuration or backend registration is missing;
    /// a deployment defect rather than missing data
    Configuration,
    /// The underlying data source failed
    Backend,
}

impl BrowseError {
    /// Categorize this error for the transport layer
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BackendError(e) => e.kind(),
            Self::RegistryError(_) => ErrorKind::Configuration,
            Self::PagerError(e) => e.kind(),
            Self::ConfigError(_) => ErrorKind::Configuration,
        }
    }
}
