//! Backend registry mapping item types to their adapters
//!
//! The registry is built once at application startup by registering every
//! configured backend, then read-only for the remainder of the process.
//! It is an explicitly constructed value handed by reference to whatever
//! needs backend lookup; there is no ambient or global access.

use crate::backend::Backend;
use indexmap::IndexMap;
use std::sync::Arc;

pub mod error;

pub use error::RegistryError;

/// Mapping from item-type identifier to its backend instance
///
/// Backends are shared via `Arc` so a resolved request context can hold
/// the instance past the registry borrow. Insertion order is preserved,
/// keeping `iter` stable for UI listings.
#[derive(Default)]
pub struct BackendRegistry {
    backends: IndexMap<String, Arc<dyn Backend>>,
}

impl BackendRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a backend for an item type
    ///
    /// The last registration for a given item type wins; registering the
    /// same type twice silently overwrites the earlier backend. Expected
    /// only during bootstrap.
    pub fn register(&mut self, item_type: impl Into<String>, backend: Arc<dyn Backend>) {
        self.backends.insert(item_type.into(), backend);
    }

    /// Whether a backend is registered for the item type
    #[must_use]
    pub fn has(&self, item_type: &str) -> bool {
        self.backends.contains_key(item_type)
    }

    /// Get the backend registered for the item type
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::BackendNotFound` carrying the offending
    /// item type if none was registered.
    pub fn get(&self, item_type: &str) -> Result<Arc<dyn Backend>, RegistryError> {
        self.backends
            .get(item_type)
            .cloned()
            .ok_or_else(|| RegistryError::BackendNotFound(item_type.to_string()))
    }

    /// Iterate over all registered backends in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn Backend>)> {
        self.backends
            .iter()
            .map(|(item_type, backend)| (item_type.as_str(), backend))
    }

    /// Number of registered backends
    #[must_use]
    pub fn len(&self) -> usize {
        self.backends.len()
    }

    /// Whether no backend has been registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }
}
