//! Registry-specific error types

use thiserror::Error;

/// Registry-specific errors
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No backend was registered for the requested item type
    ///
    /// This indicates a deployment defect (an item type referenced in
    /// configuration without a matching registration), not missing data.
    #[error("Backend for \"{0}\" item type does not exist")]
    BackendNotFound(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
