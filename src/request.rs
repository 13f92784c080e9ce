//! Per-request configuration and backend resolution
//!
//! The host's routing layer extracts a configuration name from each
//! inbound request and asks this module to activate the matching item
//! type. Resolution either produces a [`ResolvedContext`] holding the
//! configuration and backend for the request's duration, or deliberately
//! skips: requests outside the browsing surface and nested sub-requests
//! stay unresolved, and unresolved is a valid terminal state rather than
//! an error.

use crate::BrowseError;
use crate::backend::Backend;
use crate::config::{BrowserConfig, ItemTypeConfig};
use crate::registry::BackendRegistry;
use std::sync::Arc;

/// Position of a request within a request tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestKind {
    /// The outermost request; the only kind that triggers resolution
    #[default]
    Main,
    /// A nested request dispatched while serving another; never resolved
    Sub,
}

/// Browsing-relevant attributes extracted from an inbound request
#[derive(Debug, Clone, Default)]
pub struct RequestAttributes {
    /// Name of the configuration the request targets, if any
    pub config_name: Option<String>,
    /// Whether this is the outermost request of its request tree
    pub kind: RequestKind,
}

impl RequestAttributes {
    /// Attributes of a main request targeting a named configuration
    #[must_use]
    pub fn for_config(config_name: impl Into<String>) -> Self {
        Self {
            config_name: Some(config_name.into()),
            kind: RequestKind::Main,
        }
    }
}

/// Configuration and backend activated for one request
///
/// Owned by the caller for the duration of the request and dropped with
/// it; nothing here outlives the request or leaks into shared state.
pub struct ResolvedContext {
    /// Configuration of the resolved item type
    pub config: ItemTypeConfig,
    /// Backend bound to the resolved item type
    pub backend: Arc<dyn Backend>,
}

impl std::fmt::Debug for ResolvedContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedContext")
            .field("config", &self.config)
            .field("backend", &format_args!("<dyn Backend>"))
            .finish()
    }
}

/// Resolve the configuration and backend for a request
///
/// Returns `Ok(None)` without touching configuration or registry when
/// the request is a sub-request or carries no configuration name.
///
/// # Errors
///
/// Returns a configuration error if the named configuration does not
/// exist, and propagates the registry lookup failure unchanged if no
/// backend is registered for the configuration's item type.
pub fn resolve_request(
    attributes: &RequestAttributes,
    browser_config: &BrowserConfig,
    registry: &BackendRegistry,
) -> Result<Option<ResolvedContext>, BrowseError> {
    if attributes.kind == RequestKind::Sub {
        return Ok(None);
    }

    let Some(config_name) = attributes.config_name.as_deref() else {
        return Ok(None);
    };

    let config = browser_config.get(config_name)?;
    let backend = registry.get(&config.item_type)?;

    Ok(Some(ResolvedContext {
        config: config.clone(),
        backend,
    }))
}
