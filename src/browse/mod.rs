//! Browse operations over a resolved request context
//!
//! These are the operations the host's transport layer delegates to once
//! a request has been resolved: section listing, tree expansion, paged
//! child listing with breadcrumbs, and paged search. They return domain
//! objects only; turning individual nodes into wire form belongs to the
//! host's serializer.

use crate::BrowseError;
use crate::item::{Item, Location, PathSegment};
use crate::pager::{SearchAdapter, SubItemsAdapter, build_page};
use crate::path::build_path;
use crate::request::ResolvedContext;

/// One page of the items below a location, with its breadcrumb path
pub struct SubItemsPage {
    /// Root-first breadcrumb path of the browsed location
    pub path: Vec<PathSegment>,
    /// Items on the requested page
    pub children: Vec<Box<dyn Item>>,
    /// Total number of items below the location, across all pages
    pub children_count: usize,
}

/// One page of full-text search results
pub struct SearchPage {
    /// Results on the requested page
    pub results: Vec<Box<dyn Item>>,
    /// Total number of results, across all pages
    pub total: usize,
}

impl std::fmt::Debug for SearchPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchPage")
            .field("results", &format_args!("[{} items]", self.results.len()))
            .field("total", &self.total)
            .finish()
    }
}

/// The root-level entry points for browsing this item type
///
/// # Errors
///
/// Propagates backend failures.
pub fn load_default_sections(
    context: &ResolvedContext,
) -> Result<Vec<Box<dyn Location>>, BrowseError> {
    Ok(context.backend.default_sections()?)
}

/// The full child-location set of a location, for tree expansion
///
/// # Errors
///
/// Propagates backend failures.
pub fn load_sub_locations(
    context: &ResolvedContext,
    location: &dyn Location,
) -> Result<Vec<Box<dyn Location>>, BrowseError> {
    Ok(context.backend.sub_locations(location)?)
}

/// One page of the items below a location, plus its breadcrumbs
///
/// `limit` falls back to the resolved configuration's default page size
/// when not supplied by the request.
///
/// # Errors
///
/// Returns an invalid-argument error for a zero page or limit before any
/// backend call, and propagates backend failures from the count, slice
/// and breadcrumb lookups.
pub fn load_sub_items(
    context: &ResolvedContext,
    location: &dyn Location,
    page: usize,
    limit: Option<usize>,
) -> Result<SubItemsPage, BrowseError> {
    let limit = limit.unwrap_or(context.config.default_limit);

    let adapter = SubItemsAdapter::new(context.backend.as_ref(), location);
    let result = build_page(&adapter, page, limit)?;
    let path = build_path(context.backend.as_ref(), location)?;

    Ok(SubItemsPage {
        path,
        children: result.items,
        children_count: result.total,
    })
}

/// One page of full-text search results for this item type
///
/// `limit` falls back to the resolved configuration's default page size
/// when not supplied by the request.
///
/// # Errors
///
/// Returns an invalid-argument error for a zero page or limit before any
/// backend call, and propagates backend failures.
pub fn search_items(
    context: &ResolvedContext,
    search_text: &str,
    page: usize,
    limit: Option<usize>,
) -> Result<SearchPage, BrowseError> {
    let limit = limit.unwrap_or(context.config.default_limit);

    let adapter = SearchAdapter::new(context.backend.as_ref(), search_text);
    let result = build_page(&adapter, page, limit)?;

    Ok(SearchPage {
        results: result.items,
        total: result.total,
    })
}
