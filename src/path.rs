//! Breadcrumb path construction
//!
//! Walks a location's parent chain back to a root and returns the
//! ancestors root-first. A parent reference that the backend no longer
//! knows (deleted out from under the tree) terminates the walk early
//! instead of failing it; any other backend failure propagates.
//!
//! The walk performs no cycle detection. Backend data with a parent
//! cycle makes this call loop forever; acyclic parent chains are a
//! precondition on backend data integrity.

use crate::backend::{Backend, BackendError};
use crate::item::{Location, PathSegment};

/// Build the root-first breadcrumb path for a location
///
/// # Errors
///
/// Propagates any backend failure other than a not-found parent, which
/// instead terminates the walk at the last reachable ancestor.
pub fn build_path(
    backend: &dyn Backend,
    location: &dyn Location,
) -> Result<Vec<PathSegment>, BackendError> {
    let mut path = vec![PathSegment::from_location(location)];
    let mut parent_id = location.parent_id();

    while let Some(id) = parent_id {
        let parent = match backend.load_location(&id) {
            Ok(parent) => parent,
            Err(e) if e.is_not_found() => break,
            Err(e) => return Err(e),
        };

        path.push(PathSegment::from_location(parent.as_ref()));
        parent_id = parent.parent_id();
    }

    path.reverse();
    Ok(path)
}
