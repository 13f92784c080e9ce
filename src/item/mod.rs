//! Core value types and capability traits for browsable content
//!
//! A [`Location`] is a node that can be browsed into; an [`Item`] is a
//! content object returned by lookup or search. The two are independent
//! capabilities: a concrete type may implement both, and callers query
//! the location side of an item through [`Item::as_location`] instead of
//! relying on a shared base type.

use serde::Serialize;
use std::fmt;

/// Identifier of an item or location
///
/// Backends choose their own identifier space; integer ids (database
/// keys) and string ids (slugs, UUIDs) are both valid. Ids are unique
/// within a single backend's item type, never across backends.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ItemId {
    /// Numeric identifier
    Int(i64),
    /// String identifier
    Str(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Str(id) => write!(f, "{id}"),
        }
    }
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::Str(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self::Str(id)
    }
}

/// A browsable node in a content tree
pub trait Location {
    /// Returns the location ID
    fn location_id(&self) -> ItemId;

    /// Returns the parent location ID, or `None` for a root
    fn parent_id(&self) -> Option<ItemId>;

    /// Returns the display name
    fn name(&self) -> &str;
}

/// A content object returned by id lookup or search
pub trait Item {
    /// Returns the item ID
    fn item_id(&self) -> ItemId;

    /// Returns the display name
    fn name(&self) -> &str;

    /// Returns the location side of this item, if it is browsable
    ///
    /// Directory-like items expose their [`Location`] capability here;
    /// plain leaf items return `None` (the default).
    fn as_location(&self) -> Option<&dyn Location> {
        None
    }
}

impl std::fmt::Debug for dyn Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Location")
            .field("location_id", &self.location_id())
            .field("name", &self.name())
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for dyn Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Item")
            .field("item_id", &self.item_id())
            .field("name", &self.name())
            .finish_non_exhaustive()
    }
}

/// One breadcrumb entry produced by the path builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathSegment {
    /// Location ID of this ancestor
    pub id: ItemId,
    /// Display name of this ancestor
    pub name: String,
}

impl PathSegment {
    /// Create a segment from a location
    #[must_use]
    pub fn from_location(location: &dyn Location) -> Self {
        Self {
            id: location.location_id(),
            name: location.name().to_string(),
        }
    }
}
