//! Testing utilities for burrow
//!
//! Provides stub implementations of the item traits and an in-memory
//! [`StubBackend`] for exercising the registry, pager, path builder and
//! browse operations without an external data source.
//!
//! Only available when compiled with `cfg(test)`.

use crate::backend::{Backend, BackendError};
use crate::item::{Item, ItemId, Location};
use std::sync::RwLock;

/// In-memory location for tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubLocation {
    id: ItemId,
    parent_id: Option<ItemId>,
    name: String,
}

impl StubLocation {
    /// Create a location with integer ids
    pub fn new(id: i64, parent_id: Option<i64>, name: impl Into<String>) -> Self {
        Self {
            id: ItemId::from(id),
            parent_id: parent_id.map(ItemId::from),
            name: name.into(),
        }
    }

    /// Create a location with arbitrary ids
    pub fn with_ids(
        id: impl Into<ItemId>,
        parent_id: Option<ItemId>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            parent_id,
            name: name.into(),
        }
    }
}

impl Location for StubLocation {
    fn location_id(&self) -> ItemId {
        self.id.clone()
    }

    fn parent_id(&self) -> Option<ItemId> {
        self.parent_id.clone()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// In-memory item for tests, optionally browsable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubItem {
    id: ItemId,
    name: String,
    location: Option<StubLocation>,
}

impl StubItem {
    /// Create a plain leaf item
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: ItemId::from(id),
            name: name.into(),
            location: None,
        }
    }

    /// Create a browsable item mirroring a location
    ///
    /// The item takes the location's id and name and exposes the
    /// location through `as_location`, exercising the dual-capability
    /// contract.
    pub fn browsable(location: StubLocation) -> Self {
        Self {
            id: location.location_id(),
            name: location.name().to_string(),
            location: Some(location),
        }
    }
}

impl Item for StubItem {
    fn item_id(&self) -> ItemId {
        self.id.clone()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn as_location(&self) -> Option<&dyn Location> {
        self.location.as_ref().map(|l| l as &dyn Location)
    }
}

#[derive(Default)]
struct StubState {
    locations: Vec<StubLocation>,
    // (parent location id, item), in insertion order
    items: Vec<(ItemId, StubItem)>,
    failure: Option<String>,
}

/// In-memory backend over a small location tree
///
/// Locations and items keep their insertion order, giving the stable
/// ordering the paging contract requires. Search matches items whose
/// name contains the search text, case-insensitively; empty text
/// matches everything.
#[derive(Default)]
pub struct StubBackend {
    state: RwLock<StubState>,
}

impl StubBackend {
    /// Create an empty backend
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location (builder style)
    #[must_use]
    pub fn with_location(self, location: StubLocation) -> Self {
        self.state.write().unwrap().locations.push(location);
        self
    }

    /// Add an item below a parent location (builder style)
    #[must_use]
    pub fn with_item(self, parent_id: impl Into<ItemId>, item: StubItem) -> Self {
        self.push_item(parent_id, item);
        self
    }

    /// Add an item after construction, simulating external mutation
    pub fn push_item(&self, parent_id: impl Into<ItemId>, item: StubItem) {
        self.state
            .write()
            .unwrap()
            .items
            .push((parent_id.into(), item));
    }

    /// Make every subsequent operation fail with a store error
    pub fn fail_loads(&self, message: &str) {
        self.state.write().unwrap().failure = Some(message.to_string());
    }

    fn check_failure(&self) -> Result<(), BackendError> {
        match &self.state.read().unwrap().failure {
            Some(message) => Err(BackendError::store(std::io::Error::other(message.clone()))),
            None => Ok(()),
        }
    }
}

impl Backend for StubBackend {
    fn default_sections(&self) -> Result<Vec<Box<dyn Location>>, BackendError> {
        self.check_failure()?;
        let state = self.state.read().unwrap();
        Ok(state
            .locations
            .iter()
            .filter(|l| l.parent_id.is_none())
            .map(|l| Box::new(l.clone()) as Box<dyn Location>)
            .collect())
    }

    fn load_location(&self, id: &ItemId) -> Result<Box<dyn Location>, BackendError> {
        self.check_failure()?;
        let state = self.state.read().unwrap();
        state
            .locations
            .iter()
            .find(|l| l.id == *id)
            .map(|l| Box::new(l.clone()) as Box<dyn Location>)
            .ok_or_else(|| BackendError::LocationNotFound(id.clone()))
    }

    fn load_item(&self, id: &ItemId) -> Result<Box<dyn Item>, BackendError> {
        self.check_failure()?;
        let state = self.state.read().unwrap();
        state
            .items
            .iter()
            .find(|(_, item)| item.id == *id)
            .map(|(_, item)| Box::new(item.clone()) as Box<dyn Item>)
            .ok_or_else(|| BackendError::ItemNotFound(id.clone()))
    }

    fn sub_locations(
        &self,
        location: &dyn Location,
    ) -> Result<Vec<Box<dyn Location>>, BackendError> {
        self.check_failure()?;
        let parent_id = location.location_id();
        let state = self.state.read().unwrap();
        Ok(state
            .locations
            .iter()
            .filter(|l| l.parent_id.as_ref() == Some(&parent_id))
            .map(|l| Box::new(l.clone()) as Box<dyn Location>)
            .collect())
    }

    fn sub_locations_count(&self, location: &dyn Location) -> Result<usize, BackendError> {
        Ok(self.sub_locations(location)?.len())
    }

    fn sub_items(
        &self,
        location: &dyn Location,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Box<dyn Item>>, BackendError> {
        self.check_failure()?;
        let parent_id = location.location_id();
        let state = self.state.read().unwrap();
        Ok(state
            .items
            .iter()
            .filter(|(parent, _)| *parent == parent_id)
            .skip(offset)
            .take(limit)
            .map(|(_, item)| Box::new(item.clone()) as Box<dyn Item>)
            .collect())
    }

    fn sub_items_count(&self, location: &dyn Location) -> Result<usize, BackendError> {
        self.check_failure()?;
        let parent_id = location.location_id();
        let state = self.state.read().unwrap();
        Ok(state
            .items
            .iter()
            .filter(|(parent, _)| *parent == parent_id)
            .count())
    }

    fn search(
        &self,
        search_text: &str,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Box<dyn Item>>, BackendError> {
        self.check_failure()?;
        let needle = search_text.to_lowercase();
        let state = self.state.read().unwrap();
        Ok(state
            .items
            .iter()
            .filter(|(_, item)| item.name.to_lowercase().contains(&needle))
            .skip(offset)
            .take(limit)
            .map(|(_, item)| Box::new(item.clone()) as Box<dyn Item>)
            .collect())
    }

    fn search_count(&self, search_text: &str) -> Result<usize, BackendError> {
        self.check_failure()?;
        let needle = search_text.to_lowercase();
        let state = self.state.read().unwrap();
        Ok(state
            .items
            .iter()
            .filter(|(_, item)| item.name.to_lowercase().contains(&needle))
            .count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_search_text_matches_everything() {
        let backend = StubBackend::new()
            .with_location(StubLocation::new(1, None, "Root"))
            .with_item(1, StubItem::new(10, "First"))
            .with_item(1, StubItem::new(11, "Second"));

        assert_eq!(backend.search_count("").unwrap(), 2);
        assert_eq!(backend.search("", 0, 10).unwrap().len(), 2);
    }

    #[test]
    fn test_failure_injection_covers_all_operations() {
        let backend = StubBackend::new().with_location(StubLocation::new(1, None, "Root"));
        backend.fail_loads("store offline");

        assert!(backend.default_sections().is_err());
        assert!(backend.load_location(&ItemId::from(1)).is_err());
        assert!(backend.search_count("x").is_err());
    }

    #[test]
    fn test_browsable_stub_item_round_trip() {
        let folder = StubLocation::new(5, Some(1), "Folder");
        let item = StubItem::browsable(folder.clone());

        assert_eq!(item.item_id(), ItemId::from(5));
        assert_eq!(item.name(), "Folder");
        assert_eq!(
            item.as_location().unwrap().parent_id(),
            Some(ItemId::from(1))
        );
    }
}
