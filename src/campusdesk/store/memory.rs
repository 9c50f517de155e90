use super::{CollectionStore, Entry};
use crate::error::{DeskError, Result};
use crate::model::{Record, RecordId};
use tracing::debug;

/// In-memory storage. Does NOT persist data; a new store starts empty or pre-seeded.
#[derive(Debug, Clone)]
pub struct InMemoryStore<R> {
    entries: Vec<Entry<R>>,
}

impl<R> Default for InMemoryStore<R> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<R: Record> InMemoryStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store, assigning fresh ids in iteration order.
    pub fn from_records<I: IntoIterator<Item = R>>(records: I) -> Self {
        let mut store = Self::new();
        for record in records {
            store.insert(record);
        }
        store
    }

    fn index_of(&self, id: &RecordId) -> Result<usize> {
        self.entries
            .iter()
            .position(|e| &e.id == id)
            .ok_or(DeskError::RecordNotFound(*id))
    }
}

impl<R: Record> CollectionStore<R> for InMemoryStore<R> {
    fn insert(&mut self, record: R) -> RecordId {
        let id = RecordId::new();
        self.entries.push(Entry { id, record });
        debug!(%id, total = self.entries.len(), "record inserted");
        id
    }

    fn get(&self, id: &RecordId) -> Result<&R> {
        let idx = self.index_of(id)?;
        Ok(&self.entries[idx].record)
    }

    fn replace(&mut self, id: &RecordId, record: R) -> Result<R> {
        let idx = self.index_of(id)?;
        let previous = std::mem::replace(&mut self.entries[idx].record, record);
        debug!(%id, "record replaced");
        Ok(previous)
    }

    fn remove(&mut self, id: &RecordId) -> Result<R> {
        let idx = self.index_of(id)?;
        let entry = self.entries.remove(idx);
        debug!(%id, total = self.entries.len(), "record removed");
        Ok(entry.record)
    }

    fn entries(&self) -> &[Entry<R>] {
        &self.entries
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::FieldValue;
    use crate::validation::{ValidationErrors, Validator};
    use serde::{Deserialize, Serialize};

    /// Minimal record used across unit tests: a name plus a tag list.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Item {
        pub name: String,
        pub tags: Vec<String>,
    }

    impl Item {
        pub fn new(name: &str) -> Self {
            Self {
                name: name.to_string(),
                tags: Vec::new(),
            }
        }

        pub fn tagged(name: &str, tags: &[&str]) -> Self {
            Self {
                name: name.to_string(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
            }
        }
    }

    impl Record for Item {
        fn field(&self, key: &str) -> Option<FieldValue> {
            match key {
                "name" => Some(FieldValue::text(&self.name)),
                "tags" => Some(FieldValue::list(self.tags.clone())),
                _ => None,
            }
        }

        fn validate(&self) -> ValidationErrors {
            Validator::new().required("name", "Name", &self.name).finish()
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore<Item>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds `count` items named "Item 1" .. "Item {count}".
        pub fn with_items(mut self, count: usize) -> Self {
            for i in 0..count {
                self.store.insert(Item::new(&format!("Item {}", i + 1)));
            }
            self
        }

        pub fn with_item(mut self, item: Item) -> Self {
            self.store.insert(item);
            self
        }

        pub fn ids(&self) -> Vec<RecordId> {
            self.store.entries().iter().map(|e| e.id).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{Item, StoreFixture};
    use super::*;

    #[test]
    fn insert_keeps_order() {
        let fixture = StoreFixture::new().with_items(3);
        let names: Vec<_> = fixture
            .store
            .entries()
            .iter()
            .map(|e| e.record.name.clone())
            .collect();
        assert_eq!(names, vec!["Item 1", "Item 2", "Item 3"]);
    }

    #[test]
    fn replace_keeps_id_and_position() {
        let mut fixture = StoreFixture::new().with_items(3);
        let id = fixture.ids()[1];

        let old = fixture.store.replace(&id, Item::new("Renamed")).unwrap();
        assert_eq!(old.name, "Item 2");
        assert_eq!(fixture.store.entries()[1].id, id);
        assert_eq!(fixture.store.get(&id).unwrap().name, "Renamed");
    }

    #[test]
    fn remove_returns_record() {
        let mut fixture = StoreFixture::new().with_items(2);
        let id = fixture.ids()[0];

        let removed = fixture.store.remove(&id).unwrap();
        assert_eq!(removed.name, "Item 1");
        assert_eq!(fixture.store.len(), 1);
        assert!(!fixture.store.contains(&id));
    }

    #[test]
    fn missing_ids_are_errors() {
        let mut store: InMemoryStore<Item> = InMemoryStore::new();
        let id = RecordId::new();
        assert!(matches!(store.get(&id), Err(DeskError::RecordNotFound(_))));
        assert!(matches!(store.remove(&id), Err(DeskError::RecordNotFound(_))));
        assert!(matches!(
            store.replace(&id, Item::new("x")),
            Err(DeskError::RecordNotFound(_))
        ));
    }

    #[test]
    fn seeded_store_assigns_distinct_ids() {
        let store = InMemoryStore::from_records(vec![Item::new("a"), Item::new("b")]);
        assert_eq!(store.len(), 2);
        assert_ne!(store.entries()[0].id, store.entries()[1].id);
    }
}
