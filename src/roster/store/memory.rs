use super::KeyValueStore;
use crate::error::{Result, RosterError};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every write fails, for exercising best-effort saves.
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// A store whose reads fail, as an unreadable data file would.
    pub fn unreadable() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads {
            return Err(RosterError::Store("permission denied".to_string()));
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(RosterError::Store("storage is full".to_string()));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::codec::encode_roster;
    use crate::model::{Person, Role};
    use crate::store::ROSTER_KEY;

    pub struct StoreFixture {
        pub store: InMemoryStore,
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

        pub fn with_raw(mut self, text: &str) -> Self {
            self.store.set(ROSTER_KEY, text).unwrap();
            self
        }

        pub fn with_people(self, people: &[Person]) -> Self {
            let text = encode_roster(people).unwrap();
            self.with_raw(&text)
        }
    }

    pub fn person(id: &str, name: &str, role: Role, email: Option<&str>) -> Person {
        Person {
            id: id.to_string(),
            name: name.to_string(),
            role,
            email: email.map(str::to_string),
            guardian_email: None,
            passport: false,
        }
    }
}
