//! # Roster Store
//!
//! [`RosterStore`] owns every [`Person`] record. It is the only thing that
//! mutates them, and it mirrors the full roster to its [`KeyValueStore`] after
//! each successful change.
//!
//! Saving is best-effort: a failed write is logged and otherwise ignored,
//! because the in-memory roster stays authoritative for the session.
//!
//! Removing a person returns the removed record; the caller is responsible for
//! pruning that id from any [`Selection`](crate::selection::Selection). The
//! store never holds a reference to the selection.

use crate::codec::{decode_roster, encode_roster};
use crate::error::{Result, RosterError};
use crate::model::{default_seed, Person, PersonInput};
use crate::store::{KeyValueStore, ROSTER_KEY};
use chrono::Utc;
use uuid::Uuid;

pub struct RosterStore<S: KeyValueStore> {
    store: S,
    people: Vec<Person>,
}

impl<S: KeyValueStore> RosterStore<S> {
    /// Seeds the roster from the store, falling back to the built-in seed
    /// when nothing usable was saved.
    pub fn load(store: S) -> Self {
        let saved = match store.get(ROSTER_KEY) {
            Ok(saved) => saved,
            Err(e) => {
                log::warn!("Could not read saved roster: {}", e);
                None
            }
        };
        let people = saved
            .as_deref()
            .and_then(decode_roster)
            .unwrap_or_else(default_seed);
        log::debug!("Loaded roster with {} people", people.len());
        Self { store, people }
    }

    pub fn all(&self) -> &[Person] {
        &self.people
    }

    pub fn get(&self, id: &str) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn add(&mut self, input: PersonInput) -> Result<Person> {
        let mut id = generate_id();
        while self.contains(&id) {
            id = generate_id();
        }
        let person = input.into_person(id)?;
        self.people.push(person.clone());
        log::debug!("Added {} ({})", person.name, person.id);
        self.persist();
        Ok(person)
    }

    pub fn update(&mut self, id: &str, input: PersonInput) -> Result<Person> {
        let position = self
            .people
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))?;
        let person = input.into_person(id.to_string())?;
        self.people[position] = person.clone();
        log::debug!("Updated {} ({})", person.name, person.id);
        self.persist();
        Ok(person)
    }

    /// Removes the record with `id`. Unknown ids are a no-op and return `None`.
    pub fn remove(&mut self, id: &str) -> Option<Person> {
        let position = self.people.iter().position(|p| p.id == id)?;
        let removed = self.people.remove(position);
        log::debug!("Removed {} ({})", removed.name, removed.id);
        self.persist();
        Some(removed)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self) {
        let written = encode_roster(&self.people).and_then(|text| self.store.set(ROSTER_KEY, &text));
        if let Err(e) = written {
            log::warn!("Could not save roster: {}", e);
        }
    }
}

/// Time-based id with a random suffix: `id_<base36 millis>_<12 hex chars>`.
pub fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let random = Uuid::new_v4().simple().to_string();
    format!("id_{}_{}", to_base36(millis), &random[..12])
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
