//! # Storage Layer
//!
//! The roster persists through a plain key-value string store. The
//! [`KeyValueStore`] trait keeps the roster logic ignorant of where the text
//! ends up.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one file per key under a data directory
//! - [`memory::InMemoryStore`]: In-memory storage for testing, no persistence
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── sm_members.json     # The roster (JSON array of people)
//! └── config.json         # RosterConfig
//! ```
//!
//! Writes are best-effort from the roster's point of view: the roster store
//! logs and swallows any error returned by [`KeyValueStore::set`].

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Key the roster is saved under. Prefixed so it never collides with other
/// data sharing the same store.
pub const ROSTER_KEY: &str = "sm_members";

/// Synchronous string storage addressed by key.
pub trait KeyValueStore {
    /// Read the value for `key`, `None` if nothing was ever written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write (create or replace) the value for `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
