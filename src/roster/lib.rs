//! # Roster Architecture
//!
//! Roster is a **UI-agnostic library** for managing a small group of students
//! and chaperones and composing email lists from it. The `roster` binary is one
//! client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, prints, talks to clipboard    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - One session: owns the roster store and the selection     │
//! │  - Thin facade over commands, returns CmdResult             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Wraps core operations into results and user messages     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core                                                       │
//! │  - roster: RosterStore (add / update / remove)              │
//! │  - view: derive_view (filter, search, sort)                 │
//! │  - selection: Selection                                     │
//! │  - compose: comma-joined address lists                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, codec.rs)                           │
//! │  - KeyValueStore trait: FileStore, InMemoryStore            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never touches
//! the clipboard. Diagnostics go through the `log` facade; the binary decides
//! where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Result and message wrapping for each operation
//! - [`roster`]: The owned roster and its persistence mirroring
//! - [`view`]: Derived visible list
//! - [`selection`]: Selected ids
//! - [`compose`]: Email list composition
//! - [`model`]: `Person`, `Role`, `PersonInput`, default seed
//! - [`codec`]: Saved roster text format
//! - [`store`]: Storage abstraction and implementations
//! - [`clipboard`]: Clipboard delivery with manual-copy fallback
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod codec;
pub mod commands;
pub mod compose;
pub mod config;
pub mod error;
pub mod model;
pub mod roster;
pub mod selection;
pub mod store;
pub mod view;
