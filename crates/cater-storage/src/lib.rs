//! Cater Storage crate - SQLite persistence for the assistant's preferences.
//!
//! Provides a WAL-mode SQLite database with migrations, a key-value
//! `PreferenceStore` with SQLite and in-memory implementations, and a typed
//! accessor for the flags the chat widget and host page persist.

pub mod db;
pub mod flags;
pub mod migrations;
pub mod preferences;

pub use db::Database;
pub use flags::{ChatFlags, CHAT_OPEN_KEY, INTRO_SEEN_KEY, LANGUAGE_KEY};
pub use preferences::{MemoryPreferences, PreferenceRepository, PreferenceStore};
