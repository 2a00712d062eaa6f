//! # Storage Layer
//!
//! The [`TodoStore`] trait is the only way the command layer reaches the todo
//! collection. It is deliberately tiny: read the whole collection, replace the
//! whole collection.
//!
//! ## Contract
//!
//! - `get` returns the current ordered collection (possibly empty, never absent).
//! - `set` replaces the stored collection entirely.
//!
//! Commands call `get` once at the start of every operation and, when they
//! mutate, `set` exactly once at the end. Nothing is cached between calls, so
//! a store may be shared by several commands in a row as long as they run one
//! at a time.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: no persistence, counts writes; used by tests.
//! - [`fs::FileStore`]: a single JSON file, used by the `todo` binary.
//!
//! ## Storage Format
//!
//! For `FileStore` the collection is a pretty-printed JSON array:
//!
//! ```text
//! [
//!   { "id": 1, "title": "Buy milk", "done": false, "labels": ["home"] }
//! ]
//! ```

use crate::error::Result;
use crate::model::Todo;

pub mod fs;
pub mod memory;

/// Abstract interface for todo storage.
pub trait TodoStore {
    /// Snapshot of the current collection.
    fn get(&self) -> Result<Vec<Todo>>;

    /// Replace the stored collection.
    fn set(&mut self, todos: Vec<Todo>) -> Result<()>;
}
