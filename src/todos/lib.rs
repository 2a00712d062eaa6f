//! # Todos Architecture
//!
//! Todos is a small todo-list library with a command-line client. Every command
//! (`add`, `complete`, `add-label`, ...) is reachable by name through the API,
//! so the same core can back the `todo` binary, a test, or another front end.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, prints messages, sets the exit code    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Registry of commands by name                             │
//! │  - validate → execute → render for each command             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (validate.rs, commands/*.rs, format.rs)      │
//! │  - Raw arguments → typed params                             │
//! │  - Read-modify-write over the collection                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - TodoStore trait: get / set the whole collection          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//!
//! After every command:
//! - ids are unique and positive; a new id is the largest id in use plus one
//! - a todo never carries the same label twice
//! - a failed command has not written anything
//!
//! ## Errors
//!
//! Every failure is a [`error::TodoError`] whose `Display` is the exact text
//! shown to the user, e.g. `Todo with id: 4, is not found!`.
//!
//! ## Module Overview
//!
//! - [`api`]: the command registry and `TodoApi` facade
//! - [`validate`]: per-command argument validation
//! - [`commands`]: the operations on the collection
//! - [`format`]: display strings for todos
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: `Todo`, `Status`, `IdArg`
//! - [`config`]: configuration file and store path resolution
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod store;
pub mod validate;
