//! # taguh Architecture
//!
//! taguh attaches free-form tags to files and finds them again by tag or by
//! name. It is a small library with a CLI client on top; everything below the
//! CLI is UI-agnostic.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders results, maps exit codes       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Normalizes inputs (paths → absolute, sort strings)       │
//! │  - Returns structured Result<CmdResult>                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / list / find business logic                         │
//! │  - Built on validate.rs, tags.rs (merge), query.rs (search) │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: load-all / replace-all of two documents │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persisted Data
//!
//! Two tab-indented JSON documents in the data directory (`./data` unless
//! configured otherwise):
//!
//! ```text
//! taguh.json  { "/abs/path": { "tags": "Starred,work", "created_on": "2024-03-09 17:04:55" } }
//! tags.json   { "Starred":   { "description": "...",   "created_on": "2024-03-09 17:04:55" } }
//! ```
//!
//! Tag names are case-insensitive everywhere except the `find tag` substring
//! search, which tests the stored string as-is (see [`query`]).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for `add`, `list` and `find`
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Records, timestamps and seed tags
//! - [`tags`]: Case-insensitive tag sets and the merge rule
//! - [`query`]: File/tag search and sorting
//! - [`validate`]: Pre-mutation checks
//! - [`config`]: User configuration
//! - [`init`]: Builds a ready-to-use API from config and environment
//! - [`error`]: Error types
//! - `cli`: Argument parsing and rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod query;
pub mod store;
pub mod tags;
pub mod validate;
