//! # Rubbish Architecture
//!
//! Rubbish is a personal inventory tracker: record items (a name, the
//! container they sit in, a description, tags) and find them again later by
//! text or tag. Two command-line clients, `rubbish` and `whereis`, sit on top
//! of the same library.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by the binaries)                    │
//! │  - Parses arguments, loads config, prints results           │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API + Command Layer (api.rs, commands/*.rs)                │
//! │  - Validates requests (name, container policy, tags)        │
//! │  - Returns structured CmdResult values                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Store trait: add, search, search_description             │
//! │  - Whala (production), InMemoryStore (testing)              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Fixity (fixity/)                                           │
//! │  - Content-addressed versions + field index + queries       │
//! │  - DiskFixity (production), MemFixity (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Backends are always passed in by value (`Whala::new(fixity)`,
//! `RubbishApi::new(store)`); nothing is held in a global.
//!
//! ## Module Overview
//!
//! - [`api`]: Facade the front ends call
//! - [`commands`]: Add/search request handling
//! - [`store`]: `Store` trait and implementations
//! - [`fixity`]: Object store and index the production store runs on
//! - [`model`]: The `Item` type
//! - [`config`]: TOML config and the store factory
//! - [`error`]: Error types
//! - [`cli`]: Argument parsing and printing for the binaries

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fixity;
pub mod model;
pub mod store;
