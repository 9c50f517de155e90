//! # Campusdesk Architecture
//!
//! Campusdesk is a **UI-agnostic library** for the record lists of an institute
//! administration console: colleges, students, faculty, the question bank, tests and their
//! taxonomies. Every list is the same machine: a store of records, a set of (possibly
//! hierarchical) filters, a paginator and an editor. The binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats tables, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (collection names, key=value filters)  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Seeds a screen, applies requests, returns CmdResult      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Screen Layer (screen.rs, filter/, paginate.rs, editable.rs)│
//! │  - One update function per list: ListScreen::apply         │
//! │  - CollectionStore trait, InMemoryStore                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//!
//! Rows are shown with a 1-based ordinal inside the filtered list, but every mutation
//! addresses a record by its [`model::RecordId`]. An ordinal is resolved to an id against
//! the view that displayed it, so deleting "row 3" under a filter removes the record that
//! was on screen as row 3.
//!
//! ## No I/O in the core
//!
//! From `api.rs` inward, code takes Rust arguments and returns `Result<CmdResult>`. It
//! never writes to stdout/stderr and never exits the process. Logging goes through
//! `tracing`; the binary installs the subscriber (see [`logging`]).
//!
//! ## Testing Strategy
//!
//! 1. **Screen and filter modules**: unit tests of the list semantics. Most tests live here.
//! 2. **Commands**: a seeded collection per test, checking the `CmdResult`.
//! 3. **API**: dispatch and input parsing.
//! 4. **CLI** (`tests/`): the binary end to end with `assert_cmd`, plus property tests.
//!
//! ## Module Overview
//!
//! - [`model`]: `RecordId`, `FieldValue`, the `Record` and `Tabular` traits
//! - [`store`]: `CollectionStore` and the in-memory store
//! - [`filter`]: filter values, descriptors, the cascading filter graph, option lists
//! - [`paginate`]: page state and slicing
//! - [`editable`]: add/edit/delete with validation
//! - [`screen`]: the per-list update function and view
//! - [`validation`]: field rules and collected errors
//! - [`attachment`]: reference-counted upload handles
//! - [`catalog`]: the console's record shapes, seeds, forms and screen presets
//! - [`api`], [`commands`], [`config`], [`logging`], [`error`]
//! - `cli`: argument parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod attachment;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod editable;
pub mod error;
pub mod filter;
pub mod logging;
pub mod model;
pub mod paginate;
pub mod screen;
pub mod store;
pub mod validation;
