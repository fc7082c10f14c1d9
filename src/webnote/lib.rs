//! # Webnote Architecture
//!
//! Webnote is a **UI-agnostic multi-page note pad**. The library holds the
//! page collection, its persistence and a one-step undo for clears; any UI
//! (the bundled terminal client, a browser front-end, ...) drives it through
//! a session and re-reads state after each intent.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Presentation (cli/, wired by main.rs)                      │
//! │  - Turns user input into intents, prints state and notices  │
//! │  - Owns the clipboard, exporter and key event source        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (session.rs)                                       │
//! │  - Rename / delete modal state machine                      │
//! │  - Maps typed errors to user-facing notices                 │
//! └─────────────────────────────────────────────────────────────┘
//!                   │                         │
//!                   ▼                         ▼
//! ┌──────────────────────────────┐ ┌────────────────────────────┐
//! │  PageStore (pages.rs)        │ │  UndoBuffer (undo.rs)      │
//! │  - Ordered pages + cursor    │ │  - One pending clear       │
//! │  - Saves after every change  │ └────────────────────────────┘
//! └──────────────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - PersistenceAdapter trait, JSON slot                      │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Below the presentation layer, code never writes to stdout/stderr, never
//! exits the process and never talks to the OS clipboard or key handling
//! directly. Those are passed in as [`clipboard::ClipboardWriter`],
//! [`export::FileExporter`] and [`keys::KeyEventSource`].
//!
//! Nothing in the core is fatal: a storage that cannot be read starts a
//! fresh collection, a storage that cannot be written keeps the in-memory
//! pages authoritative and says so through the session's notices.
//!
//! ## Module Overview
//!
//! - [`model`]: `Page` and list summaries
//! - [`pages`]: the page store
//! - [`undo`]: the single-slot undo buffer
//! - [`session`]: the editor session and its notices
//! - [`store`]: persistence contract and backends
//! - [`keys`]: key event subscription and key chords
//! - [`clipboard`]: clipboard contract and system clipboard
//! - [`export`]: file export contract and directory exporter
//! - [`config`]: configuration file
//! - [`logging`]: tracing setup for binaries
//! - [`error`]: error types

pub mod clipboard;
pub mod config;
pub mod error;
pub mod export;
pub mod keys;
pub mod logging;
pub mod model;
pub mod pages;
pub mod session;
pub mod store;
pub mod undo;
