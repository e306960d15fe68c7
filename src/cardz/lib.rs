//! # Cardz Architecture
//!
//! Cardz is a **UI-agnostic payment-card entry library**. The command-line client is one
//! consumer of it; a mobile screen or a TUI could drive the exact same core.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the bound CardStore and the config                  │
//! │  - Converts display indexes (1-based) to store indexes      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Operates on Rust types, returns CmdResult                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model Layer                                                │
//! │  - input (normalizers, display transforms), brand           │
//! │  - form / carousel (screen state + pure render)             │
//! │  - store (CardStore) over prefs (Preferences backends)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Raw vs Display Values
//!
//! Every field is stored *raw*: digits only for number, expiry and CVV, uppercased
//! letters and whitespace for the holder name. Separators, masks and grouping only
//! exist in display values produced by [`input`] and [`form`]. Nothing ever parses
//! a display value back into a stored one.
//!
//! ## Persistence
//!
//! The whole collection lives under one key of one preferences namespace and is
//! rewritten wholesale after every mutation. See [`store`] for the exact contract.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`input`]: Keystroke filters and display transforms
//! - [`brand`]: Card brand classification and display styles
//! - [`form`]: Add-card form state and card preview rendering
//! - [`carousel`]: Saved-cards browsing selection
//! - [`store`]: The card collection bound to a preferences handle
//! - [`prefs`]: Key/value persistence backends
//! - [`model`]: Core data types (`CardRecord`, `Brand`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and styled rendering for the binary (not part of the lib API)

pub mod api;
pub mod brand;
pub mod carousel;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod input;
pub mod model;
pub mod prefs;
pub mod store;
