//! # Pharmatrace Architecture
//!
//! Pharmatrace is a **UI-agnostic supply-chain tracing library**. The CLI
//! binary is just one client; the library never assumes a terminal.
//!
//! ## The Layer Stack
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Ledger-first / local-fallback orchestration              │
//! │  - Returns structured Result types with provenance          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Trace Logic (trace.rs)                                     │
//! │  - Update-by-name over the product record set               │
//! │  - Pure: operates against any TraceStore                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract TraceStore trait                                │
//! │  - LedgerStore (remote), LocalStore (file), MemStore (test) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Two-Store Model
//!
//! The remote ledger is the primary store; a local JSON file is the
//! fallback taken when the ledger is unreachable. The stores satisfy the
//! same [`store::TraceStore`] contract but are never reconciled — they can
//! diverge, and a caller picks a view, not a merge. See `store/mod.rs` for
//! the full storage semantics, including the whole-set read-modify-write
//! mutation model and its last-write-wins race.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<Outcome<T>>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`trace`]: The event-log update algorithm
//! - [`store`]: Storage abstraction and implementations
//! - [`record`]: Delimited-line wire codec for the ledger blob
//! - [`model`]: Core data types (`Record`, `Product`, `TraceEvent`)
//! - [`seed`]: Sample catalog for offline demos
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod record;
pub mod seed;
pub mod store;
pub mod trace;
