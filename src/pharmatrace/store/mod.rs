//! # Storage Layer
//!
//! This module defines the storage abstraction for pharmatrace. The
//! [`TraceStore`] trait is the contract both the remote ledger and the
//! local fallback file must satisfy.
//!
//! ## Primary + Fallback Architecture
//!
//! Pharmatrace keeps two independent stores behind one interface:
//! 1. **Ledger**: the remote blob-per-kind service ([`ledger::LedgerStore`]).
//! 2. **Fallback**: a single local JSON file ([`local::LocalStore`]).
//!
//! The API facade tries the ledger first and falls back to the local file
//! on [`LedgerUnavailable`](crate::error::TraceError::LedgerUnavailable).
//! There is no reconciliation between the two: a caller choosing one store
//! chooses a *view*, not a merge, and the views can diverge silently.
//!
//! ## Mutation Model
//!
//! Every mutation is read-modify-write over the whole record set:
//! `append` and `replace_all` load the full set, change it in memory and
//! write the full set back. No store holds a lock or version token, so two
//! concurrent writers on the same kind race and the last write wins. This
//! is a known limitation carried over from the wire contract, not an
//! accident of implementation.
//!
//! ## Implementations
//!
//! - [`ledger::LedgerStore`]: production store over a [`ledger::LedgerTransport`].
//! - [`local::LocalStore`]: file-backed fallback with atomic writes and seeding.
//! - [`memory::MemStore`]: for testing logic without network or filesystem I/O.

use crate::error::Result;
use crate::model::{Record, RecordKind};
use crate::record::DecodeReport;

pub mod ledger;
pub mod local;
pub mod memory;

/// Abstract interface over a record store.
///
/// Methods take `&self`; implementations use interior mutability where
/// they keep state in memory.
pub trait TraceStore {
    /// Return every record of `kind`, in stored order. A kind that has
    /// never been written yields an empty vec, not an error.
    fn read_all(&self, kind: RecordKind) -> Result<Vec<Record>>;

    /// Like [`TraceStore::read_all`], but also reports how many stored
    /// lines were dropped while decoding, so corrupt entries never vanish
    /// without a trace. Stores whose representation cannot hold a
    /// malformed line report zero.
    fn read_all_checked(&self, kind: RecordKind) -> Result<DecodeReport> {
        Ok(DecodeReport {
            records: self.read_all(kind)?,
            skipped: 0,
        })
    }

    /// Add one record to the end of the set for `kind`.
    ///
    /// This is read-modify-write over the full set, NOT a conflict-free
    /// append: concurrent appenders can lose updates.
    fn append(&self, kind: RecordKind, record: &Record) -> Result<()>;

    /// Overwrite the entire record set for `kind`.
    fn replace_all(&self, kind: RecordKind, records: &[Record]) -> Result<()>;
}
