//! In-memory record store for testing.

use std::cell::RefCell;
use std::collections::HashMap;

use super::TraceStore;
use crate::error::{Result, TraceError};
use crate::model::{Record, RecordKind};

/// In-memory [`TraceStore`] for testing logic without network or
/// filesystem I/O.
///
/// Uses `RefCell` for interior mutability since the stores are
/// single-threaded and the trait takes `&self`.
#[derive(Default)]
pub struct MemStore {
    sets: RefCell<HashMap<RecordKind, Vec<Record>>>,
    simulate_write_error: RefCell<bool>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl TraceStore for MemStore {
    fn read_all(&self, kind: RecordKind) -> Result<Vec<Record>> {
        let sets = self.sets.borrow();
        Ok(sets.get(&kind).cloned().unwrap_or_default())
    }

    fn append(&self, kind: RecordKind, record: &Record) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(TraceError::Store("Simulated write error".to_string()));
        }
        let mut sets = self.sets.borrow_mut();
        sets.entry(kind).or_default().push(record.clone());
        Ok(())
    }

    fn replace_all(&self, kind: RecordKind, records: &[Record]) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(TraceError::Store("Simulated write error".to_string()));
        }
        let mut sets = self.sets.borrow_mut();
        sets.insert(kind, records.to_vec());
        Ok(())
    }
}
