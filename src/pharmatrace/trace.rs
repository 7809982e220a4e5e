//! Event-log update algorithm.
//!
//! "Record a tracing event" is an update-by-name over the full product
//! record set: read everything, rewrite one record, write everything back.
//! The record set keeps its order; the target is replaced in place at its
//! original index.

use chrono::NaiveDate;

use crate::error::{Result, TraceError};
use crate::model::{Product, RecordKind, TraceEvent};
use crate::store::TraceStore;

/// Apply `event` to the product named `product_name` in `store`.
///
/// Only `last_update` and `tracing_info` of the target change; every other
/// field and every other record is written back untouched. The first record
/// matching the name wins; duplicates (a violated uniqueness invariant) are
/// left alone.
///
/// A missing product is [`TraceError::RecordNotFound`], never a silent
/// no-op.
pub fn record_trace_event(
    store: &dyn TraceStore,
    product_name: &str,
    event: &TraceEvent,
    today: NaiveDate,
) -> Result<()> {
    let mut records = store.read_all(RecordKind::AddProduct)?;

    let index = records
        .iter()
        .position(|r| r.name() == product_name)
        .ok_or_else(|| TraceError::RecordNotFound(product_name.to_string()))?;

    let mut product = Product::from_record(&records[index])?;
    product.last_update = today.to_string();
    product.tracing_info = event.render();
    records[index] = product.to_record();

    store.replace_all(RecordKind::AddProduct, &records)
}
