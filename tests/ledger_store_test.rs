use pharmatrace::api::TraceApi;
use pharmatrace::error::TraceError;
use pharmatrace::model::{Record, RecordKind};
use pharmatrace::store::ledger::{LedgerStore, LedgerTransport};
use pharmatrace::store::local::LocalStore;
use pharmatrace::store::TraceStore;
use std::cell::RefCell;
use std::collections::HashMap;

/// Transport stub keeping blobs in memory, mimicking the blob-per-kind
/// contract storage.
#[derive(Default)]
struct MockTransport {
    blobs: RefCell<HashMap<RecordKind, String>>,
}

impl MockTransport {
    fn blob(&self, kind: RecordKind) -> String {
        self.blobs.borrow().get(&kind).cloned().unwrap_or_default()
    }

    fn preload(&self, kind: RecordKind, blob: &str) {
        self.blobs.borrow_mut().insert(kind, blob.to_string());
    }
}

impl LedgerTransport for MockTransport {
    fn fetch(&self, kind: RecordKind) -> pharmatrace::error::Result<String> {
        Ok(self.blob(kind))
    }

    fn store(&self, kind: RecordKind, blob: &str) -> pharmatrace::error::Result<()> {
        self.blobs.borrow_mut().insert(kind, blob.to_string());
        Ok(())
    }
}

/// Transport that always fails, as if the service were down.
struct DownTransport;

impl LedgerTransport for DownTransport {
    fn fetch(&self, _kind: RecordKind) -> pharmatrace::error::Result<String> {
        Err(TraceError::LedgerUnavailable("connection refused".into()))
    }

    fn store(&self, _kind: RecordKind, _blob: &str) -> pharmatrace::error::Result<()> {
        Err(TraceError::LedgerUnavailable("connection refused".into()))
    }
}

fn product_record(name: &str) -> Record {
    Record::new(
        RecordKind::AddProduct,
        vec![
            name.to_string(),
            "5.00".to_string(),
            "100".to_string(),
            "pain relief".to_string(),
            "img.png".to_string(),
            "2025-01-01".to_string(),
            "Manufactured".to_string(),
        ],
    )
}

#[test]
fn test_read_all_never_written_is_empty() {
    let store = LedgerStore::new(MockTransport::default());
    assert!(store.read_all(RecordKind::AddProduct).unwrap().is_empty());
}

#[test]
fn test_append_then_read_all_in_order() {
    let store = LedgerStore::new(MockTransport::default());
    store
        .append(RecordKind::AddProduct, &product_record("First"))
        .unwrap();
    store
        .append(RecordKind::AddProduct, &product_record("Second"))
        .unwrap();

    let records = store.read_all(RecordKind::AddProduct).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name(), "First");
    assert_eq!(records[1].name(), "Second");
}

#[test]
fn test_append_is_full_blob_replacement() {
    let transport = MockTransport::default();
    transport.preload(
        RecordKind::AddProduct,
        "addproduct#Existing#1.00#10#old stock#img.png#2024-12-31#Manufactured\n",
    );
    let store = LedgerStore::new(transport);

    store
        .append(RecordKind::AddProduct, &product_record("New"))
        .unwrap();

    // The stored blob is the old content plus the new line: the transport
    // saw one whole-blob write, not an incremental append.
    let records = store.read_all(RecordKind::AddProduct).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name(), "Existing");
    assert_eq!(records[1].name(), "New");
}

#[test]
fn test_append_handles_blob_without_trailing_newline() {
    let transport = MockTransport::default();
    transport.preload(
        RecordKind::AddProduct,
        "addproduct#Existing#1.00#10#old stock#img.png#2024-12-31#Manufactured",
    );
    let store = LedgerStore::new(transport);

    store
        .append(RecordKind::AddProduct, &product_record("New"))
        .unwrap();
    assert_eq!(store.read_all(RecordKind::AddProduct).unwrap().len(), 2);
}

#[test]
fn test_read_all_skips_malformed_lines() {
    let transport = MockTransport::default();
    transport.preload(
        RecordKind::AddProduct,
        "addproduct#Good#5.00#100#ok#img.png#2025-01-01#Manufactured\n\
         addproduct#broken#row\n\
         not a record at all\n",
    );
    let store = LedgerStore::new(transport);

    let records = store.read_all(RecordKind::AddProduct).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name(), "Good");
}

#[test]
fn test_read_all_checked_reports_dropped_lines() {
    let transport = MockTransport::default();
    transport.preload(
        RecordKind::AddProduct,
        "addproduct#Good#5.00#100#ok#img.png#2025-01-01#Manufactured\n\
         addproduct#broken#row\n\
         not a record at all\n",
    );
    let store = LedgerStore::new(transport);

    let report = store.read_all_checked(RecordKind::AddProduct).unwrap();
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.skipped, 2);
}

#[test]
fn test_dropped_lines_surface_in_product_listing() {
    let transport = MockTransport::default();
    transport.preload(
        RecordKind::AddProduct,
        "addproduct#Good#5.00#100#ok#img.png#2025-01-01#Manufactured\n\
         addproduct#broken#row\n",
    );
    let dir = tempfile::TempDir::new().unwrap();
    let api = TraceApi::new(
        LedgerStore::new(transport),
        LocalStore::new(dir.path().join("trace_data.json")),
    );

    let outcome = api.products().unwrap();
    assert_eq!(outcome.value.products.len(), 1);
    assert_eq!(outcome.value.products[0].name, "Good");
    assert_eq!(outcome.value.skipped, 1);
}

#[test]
fn test_replace_all_is_idempotent() {
    let store = LedgerStore::new(MockTransport::default());
    let records = vec![product_record("A"), product_record("B")];

    store.replace_all(RecordKind::AddProduct, &records).unwrap();
    store.replace_all(RecordKind::AddProduct, &records).unwrap();

    assert_eq!(store.read_all(RecordKind::AddProduct).unwrap(), records);
}

#[test]
fn test_down_transport_surfaces_ledger_unavailable() {
    let store = LedgerStore::new(DownTransport);

    match store.read_all(RecordKind::AddProduct) {
        Err(TraceError::LedgerUnavailable(_)) => {}
        other => panic!("expected LedgerUnavailable, got {:?}", other),
    }
    match store.append(RecordKind::AddProduct, &product_record("X")) {
        Err(TraceError::LedgerUnavailable(_)) => {}
        other => panic!("expected LedgerUnavailable, got {:?}", other),
    }
}
