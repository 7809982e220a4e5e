//! Remote ledger client.
//!
//! The ledger service stores one opaque blob per record kind; reads fetch
//! the whole blob and writes replace it. [`LedgerStore`] translates the
//! [`TraceStore`] contract onto that blob interface via the record codec.
//!
//! Transport failures of any shape (connect refused, timeout, non-2xx,
//! unreadable body) surface as a single error:
//! [`TraceError::LedgerUnavailable`]. The client performs no retry and no
//! caching; fallback policy lives in the caller.

use std::time::Duration;

use super::TraceStore;
use crate::error::{Result, TraceError};
use crate::model::{Record, RecordKind};
use crate::record::{decode_blob, encode_blob, encode_record, DecodeReport};

/// Transport boundary to the remote ledger.
///
/// `fetch` returns the full raw blob for a kind (empty string if the kind
/// has never been written); `store` replaces it wholesale.
pub trait LedgerTransport {
    fn fetch(&self, kind: RecordKind) -> Result<String>;
    fn store(&self, kind: RecordKind, blob: &str) -> Result<()>;
}

/// HTTP transport speaking `GET`/`PUT {base}/records/{kind}`.
pub struct HttpTransport {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .build();
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn record_url(&self, kind: RecordKind) -> String {
        format!("{}/records/{}", self.base_url, kind.as_str())
    }
}

impl LedgerTransport for HttpTransport {
    fn fetch(&self, kind: RecordKind) -> Result<String> {
        match self.agent.get(&self.record_url(kind)).call() {
            Ok(response) => response
                .into_string()
                .map_err(|e| TraceError::LedgerUnavailable(e.to_string())),
            // Never-written kinds read as empty, not as a failure.
            Err(ureq::Error::Status(404, _)) => Ok(String::new()),
            Err(e) => Err(TraceError::LedgerUnavailable(e.to_string())),
        }
    }

    fn store(&self, kind: RecordKind, blob: &str) -> Result<()> {
        self.agent
            .put(&self.record_url(kind))
            .set("content-type", "text/plain")
            .send_string(blob)
            .map(|_| ())
            .map_err(|e| TraceError::LedgerUnavailable(e.to_string()))
    }
}

/// Record store backed by the remote ledger.
pub struct LedgerStore<T: LedgerTransport> {
    transport: T,
}

impl<T: LedgerTransport> LedgerStore<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }
}

impl LedgerStore<HttpTransport> {
    pub fn connect(base_url: &str, timeout: Duration) -> Self {
        Self::new(HttpTransport::new(base_url, timeout))
    }
}

impl<T: LedgerTransport> TraceStore for LedgerStore<T> {
    fn read_all(&self, kind: RecordKind) -> Result<Vec<Record>> {
        Ok(self.read_all_checked(kind)?.records)
    }

    fn read_all_checked(&self, kind: RecordKind) -> Result<DecodeReport> {
        let blob = self.transport.fetch(kind)?;
        // Malformed lines are dropped from the result; the report carries
        // the count so callers can tell the read was lossy.
        Ok(decode_blob(&blob, kind))
    }

    fn append(&self, kind: RecordKind, record: &Record) -> Result<()> {
        // Full-blob replacement at the transport level: fetch, concatenate,
        // store. Two concurrent appenders race here; last write wins.
        let mut blob = self.transport.fetch(kind)?;
        let line = encode_record(record)?;
        if !blob.is_empty() && !blob.ends_with('\n') {
            blob.push('\n');
        }
        blob.push_str(&line);
        blob.push('\n');
        self.transport.store(kind, &blob)
    }

    fn replace_all(&self, kind: RecordKind, records: &[Record]) -> Result<()> {
        let blob = encode_blob(records)?;
        self.transport.store(kind, &blob)
    }
}
