use thiserror::Error;

#[derive(Error, Debug)]
pub enum TraceError {
    /// The remote ledger could not be reached or returned garbage.
    /// Callers recover by falling back to the local store; this variant
    /// never surfaces to the end user as a hard failure.
    #[error("Ledger unavailable: {0}")]
    LedgerUnavailable(String),

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("Malformed record: expected {expected} fields, got {got}")]
    MalformedRecord { expected: usize, got: usize },

    /// A field value contains `#` or a newline and would corrupt the
    /// encoded blob. Rejected at encode time instead of written through.
    #[error("Field contains reserved delimiter or newline: {0:?}")]
    ReservedDelimiter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, TraceError>;
