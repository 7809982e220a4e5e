//! # API Facade
//!
//! The API layer is the single entry point for all pharmatrace operations,
//! regardless of the UI being used. It owns both stores and implements the
//! one policy the stores themselves deliberately do not: **ledger first,
//! local fallback on `LedgerUnavailable`**.
//!
//! ## Fallback rules
//!
//! - Only [`TraceError::LedgerUnavailable`] triggers the fallback. Every
//!   other error (not found, malformed, IO) propagates as-is — those mean
//!   the operation itself failed, not the transport.
//! - When a product read falls back for the first time, the local store is
//!   seeded with the sample catalog so the system stays demoable offline.
//! - The two stores are never merged or reconciled: whichever store served
//!   the request is the view the caller gets.
//!
//! ## What the API Does NOT Do
//!
//! - No business logic: the update algorithm lives in [`crate::trace`].
//! - No I/O concerns: no stdout, stderr or formatting. That belongs to the
//!   CLI (or whatever UI sits on top).

use chrono::NaiveDate;

use crate::error::{Result, TraceError};
use crate::model::{Product, RecordKind, TraceEvent, UserAccount};
use crate::record::DecodeReport;
use crate::store::local::LocalStore;
use crate::store::TraceStore;
use crate::trace::record_trace_event;

/// Which store actually served a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Served {
    Ledger,
    Fallback,
}

/// A result plus the store that produced it.
#[derive(Debug)]
pub struct Outcome<T> {
    pub value: T,
    pub served: Served,
}

/// The product catalog as read from a store, plus how many stored entries
/// could not be decoded and were left out of the view.
#[derive(Debug)]
pub struct ProductListing {
    pub products: Vec<Product>,
    pub skipped: usize,
}

/// The main API facade.
///
/// Generic over the primary store so tests can swap the ledger for an
/// in-memory store; the fallback is always the local file store.
pub struct TraceApi<L: TraceStore> {
    ledger: L,
    local: LocalStore,
}

impl<L: TraceStore> TraceApi<L> {
    pub fn new(ledger: L, local: LocalStore) -> Self {
        Self { ledger, local }
    }

    /// Run `op` against the ledger; on `LedgerUnavailable`, run it against
    /// the local store instead.
    fn with_fallback<T, F>(&self, op: F) -> Result<Outcome<T>>
    where
        F: Fn(&dyn TraceStore) -> Result<T>,
    {
        match op(&self.ledger) {
            Ok(value) => Ok(Outcome {
                value,
                served: Served::Ledger,
            }),
            Err(TraceError::LedgerUnavailable(_)) => op(&self.local).map(|value| Outcome {
                value,
                served: Served::Fallback,
            }),
            Err(e) => Err(e),
        }
    }

    /// List the product catalog with current trace info.
    ///
    /// Records that no longer parse as products are dropped from the view
    /// rather than failing the whole listing; the listing reports how many
    /// were dropped so the caller can warn about them.
    pub fn products(&self) -> Result<Outcome<ProductListing>> {
        match self.ledger.read_all_checked(RecordKind::AddProduct) {
            Ok(report) => Ok(Outcome {
                value: to_listing(report),
                served: Served::Ledger,
            }),
            Err(TraceError::LedgerUnavailable(_)) => {
                // First offline read: make sure the demo catalog exists.
                self.local.seed()?;
                let report = self.local.read_all_checked(RecordKind::AddProduct)?;
                Ok(Outcome {
                    value: to_listing(report),
                    served: Served::Fallback,
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Register a new product, stamped with `today` and an initial
    /// "Production State" trace entry.
    pub fn add_product(
        &self,
        name: &str,
        price: &str,
        qty: &str,
        desc: &str,
        image: &str,
        today: NaiveDate,
    ) -> Result<Outcome<()>> {
        let product = Product {
            name: name.to_string(),
            price: price.to_string(),
            qty: qty.to_string(),
            desc: desc.to_string(),
            image: image.to_string(),
            last_update: today.to_string(),
            tracing_info: "Production State".to_string(),
        };
        let record = product.to_record();
        // Reject delimiter collisions before anything touches a store.
        crate::record::encode_record(&record)?;
        self.with_fallback(|store| store.append(RecordKind::AddProduct, &record))
    }

    /// Record a supply-chain tracing event against a named product.
    pub fn record_trace_event(
        &self,
        product_name: &str,
        event: &TraceEvent,
        today: NaiveDate,
    ) -> Result<Outcome<()>> {
        self.with_fallback(|store| record_trace_event(store, product_name, event, today))
    }

    /// Store a signup record after a duplicate-username check.
    ///
    /// The check and the append run against the same store, so the
    /// uniqueness scan sees the records it is about to extend.
    pub fn register_user(&self, account: &UserAccount) -> Result<Outcome<()>> {
        let record = account.to_record();
        crate::record::encode_record(&record)?;
        self.with_fallback(|store| {
            let existing = store.read_all(RecordKind::Signup)?;
            if existing.iter().any(|r| r.name() == account.username) {
                return Err(TraceError::Api(format!(
                    "Username already exists: {}",
                    account.username
                )));
            }
            store.append(RecordKind::Signup, &record)
        })
    }

    /// Credential lookup over signup records. Returns the matching account,
    /// or `None` when no username/password pair matches.
    pub fn find_user(&self, username: &str, password: &str) -> Result<Outcome<Option<UserAccount>>> {
        self.with_fallback(|store| {
            let records = store.read_all(RecordKind::Signup)?;
            for record in &records {
                if let Ok(account) = UserAccount::from_record(record) {
                    if account.username == username && account.password == password {
                        return Ok(Some(account));
                    }
                }
            }
            Ok(None)
        })
    }

    /// Force-populate the local fallback with the sample catalog.
    pub fn seed_local(&self) -> Result<usize> {
        self.local.seed()
    }
}

fn to_listing(report: DecodeReport) -> ProductListing {
    // Records the codec let through can still fail the typed view (the
    // local file holds structured records the codec never sees); count
    // those alongside the lines the decode dropped.
    let mut skipped = report.skipped;
    let products = report
        .records
        .iter()
        .filter_map(|r| match Product::from_record(r) {
            Ok(product) => Some(product),
            Err(_) => {
                skipped += 1;
                None
            }
        })
        .collect();
    ProductListing { products, skipped }
}
