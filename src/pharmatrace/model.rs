//! # Domain Model: Records, Products and Trace Events
//!
//! Both stores speak one unit of data: the [`Record`] — a kind tag plus an
//! ordered list of string fields. The field layout depends on the kind:
//!
//! | Kind | Fields (in order) |
//! |------|-------------------|
//! | `signup` | `username, password, contact, email, address, full_name` |
//! | `addproduct` | `name, price, qty, desc, image, last_update, tracing_info` |
//!
//! [`Product`] and [`UserAccount`] are typed views over these layouts.
//! Conversions validate kind and field count, so a `Record` that made it
//! through [`Product::from_record`] is safe to index positionally.
//!
//! ## Trace log semantics
//!
//! `tracing_info` is a free-text log, not a structured list. Recording a new
//! [`TraceEvent`] *replaces* the whole string; history is only preserved if
//! the caller composes it into the new text. This mirrors the ledger wire
//! format and is a documented limitation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TraceError};

/// Tag distinguishing record shapes. Determines the field layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    Signup,
    AddProduct,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Signup => "signup",
            RecordKind::AddProduct => "addproduct",
        }
    }

    /// Expected number of fields after the kind tag.
    pub fn field_count(&self) -> usize {
        match self {
            RecordKind::Signup => 6,
            RecordKind::AddProduct => 7,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "signup" => Ok(RecordKind::Signup),
            "addproduct" => Ok(RecordKind::AddProduct),
            other => Err(TraceError::Store(format!("unknown record kind: {other}"))),
        }
    }
}

/// The atomic unit of both stores.
///
/// This is the canonical internal representation: the local fallback file
/// stores records in exactly this shape, and the ledger codec maps them to
/// and from delimited lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub kind: RecordKind,
    pub fields: Vec<String>,
}

impl Record {
    pub fn new(kind: RecordKind, fields: Vec<String>) -> Self {
        Self { kind, fields }
    }

    /// The identity field: first field after the kind tag
    /// (product name for `addproduct`, username for `signup`).
    pub fn name(&self) -> &str {
        self.fields.first().map(String::as_str).unwrap_or("")
    }
}

/// Typed view of an `addproduct` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: String,
    pub qty: String,
    pub desc: String,
    pub image: String,
    pub last_update: String,
    pub tracing_info: String,
}

impl Product {
    pub fn to_record(&self) -> Record {
        Record::new(
            RecordKind::AddProduct,
            vec![
                self.name.clone(),
                self.price.clone(),
                self.qty.clone(),
                self.desc.clone(),
                self.image.clone(),
                self.last_update.clone(),
                self.tracing_info.clone(),
            ],
        )
    }

    pub fn from_record(record: &Record) -> Result<Self> {
        if record.kind != RecordKind::AddProduct {
            return Err(TraceError::Store(format!(
                "expected addproduct record, got {}",
                record.kind
            )));
        }
        if record.fields.len() != RecordKind::AddProduct.field_count() {
            return Err(TraceError::MalformedRecord {
                expected: RecordKind::AddProduct.field_count(),
                got: record.fields.len(),
            });
        }
        let f = &record.fields;
        Ok(Self {
            name: f[0].clone(),
            price: f[1].clone(),
            qty: f[2].clone(),
            desc: f[3].clone(),
            image: f[4].clone(),
            last_update: f[5].clone(),
            tracing_info: f[6].clone(),
        })
    }
}

/// Typed view of a `signup` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub username: String,
    pub password: String,
    pub contact: String,
    pub email: String,
    pub address: String,
    pub full_name: String,
}

impl UserAccount {
    pub fn to_record(&self) -> Record {
        Record::new(
            RecordKind::Signup,
            vec![
                self.username.clone(),
                self.password.clone(),
                self.contact.clone(),
                self.email.clone(),
                self.address.clone(),
                self.full_name.clone(),
            ],
        )
    }

    pub fn from_record(record: &Record) -> Result<Self> {
        if record.kind != RecordKind::Signup {
            return Err(TraceError::Store(format!(
                "expected signup record, got {}",
                record.kind
            )));
        }
        if record.fields.len() != RecordKind::Signup.field_count() {
            return Err(TraceError::MalformedRecord {
                expected: RecordKind::Signup.field_count(),
                got: record.fields.len(),
            });
        }
        let f = &record.fields;
        Ok(Self {
            username: f[0].clone(),
            password: f[1].clone(),
            contact: f[2].clone(),
            email: f[3].clone(),
            address: f[4].clone(),
            full_name: f[5].clone(),
        })
    }
}

/// One supply-chain status update for a product.
///
/// `event_type` and `status` are required; the rest are optional and only
/// rendered when non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceEvent {
    pub event_type: String,
    pub status: String,
    pub location: String,
    pub responsible: String,
    pub notes: String,
}

impl TraceEvent {
    pub fn new(event_type: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            status: status.into(),
            ..Default::default()
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_responsible(mut self, responsible: impl Into<String>) -> Self {
        self.responsible = responsible.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Render the free-text trace log entry.
    ///
    /// Format: `{type}! {status}` followed by ` @ {location}`,
    /// ` - {responsible}` and ` | Notes: {notes}`, each only when set.
    pub fn render(&self) -> String {
        let mut out = format!("{}! {}", self.event_type, self.status);
        if !self.location.is_empty() {
            out.push_str(&format!(" @ {}", self.location));
        }
        if !self.responsible.is_empty() {
            out.push_str(&format!(" - {}", self.responsible));
        }
        if !self.notes.is_empty() {
            out.push_str(&format!(" | Notes: {}", self.notes));
        }
        out
    }
}
