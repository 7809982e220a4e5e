//! Local fallback store.
//!
//! One JSON file holds a map from kind tag to an ordered list of records
//! in the canonical [`Record`] shape. A missing file reads as empty; every
//! mutation loads the whole file, changes it in memory and writes it back
//! atomically (tmp file + rename). No locking: concurrent writers on the
//! same file race, last write wins.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::TraceStore;
use crate::error::{Result, TraceError};
use crate::model::{Record, RecordKind};
use crate::seed::sample_products;

type KindMap = HashMap<String, Vec<Record>>;

pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<KindMap> {
        if !self.path.exists() {
            return Ok(KindMap::new());
        }
        let content = fs::read_to_string(&self.path).map_err(TraceError::Io)?;
        let map: KindMap = serde_json::from_str(&content).map_err(TraceError::Serialization)?;
        Ok(map)
    }

    fn save(&self, map: &KindMap) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(TraceError::Io)?;
            }
        }
        let content = serde_json::to_string_pretty(map).map_err(TraceError::Serialization)?;

        // Atomic write: no reader ever sees a half-written file.
        let tmp_path = self.path.with_extension(format!("tmp.{}", std::process::id()));
        fs::write(&tmp_path, content).map_err(TraceError::Io)?;
        fs::rename(&tmp_path, &self.path).map_err(TraceError::Io)?;
        Ok(())
    }

    /// Populate the products record set with the sample catalog if it is
    /// empty. Returns the number of records added (0 when already seeded).
    pub fn seed(&self) -> Result<usize> {
        let mut map = self.load()?;
        let products = map
            .entry(RecordKind::AddProduct.as_str().to_string())
            .or_default();
        if !products.is_empty() {
            return Ok(0);
        }
        for product in sample_products() {
            products.push(product.to_record());
        }
        let seeded = products.len();
        self.save(&map)?;
        Ok(seeded)
    }
}

impl TraceStore for LocalStore {
    fn read_all(&self, kind: RecordKind) -> Result<Vec<Record>> {
        let map = self.load()?;
        Ok(map.get(kind.as_str()).cloned().unwrap_or_default())
    }

    fn append(&self, kind: RecordKind, record: &Record) -> Result<()> {
        let mut map = self.load()?;
        map.entry(kind.as_str().to_string())
            .or_default()
            .push(record.clone());
        self.save(&map)
    }

    fn replace_all(&self, kind: RecordKind, records: &[Record]) -> Result<()> {
        let mut map = self.load()?;
        map.insert(kind.as_str().to_string(), records.to_vec());
        self.save(&map)
    }
}
