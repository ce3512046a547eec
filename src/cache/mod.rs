//! Memoization of shaped reports under a deterministic signature.

pub mod json_file;
pub mod memory;

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::{domain::ReportPayload, errors::Result};

pub use json_file::JsonFileCache;
pub use memory::MemoryCache;

/// Signature of one report request: `<operation>:<sha256 hex>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Operation name the key was derived for.
    pub fn operation(&self) -> &str {
        self.0.split_once(':').map(|(op, _)| op).unwrap_or(&self.0)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Collects the parameters that identify a report request.
///
/// The operation name always leads the signature. Other properties are kept
/// sorted by name, so the order they are added in never changes the key.
#[derive(Debug, Clone)]
pub struct CacheProperties {
    operation: String,
    properties: BTreeMap<String, Value>,
}

impl CacheProperties {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Registers a named property. Re-adding a name replaces its value.
    pub fn add<T: Serialize + ?Sized>(mut self, name: &str, value: &T) -> Result<Self> {
        self.properties
            .insert(name.to_string(), serde_json::to_value(value)?);
        Ok(self)
    }

    pub fn key(&self) -> Result<CacheKey> {
        let canonical = serde_json::to_string(&(&self.operation, &self.properties))?;
        let digest = Sha256::digest(canonical.as_bytes());
        Ok(CacheKey(format!("{}:{:x}", self.operation, digest)))
    }
}

/// Key/value store holding shaped reports.
///
/// No eviction is performed by this crate. Backends that are not file based
/// report their failures as [`ReportError::Cache`](crate::errors::ReportError::Cache).
pub trait CacheStore: Send + Sync {
    fn has(&self, key: &CacheKey) -> bool;
    fn get(&self, key: &CacheKey) -> Result<Option<ReportPayload>>;
    fn store(&mut self, key: CacheKey, payload: ReportPayload) -> Result<()>;
}
