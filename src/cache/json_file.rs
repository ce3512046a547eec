use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    domain::ReportPayload,
    errors::Result,
    utils::persistence::{load_json, save_json},
};

use super::{CacheKey, CacheStore};

const CACHE_EXTENSION: &str = "json";

/// Cache persisted as one JSON file per key inside `root`.
#[derive(Debug, Clone)]
pub struct JsonFileCache {
    root: PathBuf,
}

impl JsonFileCache {
    pub fn new(root: PathBuf) -> Result<Self> {
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entry_path(&self, key: &CacheKey) -> PathBuf {
        self.root
            .join(format!("{}.{CACHE_EXTENSION}", file_stem(key)))
    }
}

impl CacheStore for JsonFileCache {
    fn has(&self, key: &CacheKey) -> bool {
        self.entry_path(key).is_file()
    }

    fn get(&self, key: &CacheKey) -> Result<Option<ReportPayload>> {
        let path = self.entry_path(key);
        if !path.is_file() {
            return Ok(None);
        }
        load_json(&path).map(Some)
    }

    fn store(&mut self, key: CacheKey, payload: ReportPayload) -> Result<()> {
        let path = self.entry_path(&key);
        save_json(&payload, &path)?;
        tracing::debug!(key = %key, path = %path.display(), "cached report written");
        Ok(())
    }
}

fn file_stem(key: &CacheKey) -> String {
    key.as_str()
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '_' })
        .collect()
}
