use std::{fs, io::Write, path::Path};

use serde::{de::DeserializeOwned, Serialize};
use tempfile::NamedTempFile;

use crate::errors::Result;

/// Writes `value` as pretty JSON through a uniquely named sibling temp file,
/// then renames it over `path`. Concurrent writers never share a staging file.
pub fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;
    let mut staged = NamedTempFile::new_in(parent)?;
    serde_json::to_writer_pretty(&mut staged, value)?;
    staged.flush()?;
    staged.persist(path).map_err(|err| err.error)?;
    Ok(())
}

pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
