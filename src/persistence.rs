//! Whole-collection JSON snapshots.
//!
//! A collection is always read and written in full. A missing or unreadable
//! file loads as an empty collection: that degradation is policy, reported
//! through `tracing` and available as an error from [`try_load`].

use std::io::{ErrorKind, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{PrettyFormatter, Serializer};
use tempfile::NamedTempFile;

use crate::error::{LoadError, StoreError};

/// Loads a collection, surfacing read and parse failures.
///
/// A missing file is not a failure and yields an empty collection.
pub fn try_load<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LoadError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(LoadError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a collection, treating any failure as an empty collection.
pub fn load<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    match try_load(path) {
        Ok(records) => records,
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Treating collection as empty: {}", _e);
            Vec::new()
        }
    }
}

/// Overwrites `path` with the pretty-printed collection.
///
/// The parent directory is created when missing. The file is replaced by an
/// atomic rename, so readers see either the old or the new snapshot.
pub fn save<T: Serialize>(path: &Path, records: &[T]) -> Result<(), StoreError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|source| StoreError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    records.serialize(&mut serializer)?;

    let write_err = |source: std::io::Error| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(&buf).map_err(write_err)?;
    tmp.persist(path).map_err(|e| {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to replace {}: {}", path.display(), e.error);
        write_err(e.error)
    })?;

    Ok(())
}
