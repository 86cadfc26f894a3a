//! Store outcomes and errors.
//!
//! Every user-facing outcome has a fixed message: successes through
//! [`StoreOutcome`]'s `Display`, refusals through [`Rejection`]'s.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A request the store refused because of its dedup or validation rules.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("❌ This password was recently used. Choose another.")]
    RecentlyUsed,
    #[error("⚠️ This password already exists in your history!")]
    AlreadySaved,
    #[error("⚠️ This password already exists!")]
    AlreadyExists,
    #[error("❌ Password does not meet security criteria.")]
    InvalidPassword,
    #[error("❌ Error: A password is already stored for this site and username.")]
    DuplicateLink,
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Rejected(#[from] Rejection),
    #[error("Failed to create storage directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("No history entry at index {index} (history holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("History capacity must be at least 1")]
    ZeroCapacity,
}

impl StoreError {
    /// Returns the rejection if the store refused the request.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            StoreError::Rejected(rejection) => Some(*rejection),
            _ => None,
        }
    }
}

/// Why a collection file could not be loaded. Only surfaced by
/// [`try_load`](crate::persistence::try_load).
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Successful store operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOutcome {
    Unique,
    Added,
    Saved,
    Updated,
    Deleted,
    LinkStored,
}

impl StoreOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            StoreOutcome::Unique => "✅ Password is unique and not reused.",
            StoreOutcome::Added => "✅ Success: Password added successfully.",
            StoreOutcome::Saved => "✅ Password saved successfully!",
            StoreOutcome::Updated => "✅ Password updated!",
            StoreOutcome::Deleted => "✅ Password deleted!",
            StoreOutcome::LinkStored => "✅ Success: Password saved for the site.",
        }
    }
}

impl fmt::Display for StoreOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

pub type StoreResult = Result<StoreOutcome, StoreError>;

/// The text to show for a store result, success or not.
pub fn outcome_message(result: &StoreResult) -> String {
    match result {
        Ok(outcome) => outcome.to_string(),
        Err(err) => err.to_string(),
    }
}
