//! Password history and site links backed by JSON files.

use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};

use crate::config::StoreConfig;
use crate::error::{Rejection, StoreError, StoreOutcome, StoreResult};
use crate::evaluator::evaluate_password_strength;
use crate::persistence::{load, save};
use crate::records::{HistoryEntry, LinkRecord, PasswordRecord, SavedPassword};
use crate::validator::is_valid_password;

/// Owns the history and link collections under one storage root.
///
/// Every operation is a blocking read-modify-write of a whole file. A single
/// writer per root is assumed.
#[derive(Debug, Clone)]
pub struct PasswordStore {
    config: StoreConfig,
    history_path: PathBuf,
    links_path: PathBuf,
}

impl PasswordStore {
    /// Opens a store, creating the storage directory if needed.
    ///
    /// Fails with [`StoreError::ZeroCapacity`] when the history capacity is 0.
    pub fn open(config: StoreConfig) -> Result<Self, StoreError> {
        if config.history_capacity == 0 {
            return Err(StoreError::ZeroCapacity);
        }

        std::fs::create_dir_all(&config.root).map_err(|source| StoreError::CreateDir {
            path: config.root.clone(),
            source,
        })?;

        #[cfg(feature = "tracing")]
        tracing::info!("Password store opened at {}", config.root.display());

        Ok(Self {
            history_path: config.history_path(),
            links_path: config.links_path(),
            config,
        })
    }

    /// Opens a store rooted at `PWD_STORAGE_DIR` (default `./storage`).
    pub fn from_env() -> Result<Self, StoreError> {
        Self::open(StoreConfig::from_env())
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn load_history(&self) -> Vec<HistoryEntry> {
        load(&self.history_path)
    }

    /// Replaces the whole history with `entries`, as given.
    pub fn save_history(&self, entries: &[HistoryEntry]) -> Result<(), StoreError> {
        save(&self.history_path, entries)
    }

    /// Current history, oldest first.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.load_history()
    }

    /// Checks the password against every history entry (exact match).
    pub fn check_repeated(&self, password: &SecretString) -> Result<StoreOutcome, Rejection> {
        if contains_password(&self.load_history(), password) {
            return Err(Rejection::RecentlyUsed);
        }
        Ok(StoreOutcome::Unique)
    }

    /// Validated path: rejects reused or invalid passwords, then records the
    /// password with its full evaluation.
    pub fn add_password(&self, password: &SecretString) -> StoreResult {
        let mut history = self.load_history();

        if contains_password(&history, password) {
            return Err(Rejection::RecentlyUsed.into());
        }
        if !is_valid_password(password) {
            return Err(Rejection::InvalidPassword.into());
        }

        let record = PasswordRecord::new(password, evaluate_password_strength(password));
        self.push_history(&mut history, record.into())?;
        Ok(StoreOutcome::Added)
    }

    /// Lenient path: skips validation, rejects only reused passwords, and
    /// records the password with its rank.
    ///
    /// The rank is written as its label (`"Strong"`), also when the file was
    /// written by older tools that stored the numeric score under `rank`.
    pub fn save_password(&self, password: &SecretString) -> StoreResult {
        let mut history = self.load_history();

        if contains_password(&history, password) {
            return Err(Rejection::AlreadySaved.into());
        }

        let saved = SavedPassword {
            password: password.expose_secret().to_string(),
            rank: evaluate_password_strength(password).rank(),
        };
        self.push_history(&mut history, saved.into())?;
        Ok(StoreOutcome::Saved)
    }

    /// Replaces the password at `index` and re-evaluates it.
    pub fn edit_password(&self, index: usize, password: &SecretString) -> StoreResult {
        let mut history = self.load_history();
        let len = history.len();

        if index >= len {
            return Err(StoreError::IndexOutOfRange { index, len });
        }
        if contains_password(&history, password) {
            return Err(Rejection::AlreadyExists.into());
        }

        history[index].replace(password, evaluate_password_strength(password));
        self.save_history(&history)?;

        #[cfg(feature = "tracing")]
        tracing::debug!("History entry {} updated", index);

        Ok(StoreOutcome::Updated)
    }

    pub fn delete_password(&self, index: usize) -> StoreResult {
        let mut history = self.load_history();
        let len = history.len();

        if index >= len {
            return Err(StoreError::IndexOutOfRange { index, len });
        }

        history.remove(index);
        self.save_history(&history)?;

        #[cfg(feature = "tracing")]
        tracing::debug!("History entry {} deleted, {} left", index, history.len());

        Ok(StoreOutcome::Deleted)
    }

    /// Stores a password for a (site, username) pair. The password is not
    /// validated; an existing pair is never overwritten.
    pub fn store_link(&self, site: &str, username: &str, password: &SecretString) -> StoreResult {
        let mut links = self.get_links();

        if links.iter().any(|link| link.matches(site, username)) {
            return Err(Rejection::DuplicateLink.into());
        }

        let evaluation = evaluate_password_strength(password);
        links.push(LinkRecord::new(site, username, password, &evaluation));
        save(&self.links_path, &links)?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Link stored for site {}, {} links total", site, links.len());

        Ok(StoreOutcome::LinkStored)
    }

    pub fn get_links(&self) -> Vec<LinkRecord> {
        load(&self.links_path)
    }

    /// Appends `entry`, evicts the oldest entries over capacity, persists.
    fn push_history(
        &self,
        history: &mut Vec<HistoryEntry>,
        entry: HistoryEntry,
    ) -> Result<(), StoreError> {
        history.push(entry);

        let excess = history.len().saturating_sub(self.config.history_capacity);
        if excess > 0 {
            history.drain(..excess);
        }

        self.save_history(history)?;

        #[cfg(feature = "tracing")]
        tracing::debug!("History saved, {} entries (evicted {})", history.len(), excess);

        Ok(())
    }
}

fn contains_password(history: &[HistoryEntry], password: &SecretString) -> bool {
    let pwd = password.expose_secret();
    history.iter().any(|entry| entry.password() == pwd)
}
