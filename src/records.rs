//! Persisted record shapes for the history and link collections.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::types::{PasswordEvaluation, PasswordRank, PasswordScore};

/// History entry written by the validated
/// [`add_password`](crate::PasswordStore::add_password) path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordRecord {
    pub password: String,
    pub score: PasswordScore,
    pub rank: PasswordRank,
    pub feedback: Vec<String>,
}

impl PasswordRecord {
    pub fn new(password: &SecretString, evaluation: PasswordEvaluation) -> Self {
        Self {
            password: password.expose_secret().to_string(),
            score: evaluation.score,
            rank: evaluation.rank(),
            feedback: evaluation.feedback,
        }
    }
}

/// History entry written by the lenient
/// [`save_password`](crate::PasswordStore::save_password) path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPassword {
    pub password: String,
    pub rank: PasswordRank,
}

/// One entry of the password history, in either stored shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HistoryEntry {
    Evaluated(PasswordRecord),
    Saved(SavedPassword),
}

impl HistoryEntry {
    pub fn password(&self) -> &str {
        match self {
            HistoryEntry::Evaluated(record) => &record.password,
            HistoryEntry::Saved(saved) => &saved.password,
        }
    }

    pub fn rank(&self) -> PasswordRank {
        match self {
            HistoryEntry::Evaluated(record) => record.rank,
            HistoryEntry::Saved(saved) => saved.rank,
        }
    }

    /// Replaces the password and its evaluation, keeping the entry's shape.
    pub(crate) fn replace(&mut self, password: &SecretString, evaluation: PasswordEvaluation) {
        match self {
            HistoryEntry::Evaluated(record) => *record = PasswordRecord::new(password, evaluation),
            HistoryEntry::Saved(saved) => {
                saved.password = password.expose_secret().to_string();
                saved.rank = evaluation.rank();
            }
        }
    }
}

impl From<PasswordRecord> for HistoryEntry {
    fn from(record: PasswordRecord) -> Self {
        HistoryEntry::Evaluated(record)
    }
}

impl From<SavedPassword> for HistoryEntry {
    fn from(saved: SavedPassword) -> Self {
        HistoryEntry::Saved(saved)
    }
}

/// A password stored for a (site, username) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub site: String,
    pub username: String,
    pub password: String,
    pub score: PasswordScore,
    pub rank: PasswordRank,
}

impl LinkRecord {
    pub fn new(
        site: &str,
        username: &str,
        password: &SecretString,
        evaluation: &PasswordEvaluation,
    ) -> Self {
        Self {
            site: site.to_string(),
            username: username.to_string(),
            password: password.expose_secret().to_string(),
            score: evaluation.score,
            rank: evaluation.rank(),
        }
    }

    pub fn matches(&self, site: &str, username: &str) -> bool {
        self.site == site && self.username == username
    }
}
