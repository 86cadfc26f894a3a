//! Password strength evaluation with a bounded password history
//!
//! This library scores passwords against four rules (length, letter case
//! mix, digit, special character) and keeps two JSON-backed collections:
//! a short history of recent passwords and a table of passwords stored per
//! site and username.
//!
//! Passwords are persisted in plaintext. This is not a secret store.
//!
//! # Storage format
//!
//! `passwords.json` holds entries shaped either `{password, score, rank,
//! feedback}` or `{password, rank}`; `links.json` holds `{site, username,
//! password, score, rank}`. `rank` is always written as a label such as
//! `"Strong"`. Older history files that stored the numeric score under
//! `rank` still load, and are rewritten with labels on the next save.
//!
//! # Features
//!
//! - `async` (default): Enables cancellable and channel-based evaluation
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_STORAGE_DIR`: Directory holding `passwords.json` and `links.json`
//!   (default: `./storage`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_history::{evaluate_password_strength, outcome_message, PasswordStore};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Secure@123".to_string().into());
//!
//! let evaluation = evaluate_password_strength(&password);
//! println!("Score: {}", evaluation.score);
//! println!("Rank: {}", evaluation.rank());
//!
//! let store = PasswordStore::from_env().expect("Failed to open storage");
//! println!("{}", outcome_message(&store.add_password(&password)));
//! println!(
//!     "{}",
//!     outcome_message(&store.store_link("https://example.com", "user123", &password))
//! );
//! println!("{:?}", store.get_links());
//! ```

// Internal modules
mod config;
mod error;
mod evaluator;
mod records;
mod sections;
mod store;
mod types;
mod validator;

pub mod persistence;

// Public API
pub use config::{StoreConfig, get_storage_dir, STORAGE_DIR_ENV};
pub use error::{outcome_message, LoadError, Rejection, StoreError, StoreOutcome, StoreResult};
pub use evaluator::evaluate_password_strength;
pub use records::{HistoryEntry, LinkRecord, PasswordRecord, SavedPassword};
pub use sections::EVALUATOR_SPECIAL_CHARS;
pub use store::PasswordStore;
pub use types::{PasswordEvaluation, PasswordRank, PasswordScore, MAX_SCORE};
pub use validator::{is_valid_password, VALIDATOR_SPECIAL_CHARS};

#[cfg(feature = "async")]
pub use evaluator::{
    evaluate_password_strength_cancellable, evaluate_password_strength_tx, EVALUATION_DEBOUNCE,
};
