//! Storage configuration.

use std::path::{Path, PathBuf};

/// Environment variable overriding the storage directory.
pub const STORAGE_DIR_ENV: &str = "PWD_STORAGE_DIR";

pub const DEFAULT_STORAGE_DIR: &str = "./storage";
pub const DEFAULT_HISTORY_FILE: &str = "passwords.json";
pub const DEFAULT_LINKS_FILE: &str = "links.json";
pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

/// Where a [`PasswordStore`](crate::PasswordStore) keeps its collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub root: PathBuf,
    pub history_file: String,
    pub links_file: String,
    /// Most entries the history keeps; older ones are evicted first.
    /// Must be at least 1.
    pub history_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_STORAGE_DIR),
            history_file: DEFAULT_HISTORY_FILE.to_string(),
            links_file: DEFAULT_LINKS_FILE.to_string(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl StoreConfig {
    /// Default configuration with the root taken from `PWD_STORAGE_DIR`
    /// when set.
    pub fn from_env() -> Self {
        Self::default().with_root(get_storage_dir())
    }

    pub fn with_root<P: AsRef<Path>>(mut self, root: P) -> Self {
        self.root = root.as_ref().to_path_buf();
        self
    }

    /// Sets the history capacity. A store refuses to open with 0.
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    pub fn history_path(&self) -> PathBuf {
        self.root.join(&self.history_file)
    }

    pub fn links_path(&self) -> PathBuf {
        self.root.join(&self.links_file)
    }
}

/// Returns the storage directory.
///
/// Priority:
/// 1. Environment variable `PWD_STORAGE_DIR`
/// 2. Default path `./storage`
pub fn get_storage_dir() -> PathBuf {
    std::env::var(STORAGE_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORAGE_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: env-mutating tests run under #[serial]
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: env-mutating tests run under #[serial]
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    #[serial]
    fn test_get_storage_dir_default() {
        remove_env(STORAGE_DIR_ENV);

        assert_eq!(get_storage_dir(), PathBuf::from("./storage"));
    }

    #[test]
    #[serial]
    fn test_get_storage_dir_from_env() {
        let custom_path = "/custom/path/storage";
        set_env(STORAGE_DIR_ENV, custom_path);

        let config = StoreConfig::from_env();
        assert_eq!(config.root, PathBuf::from(custom_path));
        assert_eq!(
            config.history_path(),
            PathBuf::from("/custom/path/storage/passwords.json")
        );

        remove_env(STORAGE_DIR_ENV);
    }

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.history_capacity, 5);
        assert_eq!(config.links_path(), PathBuf::from("./storage/links.json"));
    }

    #[test]
    fn test_builders() {
        let config = StoreConfig::default()
            .with_root("/tmp/pwd")
            .with_history_capacity(2);
        assert_eq!(config.root, PathBuf::from("/tmp/pwd"));
        assert_eq!(config.history_capacity, 2);
    }
}
