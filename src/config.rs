use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::store::txt::DEFAULT_STORAGE_PATH;

pub const STORAGE_PATH_KEY: &str = "ADDRESSBOOK_PATH";
pub const LOG_FILTER_KEY: &str = "ADDRESSBOOK_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub storage_path: PathBuf,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Reads settings from the process environment, after loading `.env` if present.
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            storage_path: lookup(STORAGE_PATH_KEY)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_path),
            log_filter: lookup(LOG_FILTER_KEY)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_filter),
        }
    }

    pub fn with_storage_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.storage_path = path;
        }
        self
    }
}
