//! History settings.

use promptcraft_error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Maximum number of records kept in the local history file.
pub const LOCAL_HISTORY_LIMIT: usize = 20;

/// Number of records shown in a live history list.
pub const DEFAULT_FEED_CAPACITY: usize = 5;

/// `[history]` configuration table.
///
/// # Examples
///
/// ```
/// use promptcraft_history::{HistoryConfig, LOCAL_HISTORY_LIMIT};
///
/// let config: HistoryConfig = serde_json::from_str(r#"{"path": "/tmp/h.json"}"#).unwrap();
/// assert_eq!(*config.limit(), LOCAL_HISTORY_LIMIT);
/// assert_eq!(config.resolved_path().unwrap().to_str(), Some("/tmp/h.json"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(default)]
pub struct HistoryConfig {
    /// History file; defaults to `<data_dir>/promptcraft/history.json`
    path: Option<PathBuf>,
    /// Maximum stored records
    limit: usize,
    /// Records shown in a live list
    feed_capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: None,
            limit: LOCAL_HISTORY_LIMIT,
            feed_capacity: DEFAULT_FEED_CAPACITY,
        }
    }
}

impl HistoryConfig {
    /// Configuration pointing at an explicit file.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// The configured file, or the platform data directory default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when no path is configured and the platform
    /// has no data directory.
    pub fn resolved_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join("promptcraft").join("history.json"))
            .ok_or_else(|| ConfigError::new("Could not determine a data directory for history"))
    }
}
