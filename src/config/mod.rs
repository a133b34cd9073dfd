//! YAML configuration at `~/.sprinttracker/sprinttracker.conf`.
//!
//! Every field has a default, so a missing file (or a file listing only a
//! few keys) is fine. A file that does not parse is an error.

use crate::db::{ConnectSettings, StoreOpener};
use crate::errors::{AppError, AppResult, ConnectionError};
use crate::store::{ServiceAccountKey, SheetsStore, TableStore};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_SPREADSHEET_NAME: &str = crate::db::connector::DEFAULT_SPREADSHEET_NAME;

/// Keys a complete configuration file spells out.
pub const FIELDS: [&str; 6] = [
    "spreadsheet_name",
    "share_with",
    "credentials_file",
    "recent_updates_limit",
    "fallback_projects",
    "request_timeout_secs",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub spreadsheet_name: String,
    pub share_with: Option<String>,
    pub credentials_file: Option<String>,
    pub recent_updates_limit: usize,
    pub fallback_projects: Vec<String>,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spreadsheet_name: DEFAULT_SPREADSHEET_NAME.to_string(),
            share_with: None,
            credentials_file: None,
            recent_updates_limit: crate::core::listing::DEFAULT_RECENT_UPDATES,
            fallback_projects: vec![
                "Beehiiv + TinyEmail".to_string(),
                "Slack AI Assistant".to_string(),
            ],
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".sprinttracker")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("sprinttracker.conf")
    }

    /// `--config` when given, the standard location otherwise.
    pub fn resolve_path(custom: Option<&Path>) -> PathBuf {
        custom.map(Path::to_path_buf).unwrap_or_else(Self::config_file)
    }

    pub fn load(custom: Option<&Path>) -> AppResult<Self> {
        let path = Self::resolve_path(custom);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Keys from `FIELDS` the file does not mention.
    pub fn missing_fields(content: &str) -> AppResult<Vec<&'static str>> {
        let value: serde_yaml::Value = if content.trim().is_empty() {
            serde_yaml::Value::Null
        } else {
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?
        };

        let present = |key: &str| {
            value
                .as_mapping()
                .is_some_and(|m| m.contains_key(key))
        };
        Ok(FIELDS.into_iter().filter(|k| !present(k)).collect())
    }

    pub fn connect_settings(&self) -> ConnectSettings {
        ConnectSettings {
            spreadsheet_name: self.spreadsheet_name.clone(),
            share_with: self
                .share_with
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Opener that authenticates against Google with the discovered key.
    pub fn sheets_opener(&self) -> StoreOpener {
        let credentials_file = self.credentials_file.clone();
        let timeout = self.timeout();
        Box::new(move || {
            let key = ServiceAccountKey::discover(credentials_file.as_deref())?
                .ok_or(ConnectionError::CredentialsMissing)?;
            tracing::debug!(account = %key.client_email, "using service account");
            Ok(Box::new(SheetsStore::new(key, timeout)) as Box<dyn TableStore>)
        })
    }
}
