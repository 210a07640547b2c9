//! Editor configuration from environment and command line

use std::path::PathBuf;

use crate::editor::EditorOptions;
use crate::error::{ModelError, ModelResult};
use crate::traits::UserIdentity;

pub const DATA_DIR_VAR: &str = "HYPERVIDEO_DATA_DIR";
pub const SERVER_URL_VAR: &str = "HYPERVIDEO_SERVER_URL";
pub const USER_NAME_VAR: &str = "HYPERVIDEO_USER_NAME";
pub const USER_ID_VAR: &str = "HYPERVIDEO_USER_ID";
pub const EMBEDDED_VAR: &str = "HYPERVIDEO_EMBEDDED";
pub const LOG_LEVEL_VAR: &str = "HYPERVIDEO_LOG_LEVEL";

const DEFAULT_DATA_DIR: &str = "./_data";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// Root of the file backend
    pub data_dir: PathBuf,
    /// When set, the HTTP backend is used instead of files
    pub server_url: Option<String>,
    pub user: Option<UserIdentity>,
    pub embedded: bool,
    pub log_level: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            server_url: None,
            user: None,
            embedded: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Values given on the command line; each one beats its environment variable
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub data_dir: Option<PathBuf>,
    pub server_url: Option<String>,
    pub user_name: Option<String>,
    pub user_id: Option<String>,
    pub embedded: bool,
    pub log_level: Option<String>,
}

fn parse_flag(name: &str, value: &str) -> ModelResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ModelError::config(format!("{name} must be a boolean, got '{other}'"))),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl EditorConfig {
    /// Load from the process environment, reading `.env` first if present
    pub fn from_env() -> ModelResult<Self> {
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ModelResult<Self> {
        let defaults = Self::default();
        let user = non_empty(lookup(USER_NAME_VAR)).map(|name| UserIdentity {
            name,
            id: lookup(USER_ID_VAR).unwrap_or_default(),
        });
        let embedded = match lookup(EMBEDDED_VAR) {
            Some(value) => parse_flag(EMBEDDED_VAR, &value)?,
            None => defaults.embedded,
        };

        Ok(Self {
            data_dir: non_empty(lookup(DATA_DIR_VAR)).map(PathBuf::from).unwrap_or(defaults.data_dir),
            server_url: non_empty(lookup(SERVER_URL_VAR)),
            user,
            embedded,
            log_level: non_empty(lookup(LOG_LEVEL_VAR)).unwrap_or(defaults.log_level),
        })
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(data_dir) = overrides.data_dir {
            self.data_dir = data_dir;
        }
        if let Some(server_url) = non_empty(overrides.server_url) {
            self.server_url = Some(server_url);
        }
        if let Some(name) = non_empty(overrides.user_name) {
            let id = overrides
                .user_id
                .or_else(|| self.user.as_ref().map(|user| user.id.clone()))
                .unwrap_or_default();
            self.user = Some(UserIdentity { name, id });
        } else if let (Some(user), Some(id)) = (self.user.as_mut(), overrides.user_id) {
            user.id = id;
        }
        if overrides.embedded {
            self.embedded = true;
        }
        if let Some(log_level) = non_empty(overrides.log_level) {
            self.log_level = log_level;
        }
        self
    }

    pub fn editor_options(&self) -> EditorOptions {
        EditorOptions { embedded: self.embedded }
    }
}
