//! Application configuration domain model

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// The menu document the original deployment serves.
pub const DEFAULT_MENU_ENDPOINT: &str =
    "https://raw.githubusercontent.com/Meta-Mobile-Developer-PC/Working-With-Data-API/main/menu.json";

/// Application configuration
///
/// Everything the assembly layer needs to build the adapters. Shells
/// usually construct this in code; `load_or_default` covers deployments
/// that ship a config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Remote endpoint serving the menu document.
    pub menu_endpoint: String,

    /// Override for the application data directory (menu database and
    /// profile file live there).
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Timeout for the menu fetch, in seconds. `None` means the request
    /// may wait indefinitely, which matches the historical behavior.
    #[serde(default)]
    pub fetch_timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            menu_endpoint: DEFAULT_MENU_ENDPOINT.to_string(),
            data_dir: None,
            fetch_timeout_secs: None,
        }
    }
}

impl AppConfig {
    /// Read a JSON config file, falling back to defaults when the file is
    /// absent. A file that exists but does not parse is an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config failed: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("parse config failed: {}", path.display()))
    }
}
