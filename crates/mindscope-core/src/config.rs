use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{MindscopeError, Result};

/// Environment variable holding the generative API key.
pub const API_KEY_VAR: &str = "API_KEY";
/// Environment variable holding the cloud project id.
pub const PROJECT_ID_VAR: &str = "PROJECT_ID";
/// Environment variable holding the cloud project number.
pub const PROJECT_NUMBER_VAR: &str = "PROJECT_NUMBER";
/// Dotenv file consulted for secrets missing from the environment.
pub const DOTENV_FILE: &str = ".env";

/// Top-level configuration for the MindScope application.
///
/// Loaded from `~/.mindscope/config.toml` by default. Secrets are never read
/// from this file; see [`Secrets`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MindscopeConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub model: ModelConfig,
}

impl MindscopeConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: MindscopeConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3030,
        }
    }
}

/// Generative model endpoint settings.
///
/// Sampling parameters are fixed in `mindscope_chat::GenerationConfig`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Model name, e.g. `gemini-pro`.
    pub name: String,
    /// Base URL of the models collection.
    pub base_url: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "gemini-pro".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta/models".to_string(),
        }
    }
}

/// Secret values read at startup from the process environment and the
/// dotenv file.
#[derive(Clone)]
pub struct Secrets {
    /// Key for the generative API. Required.
    pub api_key: String,
    /// Cloud project id. Loaded but unused.
    pub project_id: Option<String>,
    /// Cloud project number. Loaded but unused.
    pub project_number: Option<String>,
}

impl Secrets {
    /// Read secrets from the process environment, falling back to the
    /// dotenv file at `path` for anything unset there.
    ///
    /// A missing file is not an error.
    pub fn from_env_and_file(path: &Path) -> Result<Self> {
        Self::from_file_with_env(path, |name| std::env::var(name).ok())
    }

    fn from_file_with_env<F>(path: &Path, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = read_dotenv(path)?;
        Self::from_lookup(|name| {
            env(name)
                .filter(|v| !v.is_empty())
                .or_else(|| file.get(name).cloned())
        })
    }

    /// Read secrets through an arbitrary lookup function.
    ///
    /// Empty values count as absent. A missing [`API_KEY_VAR`] is a
    /// [`MindscopeError::MissingSecret`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let api_key =
            read(API_KEY_VAR).ok_or_else(|| MindscopeError::MissingSecret(API_KEY_VAR.to_string()))?;

        Ok(Self {
            api_key,
            project_id: read(PROJECT_ID_VAR),
            project_number: read(PROJECT_NUMBER_VAR),
        })
    }
}

/// Parse a dotenv file into a map without touching the process environment.
fn read_dotenv(path: &Path) -> Result<HashMap<String, String>> {
    match dotenvy::from_path_iter(path) {
        Ok(iter) => {
            let values = iter
                .collect::<std::result::Result<HashMap<_, _>, _>>()
                .map_err(|e| {
                    MindscopeError::Config(format!("Invalid dotenv file {}: {}", path.display(), e))
                })?;
            debug!(path = %path.display(), count = values.len(), "Dotenv file loaded");
            Ok(values)
        }
        Err(e) if e.not_found() => Ok(HashMap::new()),
        Err(e) => Err(MindscopeError::Config(format!(
            "Failed to read dotenv file {}: {}",
            path.display(),
            e
        ))),
    }
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("api_key", &"<redacted>")
            .field("project_id", &self.project_id)
            .field("project_number", &self.project_number)
            .finish()
    }
}
