//! Runtime configuration for `pathforge-server`.
//!
//! Settings live in `pathforge.toml` (or the file named by
//! `PATHFORGE_CONFIG`); a handful of environment variables override them so
//! container deployments need no file at all.

use std::path::Path;

use pathforge_core::DEFAULT_MAX_PATH_LEN;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "pathforge.toml";

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "PATHFORGE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Top-level configuration (persisted as `pathforge.toml`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PathforgeConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub upstream: UpstreamSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Longest request path (in characters) the generate route accepts.
    #[serde(default = "default_max_path_len")]
    pub max_path_len: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            max_path_len: default_max_path_len(),
        }
    }
}

/// Chat-completion endpoint and the fixed request parameters sent to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpstreamSettings {
    /// Base URL; `/chat/completions` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_top_p")]
    pub top_p: f32,
    #[serde(default)]
    pub presence_penalty: f32,
    #[serde(default)]
    pub frequency_penalty: f32,
    #[serde(default = "default_stop")]
    pub stop: Vec<String>,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            system_prompt: default_system_prompt(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            presence_penalty: 0.0,
            frequency_penalty: 0.0,
            stop: default_stop(),
        }
    }
}

impl PathforgeConfig {
    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load `explicit` if given (it must exist), otherwise `pathforge.toml`
    /// when present, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(CONFIG_FILE_NAME);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<bool, ConfigError> {
        self.apply_overrides_from(|var| std::env::var(var).ok())
    }

    /// Apply overrides from `lookup`. Empty values are ignored.
    /// Returns true when any field was updated.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<bool, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut changed = false;

        if let Some(port) = get("PORT") {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: "PORT",
                value: port.clone(),
            })?;
            changed = true;
        }
        if let Some(bind) = get("PATHFORGE_BIND") {
            self.server.bind = bind;
            changed = true;
        }
        if let Some(url) = get("PATHFORGE_UPSTREAM_URL") {
            self.upstream.base_url = url;
            changed = true;
        }
        if let Some(model) = get("PATHFORGE_MODEL") {
            self.upstream.model = model;
            changed = true;
        }

        Ok(changed)
    }
}

// ── Serde default functions ─────────────────────────────────────────────

fn default_bind() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    3000
}
fn default_max_path_len() -> usize {
    DEFAULT_MAX_PATH_LEN
}
fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}
fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}
fn default_system_prompt() -> String {
    "You are an expert developer that creates files. Output only the content of the file."
        .to_string()
}
fn default_temperature() -> f32 {
    0.7
}
fn default_top_p() -> f32 {
    1.0
}
fn default_stop() -> Vec<String> {
    vec!["</html>".to_string()]
}
