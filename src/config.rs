use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_CONFIG_PATH: &str = "config.toml";
const CONFIG_PATH_ENV: &str = "BIOSECURE_CONFIG";
const API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    server: ServerConfig,
    api: ApiConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct ServerConfig {
    bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:3000".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct ApiConfig {
    provider: String,
    key: Option<String>,
    url: String,
    model: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            provider: "openai".into(),
            key: None,
            url: "https://api.openai.com/v1".into(),
            model: "gpt-4o".into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub api_provider: String,
    /// `None` means demo mode.
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
}

impl Config {
    pub fn from_toml(content: &str, env_key: Option<String>) -> Result<Self> {
        let config_file: ConfigFile =
            toml::from_str(content).context("Failed to parse config file")?;

        let non_blank = |k: String| {
            let k = k.trim().to_string();
            (!k.is_empty()).then_some(k)
        };
        let api_key = env_key
            .and_then(non_blank)
            .or_else(|| config_file.api.key.and_then(non_blank));

        Ok(Self {
            bind_addr: config_file.server.bind,
            api_provider: config_file.api.provider,
            api_key,
            api_url: config_file.api.url,
            model: config_file.api.model,
        })
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let content = if Path::new(path).exists() {
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?
        } else {
            String::new()
        };

        Self::from_toml(&content, std::env::var(API_KEY_ENV).ok())
    }

    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
        Self::from_file(&path)
    }

    pub fn is_live(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_falls_back_to_demo_defaults() {
        let config = Config::from_toml("", None).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.api_provider, "openai");
        assert_eq!(config.model, "gpt-4o");
        assert!(!config.is_live());
    }

    #[test]
    fn blank_key_counts_as_absent() {
        let config = Config::from_toml("[api]\nkey = \"   \"\n", None).unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn env_key_overrides_file_key() {
        let toml = "[server]\nbind = \"127.0.0.1:8080\"\n\n[api]\nkey = \"from-file\"\nmodel = \"gpt-4o-mini\"\n";
        let config = Config::from_toml(toml, Some("from-env".into())).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("from-env"));
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.model, "gpt-4o-mini");
        assert!(config.is_live());
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(Config::from_toml("[api\nkey=", None).is_err());
    }
}
