// src/core/config_manager.rs
//! Process-wide configuration, loaded once at startup

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

use super::service_client::DEFAULT_TIMEOUT_SECS;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_RAPID_API_HOST: &str = "linkedin-jobs-search.p.rapidapi.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-pro";
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_HIRING_INTENTS: [&str; 3] =
    ["women hiring", "diversity hiring", "female candidates"];

const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: String,
    pub server: ServerSettings,
    pub jobs: JobsConfig,
    pub chat: ChatConfig,
    pub http: HttpSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct JobsConfig {
    /// Provider credential. `None` is a supported mode: the jobs endpoint
    /// serves the fallback set.
    pub api_key: Option<String>,
    pub api_host: String,
    pub endpoint: String,
    pub hiring_intents: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_url: String,
}

#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub timeout_seconds: u64,
}

/// Non-secret defaults that may come from `config.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileSettings {
    pub port: Option<u16>,
    pub rapid_api_host: Option<String>,
    pub jobs_api_url: Option<String>,
    pub hiring_intents: Option<Vec<String>>,
    pub gemini_model: Option<String>,
    pub gemini_api_url: Option<String>,
    pub http_timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: FileSettings,
    #[serde(default)]
    production: FileSettings,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::from_sources("local", |_| None, FileSettings::default())
    }
}

impl ConfigManager {
    /// Load configuration from `config.yaml` (optional) and the environment.
    pub fn load() -> Result<Self> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "local".to_string());
        info!("Loading configuration for environment: {}", environment);

        let file_settings = Self::load_file(Path::new(CONFIG_FILE), &environment)?;
        let config = Self::from_sources(&environment, |key| std::env::var(key).ok(), file_settings);

        if config.jobs.api_key.is_none() {
            warn!("RAPID_API_KEY not set, jobs endpoint will serve fallback data");
        }
        if config.chat.api_key.is_none() {
            warn!("GEMINI_API_KEY not set, chat endpoint will serve canned replies");
        }

        Ok(config)
    }

    fn load_file(path: &Path, environment: &str) -> Result<FileSettings> {
        if !path.exists() {
            return Ok(FileSettings::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse_file(&content, environment)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    fn parse_file(content: &str, environment: &str) -> Result<FileSettings> {
        let file: ConfigFile = serde_yaml::from_str(content)?;
        Ok(match environment {
            "production" => file.production,
            _ => file.local,
        })
    }

    /// Environment values win over file values, file values over built-in defaults.
    pub fn from_sources<F>(environment: &str, env: F, file: FileSettings) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| env(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = var("ROCKET_PORT")
            .and_then(|p| match p.parse::<u16>() {
                Ok(port) => Some(port),
                Err(_) => {
                    warn!("Ignoring invalid ROCKET_PORT value: {}", p);
                    None
                }
            })
            .or(file.port)
            .unwrap_or(DEFAULT_PORT);

        let api_host = var("RAPID_API_HOST")
            .or(file.rapid_api_host)
            .unwrap_or_else(|| DEFAULT_RAPID_API_HOST.to_string());

        let endpoint = var("JOBS_API_URL")
            .or(file.jobs_api_url)
            .unwrap_or_else(|| format!("https://{}/search", api_host));

        let hiring_intents = file
            .hiring_intents
            .filter(|intents| !intents.is_empty())
            .unwrap_or_else(|| DEFAULT_HIRING_INTENTS.iter().map(|s| s.to_string()).collect());

        let timeout_seconds = var("HTTP_TIMEOUT_SECS")
            .and_then(|t| t.parse::<u64>().ok())
            .or(file.http_timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            environment: environment.to_string(),
            server: ServerSettings { port },
            jobs: JobsConfig {
                api_key: var("RAPID_API_KEY"),
                api_host,
                endpoint,
                hiring_intents,
            },
            chat: ChatConfig {
                api_key: var("GEMINI_API_KEY"),
                model: var("GEMINI_MODEL")
                    .or(file.gemini_model)
                    .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
                api_url: var("GEMINI_API_URL")
                    .or(file.gemini_api_url)
                    .unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string()),
            },
            http: HttpSettings { timeout_seconds },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_credentials() {
        let config = ConfigManager::default();
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert!(config.jobs.api_key.is_none());
        assert!(config.chat.api_key.is_none());
        assert_eq!(
            config.jobs.endpoint,
            "https://linkedin-jobs-search.p.rapidapi.com/search"
        );
        assert_eq!(config.jobs.hiring_intents.len(), 3);
        assert_eq!(config.http.timeout_seconds, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_blank_credential_counts_as_absent() {
        let config =
            ConfigManager::from_sources("local", lookup(&[("RAPID_API_KEY", "   ")]), FileSettings::default());
        assert!(config.jobs.api_key.is_none());
    }

    #[test]
    fn test_env_overrides_file() {
        let file = FileSettings {
            port: Some(9000),
            gemini_model: Some("from-file".to_string()),
            ..Default::default()
        };
        let config = ConfigManager::from_sources(
            "local",
            lookup(&[("ROCKET_PORT", "7001"), ("RAPID_API_KEY", "secret")]),
            file,
        );
        assert_eq!(config.server.port, 7001);
        assert_eq!(config.chat.model, "from-file");
        assert_eq!(config.jobs.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_invalid_port_falls_back_to_default() {
        let config =
            ConfigManager::from_sources("local", lookup(&[("ROCKET_PORT", "abc")]), FileSettings::default());
        assert_eq!(config.server.port, DEFAULT_PORT);
    }

    #[test]
    fn test_parse_file_selects_environment_section() {
        let yaml = r#"
local:
  port: 8100
production:
  port: 80
  hiring_intents: ["women hiring", "returnship"]
"#;
        let local = ConfigManager::parse_file(yaml, "local").unwrap();
        assert_eq!(local.port, Some(8100));
        assert!(local.hiring_intents.is_none());

        let prod = ConfigManager::parse_file(yaml, "production").unwrap();
        assert_eq!(prod.port, Some(80));
        assert_eq!(prod.hiring_intents.unwrap().len(), 2);
    }

    #[test]
    fn test_malformed_file_is_error() {
        assert!(ConfigManager::parse_file("local: [not, a, map", "local").is_err());
    }
}
