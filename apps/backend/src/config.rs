//! Service configuration from environment variables.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Runtime configuration for the backend.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub seed_file: PathBuf,
    pub rules_file: PathBuf,
    /// Allowed CORS origins. Empty means permissive.
    pub allowed_origins: Vec<String>,
    pub seed_on_startup: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://vocab.db".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            seed_file: PathBuf::from("data/vocab.json"),
            rules_file: PathBuf::from("data/ruleSet.json"),
            allowed_origins: vec![
                "http://localhost:5173".to_string(),
                "http://localhost:5174".to_string(),
            ],
            seed_on_startup: true,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Recognised env vars (all optional):
    /// - DATABASE_URL: SQLite URL, created if missing
    /// - HOST / PORT: bind address
    /// - SEED_FILE: seed vocabulary document
    /// - RULES_FILE: rule table document
    /// - CORS_ORIGINS: comma-separated origins, or `*` for any
    /// - SEED_ON_STARTUP: seed an empty store at startup (true/false)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("DATABASE_URL") {
            config.database_url = url;
        }
        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: port.clone(),
            })?;
        }
        if let Some(path) = lookup("SEED_FILE") {
            config.seed_file = PathBuf::from(path);
        }
        if let Some(path) = lookup("RULES_FILE") {
            config.rules_file = PathBuf::from(path);
        }
        if let Some(origins) = lookup("CORS_ORIGINS") {
            config.allowed_origins = parse_origins(&origins);
        }
        if let Some(flag) = lookup("SEED_ON_STARTUP") {
            config.seed_on_startup = parse_bool(&flag).ok_or(ConfigError::Invalid {
                name: "SEED_ON_STARTUP",
                value: flag.clone(),
            })?;
        }

        Ok(config)
    }

    /// Address to bind the listener to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    if value.trim() == "*" {
        return Vec::new();
    }
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
