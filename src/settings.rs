//! Service configuration.
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then `USERD_*` environment variables (e.g. `USERD_SERVER__PORT=9090`).

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

/// Top-level service settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub greeting: GreetingSettings,
    /// Users inserted into the store at startup, in order. The store assigns
    /// their ids, so the first seed user gets id "1".
    pub seed_users: Vec<SeedUser>,
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Origins allowed by CORS. Empty means a permissive layer (demo default).
    pub allowed_origins: Vec<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            allowed_origins: Vec::new(),
        }
    }
}

/// Greeting catalog settings for the i18n endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GreetingSettings {
    /// Fallback message when no locale-specific entry matches.
    pub default: String,
    /// Locale -> message entries merged over the built-in catalog.
    pub locales: HashMap<String, String>,
}

impl Default for GreetingSettings {
    fn default() -> Self {
        Self {
            default: "Good Morning".to_string(),
            locales: HashMap::new(),
        }
    }
}

/// A user seeded into the store at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedUser {
    pub name: String,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
}

impl Settings {
    /// Load settings from an explicit config file, or `./userd.toml` when
    /// present, with `USERD_*` environment variables applied on top.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        builder = match path {
            Some(path) => builder.add_source(File::from(path).format(FileFormat::Toml)),
            None => builder.add_source(File::with_name("userd").required(false)),
        };

        builder = builder.add_source(Environment::with_prefix("USERD").separator("__"));

        let config = builder.build().context("loading configuration")?;
        config
            .try_deserialize()
            .context("deserializing configuration")
    }
}
