//! Settings for the items server. Configuration is read from an optional
//! `settings.toml` and from `ITEMS_APP__*` environment variables
//! (e.g. `ITEMS_APP__SERVER__PORT=4000`).
use std::{fs, path::Path};

use api_types::item::Item;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: String,
    pub port: u16,
    /// JSON file with initial content, shaped like `{"items": [...]}`.
    pub seed: Option<String>,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 3000,
            seed: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub server: Server,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("settings").required(false))
            .add_source(
                Environment::with_prefix("ITEMS_APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[derive(Debug, Deserialize)]
struct Seed {
    #[serde(default)]
    items: Vec<Item>,
}

/// Reads the seed file, if any.
pub fn load_seed(path: &str) -> Result<Vec<Item>, Box<dyn std::error::Error + Send + Sync>> {
    if !Path::new(path).exists() {
        tracing::warn!("seed file {path} not found, starting empty");
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    let seed: Seed = serde_json::from_str(&content)?;
    Ok(seed.items)
}
