use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/item_manager.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    /// Path of the collection resource, relative to `base_url`.
    pub collection: String,
    pub log_file: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            collection: "items".to_string(),
            log_file: "item_manager.log".to_string(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "item_manager", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override base URL (e.g. http://localhost:3000).
    #[arg(long)]
    base_url: Option<String>,
    /// Override collection path (e.g. items).
    #[arg(long)]
    collection: Option<String>,
    /// Override log file path.
    #[arg(long)]
    log_file: Option<String>,
    /// Override log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    load_from(Args::parse())
}

fn load_from(args: Args) -> Result<AppConfig> {
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("ITEM_MANAGER"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(base_url) = args.base_url {
        settings.base_url = base_url;
    }
    if let Some(collection) = args.collection {
        settings.collection = collection;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = log_file;
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }

    Ok(settings)
}
