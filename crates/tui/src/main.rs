mod app;
mod client;
mod config;
mod controller;
mod error;
mod ui;

use std::{fs::OpenOptions, sync::Mutex};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()?;
    init_logging(&config)?;

    tracing::info!("starting item manager against {}", config.base_url);
    let mut app = app::App::new(&config)?;
    app.run().await?;
    Ok(())
}

/// The terminal belongs to the interface, so logs go to a file.
fn init_logging(config: &AppConfig) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!("item_manager={}", config.log_level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| AppError::Logging(err.to_string()))
}
