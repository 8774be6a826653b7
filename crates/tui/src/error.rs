use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("invalid endpoint: {0}")]
    Endpoint(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("terminal error: {0}")]
    Terminal(String),
}
