use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Dotenv error: {0}")]
    Dotenv(#[from] dotenvy::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Invalid network: {0}")]
    InvalidNetwork(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
