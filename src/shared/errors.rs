use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Permission file error: {0}")]
    PermissionFile(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown permission profile: {0}")]
    UnknownProfile(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
