use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreferableError {
    #[error("Unknown preference: {0}")]
    UnknownPreference(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),
}

pub type Result<T> = std::result::Result<T, PreferableError>;
