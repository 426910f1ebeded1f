/// Shared error type used across the cadence crates.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid edit: {0}")]
    InvalidEdit(String),
}

pub type Result<T> = std::result::Result<T, Error>;
