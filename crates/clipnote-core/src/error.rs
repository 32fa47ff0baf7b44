use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid capture structure: {0}")]
    InvalidStructure(String),

    #[error("Missing source: {0}")]
    MissingSource(String),
}

pub type Result<T> = std::result::Result<T, Error>;
