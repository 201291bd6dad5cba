use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    /// The input stream ended while a value was still expected.
    #[error("Input closed")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, RosterError>;
