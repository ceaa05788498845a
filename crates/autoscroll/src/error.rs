use thiserror::Error;

#[derive(Error, Debug)]
pub enum AutoScrollError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Terminal error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, AutoScrollError>;
