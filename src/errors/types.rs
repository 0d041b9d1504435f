use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlagcheckError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Input too large: {0}")]
    InputTooLarge(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PlagcheckError {
    /// Process exit code used by the binary.
    pub fn exit_code(&self) -> i32 {
        match self {
            PlagcheckError::Config(_) | PlagcheckError::Yaml(_) => 2,
            PlagcheckError::Io(_) => 3,
            PlagcheckError::InvalidInput(_) | PlagcheckError::InputTooLarge(_) => 4,
            _ => 1,
        }
    }
}
