use thiserror::Error;

#[derive(Error, Debug)]
pub enum TidyError {
    #[error("Input is empty")]
    EmptyInput,
    #[error("Invalid CSS structure detected")]
    InvalidStylesheet { errors: Vec<String> },
    #[error("Invalid JSON at line {line}, column {column}: {message}")]
    JsonSyntax {
        line: usize,
        column: usize,
        message: String,
    },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, TidyError>;
