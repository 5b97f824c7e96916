use thiserror::Error;

#[derive(Error, Debug)]
pub enum GopError {
    #[error("Shape mismatch: cannot broadcast {lhs:?} with {rhs:?}")]
    ShapeMismatch { lhs: Vec<usize>, rhs: Vec<usize> },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("NPY error: {0}")]
    Npy(String),
}

pub type GopResult<T> = Result<T, GopError>;
