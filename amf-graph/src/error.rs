use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum GraphError {
    #[error("Invalid document root: expected an object, got {kind}")]
    InvalidDocument { kind: &'static str },

    #[error("Invalid @context: {message}")]
    InvalidContext { message: String },
}

pub type Result<T> = std::result::Result<T, GraphError>;
