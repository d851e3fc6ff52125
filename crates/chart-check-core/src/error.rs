use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid repository '{input}': {reason}")]
    InvalidRepository { input: String, reason: &'static str },
}

pub type Result<T> = std::result::Result<T, CoreError>;
