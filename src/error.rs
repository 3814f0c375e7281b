// src/error.rs

use thiserror::Error;

/// Failures of the chat pipeline
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChatError {
    /// Blank or whitespace-only message, rejected before scoring
    #[error("Message cannot be empty")]
    EmptyInput,

    /// Anything unexpected while scoring or selecting a response
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ChatResult<T> = Result<T, ChatError>;
