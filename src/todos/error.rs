use thiserror::Error;

use crate::model::IdArg;

#[derive(Error, Debug)]
pub enum TodoError {
    /// Malformed command arguments. The message is shown to the user verbatim.
    #[error("{0}")]
    Invalid(String),

    #[error("Todo with id: {id}, is not found!")]
    NotFound { id: IdArg },

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("No todo ids left to assign")]
    IdsExhausted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    /// The environment gives no place for config and data.
    #[error("Config error: {0}")]
    Config(String),
}

impl TodoError {
    pub fn invalid(message: impl Into<String>) -> Self {
        TodoError::Invalid(message.into())
    }

    pub fn not_found(id: impl Into<IdArg>) -> Self {
        TodoError::NotFound { id: id.into() }
    }
}

pub type Result<T> = std::result::Result<T, TodoError>;
