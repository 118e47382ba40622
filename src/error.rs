use thiserror::Error;

use crate::types::TicketId;

#[derive(Error, Debug)]
pub enum TicketError {
    #[error("Please enter a ticket title")]
    EmptyTitle,

    #[error("invalid status '{0}'")]
    InvalidStatus(String),

    #[error("invalid rating {0}, expected a value from 1 to 5")]
    InvalidRating(u8),

    #[error("ticket {0} not found")]
    TicketNotFound(TicketId),

    #[error("no ticket ids left to assign")]
    IdsExhausted,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TicketError>;
