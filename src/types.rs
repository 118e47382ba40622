use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TicketError;

pub const CONFIG_DIR: &str = ".ticketdesk";

/// Ticket identifier, unique within a store and never reused
pub type TicketId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TicketStatus {
    #[default]
    #[serde(rename = "Created")]
    Created,
    #[serde(rename = "Under Assistance")]
    UnderAssistance,
    #[serde(rename = "Completed")]
    Completed,
}

impl TicketStatus {
    /// All statuses in picker order
    pub const ALL: [TicketStatus; 3] = [
        TicketStatus::Created,
        TicketStatus::UnderAssistance,
        TicketStatus::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Created => "Created",
            TicketStatus::UnderAssistance => "Under Assistance",
            TicketStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TicketStatus {
    type Err = TicketError;

    /// Accepts the display label in any case, with `_` or `-` standing in for the space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "created" => Ok(TicketStatus::Created),
            "under assistance" => Ok(TicketStatus::UnderAssistance),
            "completed" => Ok(TicketStatus::Completed),
            _ => Err(TicketError::InvalidStatus(s.to_string())),
        }
    }
}

pub const VALID_STATUSES: &[&str] = &["Created", "Under Assistance", "Completed"];

/// Customer satisfaction rating from 1 to 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, TicketError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Rating(value))
        } else {
            Err(TicketError::InvalidRating(value))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = TicketError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// A committed support ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub rating: Option<Rating>,
}

/// Unsaved input for a new ticket
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
}

impl Draft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        status: TicketStatus,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status,
        }
    }

    /// Whether every field still holds its default value
    pub fn is_pristine(&self) -> bool {
        *self == Draft::default()
    }
}
