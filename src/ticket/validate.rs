//! Shared validation rules for ticket input.
//!
//! Every path that commits a title (store add, store update, form submit)
//! goes through these checks so the rules cannot drift apart.

use crate::error::{Result, TicketError};

/// Validates a ticket title.
///
/// The title must contain at least one non-whitespace character. The title
/// itself is stored as entered; only the trimmed view is judged.
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(TicketError::EmptyTitle);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title_accepts_text() {
        assert!(validate_title("Fix login").is_ok());
        assert!(validate_title("  padded  ").is_ok());
    }

    #[test]
    fn test_validate_title_rejects_empty() {
        assert!(matches!(validate_title(""), Err(TicketError::EmptyTitle)));
    }

    #[test]
    fn test_validate_title_rejects_whitespace() {
        assert!(matches!(validate_title("   "), Err(TicketError::EmptyTitle)));
        assert!(matches!(validate_title("\t\n"), Err(TicketError::EmptyTitle)));
    }
}
