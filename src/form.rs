//! Draft state for the "Add New Ticket" form
//!
//! The form is a two-state machine:
//!
//! ```text
//!            open()
//!   Closed ---------> Open
//!     ^                 |
//!     |   cancel()      |
//!     +-----------------+
//!     |  submit() Ok    |
//!     +-----------------+
//! ```
//!
//! A failed `submit()` stays `Open` with the draft untouched so the user can
//! correct it. Partially entered data never reaches the store.

use tracing::warn;

use crate::error::Result;
use crate::ticket::{TicketStore, validate_title};
use crate::types::{Draft, Ticket, TicketStatus};

/// Whether the creation form is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormVisibility {
    #[default]
    Closed,
    Open,
}

/// Which field of the form has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Description,
    Status,
}

impl FormField {
    /// Get the next field (wrapping)
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Status,
            FormField::Status => FormField::Title,
        }
    }

    /// Get the previous field (wrapping)
    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Status,
            FormField::Description => FormField::Title,
            FormField::Status => FormField::Description,
        }
    }
}

/// Owner of the creation draft and its open/submit/cancel protocol
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketFormState {
    visibility: FormVisibility,
    draft: Draft,
    focused: FormField,
}

impl TicketFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visibility(&self) -> FormVisibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == FormVisibility::Open
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn focused_field(&self) -> FormField {
        self.focused
    }

    /// Show the form with a fresh draft
    ///
    /// The draft is reset even if a previous session left data behind.
    pub fn open(&mut self) {
        self.reset();
        self.visibility = FormVisibility::Open;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    pub fn set_status(&mut self, status: TicketStatus) {
        self.draft.status = status;
    }

    /// Set the status from its display label
    ///
    /// Unknown labels are rejected and the draft keeps its current status.
    pub fn set_status_label(&mut self, label: &str) -> Result<()> {
        self.draft.status = label.parse()?;
        Ok(())
    }

    pub fn focus(&mut self, field: FormField) {
        self.focused = field;
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    /// Append a character to the focused text field
    ///
    /// Returns false when the status picker has focus.
    pub fn insert_char(&mut self, c: char) -> bool {
        match self.focused {
            FormField::Title => self.draft.title.push(c),
            FormField::Description => self.draft.description.push(c),
            FormField::Status => return false,
        }
        true
    }

    /// Remove the last character of the focused text field
    pub fn backspace(&mut self) {
        match self.focused {
            FormField::Title => {
                self.draft.title.pop();
            }
            FormField::Description => {
                self.draft.description.pop();
            }
            FormField::Status => {}
        }
    }

    /// Discard the draft and close
    pub fn cancel(&mut self) {
        self.reset();
        self.visibility = FormVisibility::Closed;
    }

    /// Validate the draft and commit it to `store`
    ///
    /// On success the draft is reset and the form closes. On failure nothing
    /// changes: the form stays open and the draft is kept for correction.
    pub fn submit(&mut self, store: &mut TicketStore) -> Result<Ticket> {
        if let Err(e) = validate_title(&self.draft.title) {
            warn!("rejected ticket draft: {e}");
            return Err(e);
        }

        let ticket = store.add(&self.draft)?;
        self.reset();
        self.visibility = FormVisibility::Closed;
        Ok(ticket)
    }

    fn reset(&mut self) {
        self.draft = Draft::default();
        self.focused = FormField::default();
    }
}
