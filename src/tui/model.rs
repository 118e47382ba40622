//! Tracker model types for testable state management
//!
//! `TrackerState` owns the store, the creation form and the pending delete
//! confirmation. Key events become `TrackerAction`s, `reduce` applies them and
//! `compute_view_model` derives everything the component renders. None of this
//! needs a terminal, so the whole interaction is unit tested here.

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::form::{FormField, TicketFormState};
use crate::palette::{StatusPalette, status_palette};
use crate::ticket::{DeleteConfirmation, StatusCounts, TicketStore};
use crate::tui::components::footer::{
    Shortcut, confirm_shortcuts, empty_shortcuts, form_shortcuts, list_shortcuts,
};
use crate::tui::components::select::Selectable;
use crate::tui::components::toast::Toast;
use crate::types::{Ticket, TicketId, TicketStatus};

/// Toast shown after a ticket is committed
pub const ADDED_MESSAGE: &str = "Ticket added successfully!";

/// Toast shown after a confirmed delete
pub const DELETED_MESSAGE: &str = "Ticket deleted successfully!";

/// Heading of the edit acknowledgement toast
pub const EDIT_HEADING: &str = "Edit Feature";

/// Which part of the screen receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    List,
    Form(FormField),
    Confirm,
}

/// Raw state that changes during user interaction
#[derive(Debug, Clone, Default)]
pub struct TrackerState {
    pub store: TicketStore,
    pub form: TicketFormState,
    /// Index of the selected ticket in store order
    pub selected_index: usize,
    pub scroll_offset: usize,
    /// Delete awaiting a yes/no answer
    pub pending_delete: Option<DeleteConfirmation>,
    pub toast: Option<Toast>,
    pub should_exit: bool,
}

impl TrackerState {
    pub fn new(store: TicketStore) -> Self {
        Self {
            store,
            ..Default::default()
        }
    }

    /// Where key presses go; the confirmation wins over the form
    pub fn input_mode(&self) -> InputMode {
        if self.pending_delete.is_some() {
            InputMode::Confirm
        } else if self.form.is_open() {
            InputMode::Form(self.form.focused_field())
        } else {
            InputMode::List
        }
    }

    pub fn selected_ticket(&self) -> Option<&Ticket> {
        self.store.tickets().get(self.selected_index)
    }
}

/// All possible actions on the tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerAction {
    // Navigation
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,
    /// Half a page down
    PageDown,
    /// Half a page up
    PageUp,

    // Creation form
    OpenForm,
    CancelForm,
    SubmitForm,
    InsertChar(char),
    Backspace,
    /// Line break in the description
    Newline,
    NextField,
    PrevField,
    NextStatus,
    PrevStatus,

    // Delete protocol
    RequestDelete,
    ConfirmDelete,
    DismissDelete,

    /// Acknowledge an edit request for the selected ticket
    RequestEdit,
    DismissToast,
    Quit,
}

impl TrackerAction {
    fn is_list_action(&self) -> bool {
        matches!(
            self,
            TrackerAction::MoveUp
                | TrackerAction::MoveDown
                | TrackerAction::GoToTop
                | TrackerAction::GoToBottom
                | TrackerAction::PageDown
                | TrackerAction::PageUp
                | TrackerAction::OpenForm
                | TrackerAction::RequestDelete
                | TrackerAction::RequestEdit
        )
    }

    fn is_form_action(&self) -> bool {
        matches!(
            self,
            TrackerAction::CancelForm
                | TrackerAction::SubmitForm
                | TrackerAction::InsertChar(_)
                | TrackerAction::Backspace
                | TrackerAction::Newline
                | TrackerAction::NextField
                | TrackerAction::PrevField
                | TrackerAction::NextStatus
                | TrackerAction::PrevStatus
        )
    }
}

/// One row of the ticket list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRowModel {
    pub id: TicketId,
    pub title: String,
    pub status_label: &'static str,
    pub palette: StatusPalette,
    pub description: String,
    /// Rendered rating such as `4/5`
    pub rating: Option<String>,
}

/// The "Add New Ticket" modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormViewModel {
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub focused: FormField,
}

/// The delete confirmation modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmViewModel {
    pub title: &'static str,
    pub message: &'static str,
    pub ticket_title: Option<String>,
}

/// Computed view model for rendering the tracker
#[derive(Debug, Clone)]
pub struct TrackerViewModel {
    pub rows: Vec<TicketRowModel>,
    pub ticket_count: usize,
    pub status_counts: StatusCounts,
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub visible_count: usize,
    pub form: Option<FormViewModel>,
    pub confirm: Option<ConfirmViewModel>,
    pub toast: Option<Toast>,
    pub shortcuts: Vec<Shortcut>,
    pub is_empty: bool,
}

// ============================================================================
// Pure Functions
// ============================================================================

/// Pure function: compute view model from state
///
/// `list_height` may be smaller than the one the last action was reduced with
/// (a toast takes rows from the list), so the scroll offset is re-clamped to
/// keep the selection on screen.
pub fn compute_view_model(state: &TrackerState, list_height: usize) -> TrackerViewModel {
    let rows: Vec<TicketRowModel> = state.store.tickets().iter().map(row_model).collect();
    let ticket_count = rows.len();
    let is_empty = rows.is_empty();

    let form = state.form.is_open().then(|| {
        let draft = state.form.draft();
        FormViewModel {
            title: draft.title.clone(),
            description: draft.description.clone(),
            status: draft.status,
            focused: state.form.focused_field(),
        }
    });

    let confirm = state.pending_delete.as_ref().map(|pending| ConfirmViewModel {
        title: pending.title(),
        message: pending.message(),
        ticket_title: pending.ticket_title().map(str::to_string),
    });

    let shortcuts = match state.input_mode() {
        InputMode::Confirm => confirm_shortcuts(),
        InputMode::Form(_) => form_shortcuts(),
        InputMode::List if is_empty => empty_shortcuts(),
        InputMode::List => list_shortcuts(),
    };

    TrackerViewModel {
        rows,
        ticket_count,
        status_counts: state.store.status_counts(),
        selected_index: state.selected_index,
        scroll_offset: adjust_scroll(state.scroll_offset, state.selected_index, list_height),
        visible_count: list_height.min(ticket_count),
        form,
        confirm,
        toast: state.toast.clone(),
        shortcuts,
        is_empty,
    }
}

fn row_model(ticket: &Ticket) -> TicketRowModel {
    TicketRowModel {
        id: ticket.id,
        title: ticket.title.clone(),
        status_label: ticket.status.label(),
        palette: status_palette(ticket.status),
        description: ticket.description.clone(),
        rating: ticket.rating.map(|r| r.to_string()),
    }
}

/// Pure function: apply action to state (reducer pattern)
///
/// Any action clears the current toast before it runs. List actions are
/// ignored while a modal is open, and form actions while the form is closed.
pub fn reduce(mut state: TrackerState, action: TrackerAction, list_height: usize) -> TrackerState {
    state.toast = None;

    let mode = state.input_mode();
    if action.is_list_action() && mode != InputMode::List {
        return state;
    }
    if action.is_form_action() && !matches!(mode, InputMode::Form(_)) {
        return state;
    }

    let list_count = state.store.len();

    match action {
        // Navigation
        TrackerAction::MoveDown => {
            if list_count > 0 {
                state.selected_index = (state.selected_index + 1).min(list_count - 1);
                state.scroll_offset =
                    adjust_scroll(state.scroll_offset, state.selected_index, list_height);
            }
        }
        TrackerAction::MoveUp => {
            state.selected_index = state.selected_index.saturating_sub(1);
            state.scroll_offset =
                adjust_scroll(state.scroll_offset, state.selected_index, list_height);
        }
        TrackerAction::GoToTop => {
            state.selected_index = 0;
            state.scroll_offset = 0;
        }
        TrackerAction::GoToBottom => {
            if list_count > 0 {
                state.selected_index = list_count - 1;
                state.scroll_offset =
                    adjust_scroll(state.scroll_offset, state.selected_index, list_height);
            }
        }
        TrackerAction::PageDown => {
            if list_count > 0 {
                let jump = (list_height / 2).max(1);
                state.selected_index = (state.selected_index + jump).min(list_count - 1);
                state.scroll_offset =
                    adjust_scroll(state.scroll_offset, state.selected_index, list_height);
            }
        }
        TrackerAction::PageUp => {
            let jump = (list_height / 2).max(1);
            state.selected_index = state.selected_index.saturating_sub(jump);
            state.scroll_offset =
                adjust_scroll(state.scroll_offset, state.selected_index, list_height);
        }

        // Creation form
        TrackerAction::OpenForm => state.form.open(),
        TrackerAction::CancelForm => state.form.cancel(),
        TrackerAction::SubmitForm => match state.form.submit(&mut state.store) {
            Ok(_) => {
                state.selected_index = state.store.len().saturating_sub(1);
                state.scroll_offset =
                    adjust_scroll(state.scroll_offset, state.selected_index, list_height);
                state.toast = Some(Toast::success(ADDED_MESSAGE));
            }
            Err(e) => state.toast = Some(Toast::error(e.to_string())),
        },
        TrackerAction::InsertChar(c) => {
            state.form.insert_char(c);
        }
        TrackerAction::Backspace => state.form.backspace(),
        TrackerAction::Newline => {
            if state.form.focused_field() == FormField::Description {
                state.form.insert_char('\n');
            }
        }
        TrackerAction::NextField => state.form.focus_next(),
        TrackerAction::PrevField => state.form.focus_prev(),
        TrackerAction::NextStatus => {
            let status = state.form.draft().status.next();
            state.form.set_status(status);
        }
        TrackerAction::PrevStatus => {
            let status = state.form.draft().status.prev();
            state.form.set_status(status);
        }

        // Delete protocol
        TrackerAction::RequestDelete => {
            if let Some(id) = state.selected_ticket().map(|t| t.id) {
                state.pending_delete = Some(state.store.request_delete(id));
            }
        }
        TrackerAction::ConfirmDelete => {
            if let Some(pending) = state.pending_delete.take()
                && pending.confirm(&mut state.store).is_some()
            {
                clamp_selection(&mut state, list_height);
                state.toast = Some(Toast::success(DELETED_MESSAGE));
            }
        }
        TrackerAction::DismissDelete => {
            if let Some(pending) = state.pending_delete.take() {
                pending.dismiss();
            }
        }

        TrackerAction::RequestEdit => {
            if let Some(ticket) = state.selected_ticket() {
                let ack = state.store.edit(ticket);
                state.toast = Some(Toast::info(ack.message).with_heading(EDIT_HEADING));
            }
        }
        TrackerAction::DismissToast => {}
        TrackerAction::Quit => state.should_exit = true,
    }
    state
}

fn clamp_selection(state: &mut TrackerState, list_height: usize) {
    let len = state.store.len();
    if state.selected_index >= len {
        state.selected_index = len.saturating_sub(1);
    }
    state.scroll_offset = adjust_scroll(
        state.scroll_offset.min(state.selected_index),
        state.selected_index,
        list_height,
    );
}

/// Adjust scroll offset to keep selected item visible
pub fn adjust_scroll(scroll_offset: usize, selected_index: usize, list_height: usize) -> usize {
    if list_height == 0 {
        return 0;
    }

    if selected_index < scroll_offset {
        return selected_index;
    }

    if selected_index >= scroll_offset + list_height {
        return selected_index.saturating_sub(list_height - 1);
    }

    scroll_offset
}

/// Convert a key event to a TrackerAction (pure function)
///
/// Returns `None` if the key doesn't map to any action.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    mode: InputMode,
) -> Option<TrackerAction> {
    match mode {
        InputMode::List => list_key_to_action(code, modifiers),
        InputMode::Form(field) => form_key_to_action(code, modifiers, field),
        InputMode::Confirm => confirm_key_to_action(code),
    }
}

fn list_key_to_action(code: KeyCode, modifiers: KeyModifiers) -> Option<TrackerAction> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('q') | KeyCode::Char('c') => Some(TrackerAction::Quit),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('j') | KeyCode::Down => Some(TrackerAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(TrackerAction::MoveUp),
        KeyCode::Char('g') | KeyCode::Home => Some(TrackerAction::GoToTop),
        KeyCode::Char('G') | KeyCode::End => Some(TrackerAction::GoToBottom),
        KeyCode::PageDown => Some(TrackerAction::PageDown),
        KeyCode::PageUp => Some(TrackerAction::PageUp),

        KeyCode::Char('n') | KeyCode::Char('+') => Some(TrackerAction::OpenForm),
        KeyCode::Char('e') | KeyCode::Enter => Some(TrackerAction::RequestEdit),
        KeyCode::Char('d') | KeyCode::Delete => Some(TrackerAction::RequestDelete),

        KeyCode::Esc => Some(TrackerAction::DismissToast),
        KeyCode::Char('q') => Some(TrackerAction::Quit),
        _ => None,
    }
}

fn form_key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    field: FormField,
) -> Option<TrackerAction> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('s') => Some(TrackerAction::SubmitForm),
            KeyCode::Char('q') | KeyCode::Char('c') => Some(TrackerAction::CancelForm),
            _ => None,
        };
    }

    match code {
        KeyCode::Esc => Some(TrackerAction::CancelForm),
        KeyCode::Tab => Some(TrackerAction::NextField),
        KeyCode::BackTab => Some(TrackerAction::PrevField),
        KeyCode::Enter if field == FormField::Description => Some(TrackerAction::Newline),
        KeyCode::Enter => Some(TrackerAction::SubmitForm),
        _ if field == FormField::Status => match code {
            KeyCode::Left | KeyCode::Char('h') => Some(TrackerAction::PrevStatus),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
                Some(TrackerAction::NextStatus)
            }
            KeyCode::Up => Some(TrackerAction::PrevField),
            KeyCode::Down => Some(TrackerAction::NextField),
            _ => None,
        },
        KeyCode::Backspace => Some(TrackerAction::Backspace),
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::ALT) => {
            Some(TrackerAction::InsertChar(c))
        }
        _ => None,
    }
}

fn confirm_key_to_action(code: KeyCode) -> Option<TrackerAction> {
    match code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            Some(TrackerAction::ConfirmDelete)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('c') | KeyCode::Esc => {
            Some(TrackerAction::DismissDelete)
        }
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
