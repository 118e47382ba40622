//! Tracker reducer sequences and key mapping
//!
//! These complement the unit tests in `src/tui/model.rs` by driving the
//! reducer through the same key mapping the component uses.

mod common;

use common::ids;
use iocraft::prelude::{KeyCode, KeyModifiers};
use ticketdesk::TicketStore;
use ticketdesk::form::FormField;
use ticketdesk::tui::components::{Toast, ToastLevel};
use ticketdesk::tui::model::*;
use ticketdesk::types::TicketStatus;

const LIST_HEIGHT: usize = 3;

/// Feed key presses through `key_to_action` and `reduce` like the component
fn press(state: TrackerState, keys: &[(KeyCode, KeyModifiers)]) -> TrackerState {
    keys.iter().fold(state, |state, (code, modifiers)| {
        let action = key_to_action(*code, *modifiers, state.input_mode())
            .unwrap_or(TrackerAction::DismissToast);
        reduce(state, action, LIST_HEIGHT)
    })
}

fn key(code: KeyCode) -> (KeyCode, KeyModifiers) {
    (code, KeyModifiers::NONE)
}

fn typed(text: &str) -> Vec<(KeyCode, KeyModifiers)> {
    text.chars().map(|c| key(KeyCode::Char(c))).collect()
}

fn seeded() -> TrackerState {
    TrackerState::new(TicketStore::seeded())
}

#[test]
fn test_add_ticket_with_keyboard() {
    let mut keys = vec![key(KeyCode::Char('n'))];
    keys.extend(typed("New bug"));
    keys.push(key(KeyCode::Tab));
    keys.extend(typed("line one"));
    keys.push(key(KeyCode::Enter));
    keys.extend(typed("line two"));
    keys.push(key(KeyCode::Tab));
    keys.push(key(KeyCode::Right));
    keys.push(key(KeyCode::Right));
    keys.push((KeyCode::Char('s'), KeyModifiers::CONTROL));

    let state = press(seeded(), &keys);

    assert_eq!(state.input_mode(), InputMode::List);
    let added = state.store.get(5).unwrap();
    assert_eq!(added.title, "New bug");
    assert_eq!(added.description, "line one\nline two");
    assert_eq!(added.status, TicketStatus::Completed);
    assert_eq!(state.toast, Some(Toast::success("Ticket added successfully!")));

    // The new ticket is selected and scrolled into view
    assert_eq!(state.selected_index, 4);
    assert_eq!(state.scroll_offset, 2);
}

#[test]
fn test_q_types_into_title_instead_of_quitting() {
    let mut keys = vec![key(KeyCode::Char('n'))];
    keys.extend(typed("quit"));
    let state = press(seeded(), &keys);
    assert!(!state.should_exit);
    assert_eq!(state.form.draft().title, "quit");
}

#[test]
fn test_empty_submit_then_correct() {
    let mut keys = vec![key(KeyCode::Char('n')), key(KeyCode::Enter)];
    let state = press(seeded(), &keys);
    assert_eq!(state.input_mode(), InputMode::Form(FormField::Title));
    let toast = state.toast.clone().unwrap();
    assert_eq!(toast.level, ToastLevel::Error);
    assert_eq!(toast.message, "Please enter a ticket title");

    keys = typed("Fixed");
    keys.push(key(KeyCode::Enter));
    let state = press(state, &keys);
    assert_eq!(ids(&state.store), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_escape_discards_form() {
    let mut keys = vec![key(KeyCode::Char('+'))];
    keys.extend(typed("abandon"));
    keys.push(key(KeyCode::Esc));
    let state = press(seeded(), &keys);
    assert!(!state.form.is_open());
    assert!(state.form.draft().is_pristine());
    assert!(!state.should_exit);

    let state = press(state, &[key(KeyCode::Char('n'))]);
    assert_eq!(state.form.draft().title, "");
}

#[test]
fn test_delete_confirm_and_dismiss() {
    let state = press(
        seeded(),
        &[
            key(KeyCode::Char('j')),
            key(KeyCode::Char('d')),
            key(KeyCode::Char('n')),
        ],
    );
    assert_eq!(ids(&state.store), vec![1, 2, 3, 4]);
    assert!(!state.form.is_open());

    let state = press(state, &[key(KeyCode::Delete), key(KeyCode::Char('y'))]);
    assert_eq!(ids(&state.store), vec![1, 3, 4]);
    assert_eq!(state.toast, Some(Toast::success("Ticket deleted successfully!")));
    assert_eq!(state.selected_index, 1);
}

#[test]
fn test_repeated_delete_key_does_not_confirm() {
    let state = press(seeded(), &[key(KeyCode::Char('d')), key(KeyCode::Char('d'))]);
    assert_eq!(ids(&state.store), vec![1, 2, 3, 4]);
    assert_eq!(state.input_mode(), InputMode::Confirm);

    let state = press(state, &[key(KeyCode::Char('y'))]);
    assert_eq!(ids(&state.store), vec![2, 3, 4]);
}

#[test]
fn test_delete_everything() {
    let confirm_delete = [key(KeyCode::Char('d')), key(KeyCode::Enter)];
    let mut state = seeded();
    for _ in 0..4 {
        state = press(state, &confirm_delete);
    }
    assert!(state.store.is_empty());
    assert_eq!(state.selected_index, 0);

    let vm = compute_view_model(&state, LIST_HEIGHT);
    assert!(vm.is_empty);

    // Further delete requests do nothing
    let state = press(state, &confirm_delete);
    assert!(state.pending_delete.is_none());
}

#[test]
fn test_edit_request_and_toast_cleared_by_next_key() {
    let state = press(seeded(), &[key(KeyCode::Char('G')), key(KeyCode::Char('e'))]);
    assert_eq!(
        state.toast,
        Some(Toast::info("Would edit ticket: Slowww and buggy").with_heading("Edit Feature"))
    );

    let state = press(state, &[key(KeyCode::Char('x'))]);
    assert!(state.toast.is_none());
}

#[test]
fn test_scrolling_keeps_selection_visible() {
    let mut store = TicketStore::new();
    for i in 0..10 {
        store
            .add(&ticketdesk::Draft::new(format!("T{i}"), "", TicketStatus::Created))
            .unwrap();
    }
    let state = press(TrackerState::new(store), &[key(KeyCode::End)]);
    assert_eq!(state.selected_index, 9);
    assert_eq!(state.scroll_offset, 7);

    let vm = compute_view_model(&state, LIST_HEIGHT);
    assert_eq!(vm.visible_count, 3);

    let state = press(state, &[key(KeyCode::Home)]);
    assert_eq!(state.scroll_offset, 0);
}

#[test]
fn test_quit_keys() {
    assert!(press(seeded(), &[key(KeyCode::Char('q'))]).should_exit);
    assert!(press(seeded(), &[(KeyCode::Char('c'), KeyModifiers::CONTROL)]).should_exit);
}

#[test]
fn test_escape_on_list_dismisses_toast_and_keeps_running() {
    let mut keys = vec![key(KeyCode::Char('n'))];
    keys.extend(typed("Keep me"));
    keys.push(key(KeyCode::Enter));
    let state = press(seeded(), &keys);
    assert_eq!(state.toast.as_ref().map(|t| t.level), Some(ToastLevel::Success));

    let state = press(state, &[key(KeyCode::Esc)]);
    assert!(state.toast.is_none());
    assert!(!state.should_exit);
    assert_eq!(ids(&state.store), vec![1, 2, 3, 4, 5]);

    let state = press(state, &[key(KeyCode::Esc)]);
    assert!(!state.should_exit);
}
