//! Store, form and delete-protocol behavior through the public API

mod common;

use std::collections::HashSet;

use common::{draft, ids};
use ticketdesk::{
    Draft, FormVisibility, TicketError, TicketFormState, TicketStatus, TicketStore,
    palette_for_label, status_palette,
};

// ============================================================================
// Ids and ordering
// ============================================================================

#[test]
fn test_ids_unique_across_interleaved_deletes() {
    let mut store = TicketStore::seeded();
    let mut seen: HashSet<u32> = ids(&store).into_iter().collect();

    for round in 0..20 {
        let ticket = store.add(&draft(&format!("Ticket {round}"))).unwrap();
        assert!(seen.insert(ticket.id), "id {} handed out twice", ticket.id);
        if round % 3 == 0 {
            store.delete(ticket.id);
        }
        if round % 5 == 0 {
            let first = store.tickets()[0].id;
            store.delete(first);
        }
    }

    let current = ids(&store);
    let unique: HashSet<_> = current.iter().collect();
    assert_eq!(unique.len(), current.len());
}

#[test]
fn test_add_appends_in_submission_order() {
    let mut store = TicketStore::new();
    store.add(&draft("a")).unwrap();
    store.add(&draft("b")).unwrap();
    store.delete(1);
    store.add(&draft("c")).unwrap();

    let titles: Vec<&str> = store.tickets().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["b", "c"]);
    assert_eq!(ids(&store), vec![2, 3]);
}

#[test]
fn test_deleted_high_id_not_reused() {
    let mut store = TicketStore::seeded();
    let added = store.add(&draft("New bug")).unwrap();
    assert_eq!(added.id, 5);
    store.delete(5);
    assert_eq!(store.add(&draft("Another")).unwrap().id, 6);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_blank_titles_rejected() {
    let mut store = TicketStore::seeded();
    for title in ["", "   ", "\t\n"] {
        assert!(matches!(store.add(&draft(title)), Err(TicketError::EmptyTitle)));
    }
    assert_eq!(store.len(), 4);

    let added = store.add(&draft("Fix login")).unwrap();
    assert_eq!(added.id, 5);
    assert_eq!(store.len(), 5);
}

#[test]
fn test_title_stored_as_entered() {
    let mut store = TicketStore::new();
    let ticket = store.add(&draft("  padded  ")).unwrap();
    assert_eq!(ticket.title, "  padded  ");
}

// ============================================================================
// Delete
// ============================================================================

#[test]
fn test_delete_absent_id_is_noop() {
    let mut store = TicketStore::seeded();
    assert!(store.delete(99).is_none());
    assert_eq!(store, TicketStore::seeded());
}

#[test]
fn test_delete_middle() {
    let mut store = TicketStore::new();
    for title in ["one", "two", "three"] {
        store.add(&draft(title)).unwrap();
    }
    let removed = store.delete(2).unwrap();
    assert_eq!(removed.title, "two");
    assert_eq!(ids(&store), vec![1, 3]);
}

#[test]
fn test_dismissed_confirmation_leaves_store() {
    let mut store = TicketStore::seeded();
    let pending = store.request_delete(2);
    assert_eq!(pending.ticket_title(), Some("Slow page loading"));
    pending.dismiss();
    assert_eq!(store, TicketStore::seeded());

    let pending = store.request_delete(2);
    assert_eq!(pending.confirm(&mut store).map(|t| t.id), Some(2));
    assert_eq!(ids(&store), vec![1, 3, 4]);
}

#[test]
fn test_confirmation_for_vanished_ticket() {
    let mut store = TicketStore::seeded();
    let pending = store.request_delete(1);
    store.delete(1);
    assert!(pending.confirm(&mut store).is_none());
    assert_eq!(store.len(), 3);
}

// ============================================================================
// Edit
// ============================================================================

#[test]
fn test_edit_is_acknowledgement_only() {
    let store = TicketStore::seeded();
    let ack = store.edit(&store.tickets()[2]);
    assert_eq!(ack.ticket_id, 3);
    assert_eq!(ack.message, "Would edit ticket: Crash on startup");
    assert_eq!(store, TicketStore::seeded());
}

#[test]
fn test_update_preserves_identity() {
    let mut store = TicketStore::seeded();
    let updated = store
        .update(3, &Draft::new("Crash fixed", "", TicketStatus::Completed))
        .unwrap();
    assert_eq!(updated.id, 3);
    assert_eq!(updated.rating.map(|r| r.value()), Some(4));
    assert_eq!(ids(&store), vec![1, 2, 3, 4]);
    assert_eq!(store.get(3).unwrap().title, "Crash fixed");

    assert!(matches!(
        store.update(42, &draft("nope")),
        Err(TicketError::TicketNotFound(42))
    ));
    assert!(matches!(store.update(1, &draft(" ")), Err(TicketError::EmptyTitle)));
}

// ============================================================================
// Status and palette
// ============================================================================

#[test]
fn test_every_status_in_vocabulary() {
    let store = TicketStore::seeded();
    for ticket in store.tickets() {
        assert!(TicketStatus::ALL.contains(&ticket.status));
    }
    let counts = store.status_counts();
    assert_eq!(counts.created, 1);
    assert_eq!(counts.under_assistance, 2);
    assert_eq!(counts.completed, 1);
}

#[test]
fn test_palette_mapping() {
    let cases = [
        (TicketStatus::Created, "#007AFF", "#E3F2FD"),
        (TicketStatus::UnderAssistance, "#FF9500", "#FFF3E0"),
        (TicketStatus::Completed, "#34C759", "#E8F5E8"),
    ];
    for (status, fg, bg) in cases {
        let palette = status_palette(status);
        assert_eq!(palette.foreground.hex(), fg);
        assert_eq!(palette.background.hex(), bg);
        assert_eq!(palette_for_label(status.label()), palette);
    }
    assert_eq!(palette_for_label("Reopened").foreground.hex(), "#8E8E93");
}

// ============================================================================
// Form
// ============================================================================

#[test]
fn test_draft_reset_after_cancel_and_submit() {
    let pristine = Draft::new("", "", TicketStatus::Created);
    let mut store = TicketStore::seeded();
    let mut form = TicketFormState::new();

    form.open();
    form.set_title("draft");
    form.set_status(TicketStatus::Completed);
    form.cancel();
    assert_eq!(form.draft(), &pristine);

    form.open();
    form.set_title("real");
    form.set_description("details");
    form.submit(&mut store).unwrap();
    assert_eq!(form.draft(), &pristine);
    assert_eq!(form.visibility(), FormVisibility::Closed);
}

#[test]
fn test_failed_submit_keeps_form_open() {
    let mut store = TicketStore::seeded();
    let mut form = TicketFormState::new();
    form.open();
    form.set_description("only a description");

    assert!(form.submit(&mut store).is_err());
    assert_eq!(form.visibility(), FormVisibility::Open);
    assert_eq!(form.draft().description, "only a description");
    assert_eq!(store.len(), 4);
}

// ============================================================================
// End to end
// ============================================================================

#[test]
fn test_seeded_add_then_delete_round_trip() {
    let mut store = TicketStore::seeded();
    assert_eq!(ids(&store), vec![1, 2, 3, 4]);
    let statuses: Vec<TicketStatus> = store.tickets().iter().map(|t| t.status).collect();
    assert_eq!(
        statuses,
        vec![
            TicketStatus::Created,
            TicketStatus::UnderAssistance,
            TicketStatus::Completed,
            TicketStatus::UnderAssistance,
        ]
    );

    let mut form = TicketFormState::new();
    form.open();
    form.set_title("New bug");
    let added = form.submit(&mut store).unwrap();
    assert_eq!(added.id, 5);
    assert_eq!(added.rating, None);
    assert_eq!(added.status, TicketStatus::Created);

    store.request_delete(5).confirm(&mut store);
    assert_eq!(store.tickets(), TicketStore::seeded().tickets());
}
