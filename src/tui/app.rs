//! Ticket tracker screen (`ticketdesk view`)

use iocraft::prelude::*;

use crate::ticket::TicketStore;
use crate::tui::components::{
    CARD_HEIGHT, ConfirmDialog, EmptyState, Footer, Header, TicketForm, TicketList, render_toast,
};
use crate::tui::model::{
    TrackerAction, TrackerState, compute_view_model, key_to_action, reduce,
};
use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct TicketTrackerProps {
    /// Starting collection (empty when not provided)
    pub store: Option<TicketStore>,
}

/// Number of cards that fit between the header and the footer
pub fn cards_per_page(terminal_height: u16, has_toast: bool) -> usize {
    // header (1) + footer (1) + "more" hints (2)
    let chrome = 4 + if has_toast { 3 } else { 0 };
    let available = (terminal_height as usize).saturating_sub(chrome);
    (available / CARD_HEIGHT).max(1)
}

/// Main tracker component
///
/// Layout:
/// ```text
/// +------------------------------------------+
/// | Header                         4 tickets |
/// +------------------------------------------+
/// | TicketList                               |
/// |                                          |
/// +------------------------------------------+
/// | Toast (optional)                         |
/// | Footer                                   |
/// +------------------------------------------+
/// ```
/// The form and the delete confirmation render as overlays.
#[component]
pub fn TicketTracker<'a>(props: &TicketTrackerProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let initial = props.store.clone().unwrap_or_default();
    let mut state: State<TrackerState> = hooks.use_state(move || TrackerState::new(initial));

    let has_toast = state.read().toast.is_some();
    let list_height = cards_per_page(height, has_toast);

    hooks.use_terminal_events({
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let current = state.read().clone();
                let action = key_to_action(code, modifiers, current.input_mode())
                    .unwrap_or(TrackerAction::DismissToast);
                state.set(reduce(current, action, list_height));
            }
            _ => {}
        }
    });

    let vm = compute_view_model(&state.read(), list_height);

    if state.read().should_exit {
        system.exit();
    }

    let theme = theme();

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(ticket_count: Some(vm.ticket_count), counts: Some(vm.status_counts))

            View(flex_grow: 1.0, width: 100pct, overflow: Overflow::Hidden) {
                #(if vm.is_empty {
                    element! { EmptyState() }.into_any()
                } else {
                    element! {
                        TicketList(
                            tickets: vm.rows.clone(),
                            selected_index: vm.selected_index,
                            scroll_offset: vm.scroll_offset,
                            visible_count: vm.visible_count,
                            width: Some(width.saturating_sub(2) as u32),
                        )
                    }
                    .into_any()
                })
            }

            #(render_toast(&vm.toast))

            Footer(shortcuts: vm.shortcuts.clone())

            TicketForm(form: vm.form.clone())
            ConfirmDialog(confirm: vm.confirm.clone())
        }
    }
}
