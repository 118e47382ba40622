//! Shared TUI components

pub mod confirm_modal;
pub mod empty_state;
pub mod footer;
pub mod header;
pub mod modal_container;
pub mod modal_overlay;
pub mod select;
pub mod shortcuts;
pub mod ticket_card;
pub mod ticket_form;
pub mod ticket_list;
pub mod toast;

pub use confirm_modal::{ConfirmDialog, ConfirmDialogProps};
pub use empty_state::EmptyState;
pub use footer::{
    Footer, FooterProps, Shortcut, confirm_shortcuts, empty_shortcuts, form_shortcuts,
    list_shortcuts,
};
pub use header::{Header, HeaderProps};
pub use modal_container::{ModalBorderColor, ModalContainer, ModalContainerProps};
pub use modal_overlay::{ModalOverlay, ModalOverlayProps};
pub use select::{Select, SelectProps, Selectable, options_for};
pub use ticket_card::{CARD_HEIGHT, TicketCard, TicketCardProps};
pub use ticket_form::{TicketForm, TicketFormProps};
pub use ticket_list::{TicketList, TicketListProps};
pub use toast::{Toast, ToastLevel, render_toast};
