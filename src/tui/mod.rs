//! Fullscreen ticket tracker
//!
//! `model` holds the pure state machine; `app` wires it to iocraft.

pub mod app;
pub mod components;
pub mod model;
pub mod theme;

pub use app::{TicketTracker, TicketTrackerProps};
pub use model::{InputMode, TrackerAction, TrackerState, compute_view_model, key_to_action, reduce};
pub use theme::Theme;
