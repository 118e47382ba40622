//! Demo tickets the tracker starts with

use crate::types::{Rating, Ticket, TicketStatus};

/// The four demo tickets, ids 1 through 4
pub fn demo_tickets() -> Vec<Ticket> {
    vec![
        Ticket {
            id: 1,
            title: "Login not working".to_string(),
            description: "Users can't log in to their accounts".to_string(),
            status: TicketStatus::Created,
            rating: None,
        },
        Ticket {
            id: 2,
            title: "Slow page loading".to_string(),
            description: "App takes too long to load the dashboard".to_string(),
            status: TicketStatus::UnderAssistance,
            rating: None,
        },
        Ticket {
            id: 3,
            title: "Crash on startup".to_string(),
            description: "App crashes immediately after opening".to_string(),
            status: TicketStatus::Completed,
            rating: Rating::new(4).ok(),
        },
        Ticket {
            id: 4,
            title: "Slowww and buggy".to_string(),
            description: "The App is very slow and buggy".to_string(),
            status: TicketStatus::UnderAssistance,
            rating: None,
        },
    ]
}
