use serde_json::json;

use super::print_json;
use crate::display::format_status_row;
use crate::error::Result;
use crate::palette::status_palette;
use crate::types::TicketStatus;

/// Render the status vocabulary with palette colors
pub fn render_statuses() -> String {
    TicketStatus::ALL
        .iter()
        .map(|status| format_status_row(*status))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print the status vocabulary
pub fn cmd_statuses(output_json: bool) -> Result<()> {
    if output_json {
        let statuses: Vec<_> = TicketStatus::ALL
            .iter()
            .map(|status| {
                let palette = status_palette(*status);
                json!({
                    "label": status.label(),
                    "foreground": palette.foreground.hex(),
                    "background": palette.background.hex(),
                })
            })
            .collect();
        return print_json(&statuses);
    }

    println!("{}", render_statuses());
    Ok(())
}
