//! "Add New Ticket" modal
//!
//! Pure rendering of the creation draft. Key handling lives in the tracker
//! reducer; this component only shows the focused field and a cursor.

use iocraft::prelude::*;

use super::modal_container::{ModalBorderColor, ModalContainer};
use super::modal_overlay::ModalOverlay;
use super::select::{Select, Selectable, options_for};
use crate::form::FormField;
use crate::tui::model::FormViewModel;
use crate::tui::theme::theme;
use crate::types::TicketStatus;

const TITLE_PLACEHOLDER: &str = "Enter ticket title";
const DESCRIPTION_PLACEHOLDER: &str = "Enter ticket description";

#[derive(Default, Props)]
pub struct TicketFormProps {
    pub form: Option<FormViewModel>,
}

#[derive(Default, Props)]
struct FieldProps {
    label: &'static str,
    value: String,
    placeholder: &'static str,
    has_focus: bool,
}

/// Labelled text field; the focused field shows a `_` cursor after its value
#[component]
fn Field(props: &FieldProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let label_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.text_dimmed
    };
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };

    let mut lines: Vec<String> = props.value.split('\n').map(str::to_string).collect();
    let is_blank = props.value.is_empty();
    if props.has_focus
        && let Some(last) = lines.last_mut()
    {
        last.push('_');
    }

    element! {
        View(flex_direction: FlexDirection::Column) {
            Text(content: format!("{}:", props.label), color: label_color)
            View(
                width: 100pct,
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Round,
                border_color: border_color,
                padding_left: 1,
            ) {
                #(if is_blank && !props.has_focus {
                    vec![element! {
                        Text(content: props.placeholder, color: theme.text_dimmed)
                    }]
                } else {
                    lines.into_iter().map(|line| element! {
                        Text(content: line, color: theme.text)
                    }).collect()
                })
            }
        }
    }
}

#[component]
pub fn TicketForm(props: &TicketFormProps) -> impl Into<AnyElement<'static>> {
    let Some(form) = props.form.clone() else {
        return element! { View() }.into_any();
    };
    let (status_fg, status_bg) = theme().status_colors(form.status);

    element! {
        ModalOverlay(show_backdrop: true) {
            ModalContainer(
                width: Some(64u32),
                border_color: Some(ModalBorderColor::Focused),
                title: Some("Add New Ticket".to_string()),
                footer_text: Some("Tab next field · C-s add · Esc cancel".to_string()),
            ) {
                View(flex_direction: FlexDirection::Column, gap: 1, padding_top: 1) {
                    Field(
                        label: "Title",
                        value: form.title.clone(),
                        placeholder: TITLE_PLACEHOLDER,
                        has_focus: form.focused == FormField::Title,
                    )
                    Field(
                        label: "Description",
                        value: form.description.clone(),
                        placeholder: DESCRIPTION_PLACEHOLDER,
                        has_focus: form.focused == FormField::Description,
                    )
                    Select(
                        label: Some("Status"),
                        options: options_for::<TicketStatus>(),
                        selected_index: form.status.index(),
                        has_focus: form.focused == FormField::Status,
                        value_color: Some(status_fg),
                        value_background: Some(status_bg),
                    )
                }
            }
        }
    }
    .into_any()
}
