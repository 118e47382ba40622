//! Delete confirmation dialog

use iocraft::prelude::*;

use super::modal_container::{ModalBorderColor, ModalContainer};
use super::modal_overlay::ModalOverlay;
use crate::tui::model::ConfirmViewModel;
use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct ConfirmDialogProps {
    pub confirm: Option<ConfirmViewModel>,
}

#[component]
pub fn ConfirmDialog(props: &ConfirmDialogProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(confirm) = props.confirm.clone() else {
        return element! { View() }.into_any();
    };

    element! {
        ModalOverlay(show_backdrop: true) {
            ModalContainer(
                width: Some(50u32),
                border_color: Some(ModalBorderColor::Danger),
                title: Some(confirm.title.to_string()),
                title_color: Some(theme.danger),
                footer_text: Some("[y] Delete / [n] Cancel".to_string()),
            ) {
                View(flex_direction: FlexDirection::Column, padding_top: 1, gap: 1) {
                    Text(content: confirm.message, color: theme.text)
                    #(confirm.ticket_title.map(|title| element! {
                        Text(content: format!("\"{}\"", title), color: theme.text_dimmed)
                    }))
                }
            }
        }
    }
    .into_any()
}
