//! Centered overlay that hosts the add-ticket form and the delete confirmation

use iocraft::prelude::*;

/// Backdrop color behind modals
pub const MODAL_BACKDROP: Color = Color::Rgb {
    r: 30,
    g: 30,
    b: 30,
};

#[derive(Default, Props)]
pub struct ModalOverlayProps<'a> {
    /// Paint a solid backdrop hiding the ticket list behind the modal
    pub show_backdrop: Option<bool>,
    pub children: Vec<AnyElement<'a>>,
}

impl ModalOverlayProps<'_> {
    /// Backdrop fill, or `None` to leave the list visible
    fn backdrop(&self) -> Option<Color> {
        self.show_backdrop
            .unwrap_or(false)
            .then_some(MODAL_BACKDROP)
    }
}

/// Full-screen layer over the tracker that centers its children
#[component]
pub fn ModalOverlay<'a>(props: &mut ModalOverlayProps<'a>) -> impl Into<AnyElement<'a>> {
    let background_color = props.backdrop();
    let children = std::mem::take(&mut props.children);

    element! {
        View(
            position: Position::Absolute,
            top: 0,
            left: 0,
            width: 100pct,
            height: 100pct,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            background_color,
        ) {
            #(children)
        }
    }
}
