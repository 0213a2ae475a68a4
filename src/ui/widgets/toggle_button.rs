//! Toggle button widget
//!
//! Outlined button that turns solid green while active. Used for the
//! availability filters and the page numbers.

use iced::widget::{button, text};
use iced::{Element, Padding};

use crate::ui::theme;

/// Create a toggle button element
///
/// `on_press` of `None` renders the button disabled.
pub fn view<'a, Message: Clone + 'a>(
    label: impl text::IntoFragment<'a>,
    active: bool,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    button(text(label).size(14))
        .padding(Padding::from([6, 14]))
        .style(move |theme, status| theme::toggle_button(theme, status, active))
        .on_press_maybe(on_press)
        .into()
}
