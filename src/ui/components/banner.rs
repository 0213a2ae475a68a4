//! Banner component
//! Fixed-height decorative header: background artwork with the centred logo

use iced::widget::{container, stack, svg};
use iced::{ContentFit, Element, Fill};

use crate::ui::icons;

/// Banner height in pixels
pub const BANNER_HEIGHT: f32 = 250.0;

/// Build the banner; it takes no input and emits no messages
pub fn view<'a, Message: 'a>() -> Element<'a, Message> {
    let background = svg(svg::Handle::from_memory(icons::BANNER_BACKGROUND.as_bytes()))
        .width(Fill)
        .height(BANNER_HEIGHT)
        .content_fit(ContentFit::Cover);

    let logo = container(
        svg(svg::Handle::from_memory(icons::LOGO.as_bytes()))
            .height(BANNER_HEIGHT * 0.6)
            .content_fit(ContentFit::Contain),
    )
    .padding([12, 24])
    .center_x(Fill)
    .center_y(BANNER_HEIGHT);

    container(stack![background, logo])
        .width(Fill)
        .height(BANNER_HEIGHT)
        .into()
}
