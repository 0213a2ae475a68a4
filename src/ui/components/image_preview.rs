//! Image preview overlay
//!
//! Backdrop clicks and the close button dismiss the overlay; clicks on the
//! panel itself are swallowed so they never reach the backdrop.

use iced::mouse::Interaction;
use iced::widget::{Space, button, column, container, mouse_area, opaque, row, svg, tooltip};
use iced::{ContentFit, Element, Fill};

use crate::app::{ImageStore, Message};
use crate::features::ImageSource;
use crate::i18n::{Key, Locale};
use crate::ui::components::flower_picture;
use crate::ui::{icons, theme};

const PANEL_WIDTH: f32 = 672.0;

/// Build the overlay for `source`
pub fn view<'a>(
    source: &ImageSource,
    images: &'a ImageStore,
    locale: Locale,
) -> Element<'a, Message> {
    let close_btn = tooltip(
        button(
            svg(svg::Handle::from_memory(icons::CLOSE.as_bytes()))
                .width(20)
                .height(20)
                .style(|theme, status| svg::Style {
                    color: Some(match status {
                        svg::Status::Hovered => theme::UNAVAILABLE,
                        _ => theme::text_muted(theme),
                    }),
                }),
        )
        .padding(6)
        .style(theme::icon_button)
        .on_press(Message::ClosePreview),
        container(iced::widget::text(locale.get(Key::Close)).size(12))
            .padding([4, 10])
            .style(theme::tooltip_container),
        tooltip::Position::Bottom,
    );

    let picture = flower_picture::view(source, images, Fill, iced::Shrink, ContentFit::Contain);

    let panel = container(column![
        row![Space::new().width(Fill), close_btn],
        picture,
    ])
    .padding(24)
    .max_width(PANEL_WIDTH)
    .style(theme::preview_panel);

    // Clicks on the panel stop here
    let panel = mouse_area(panel)
        .interaction(Interaction::Idle)
        .on_press(Message::Noop);

    let backdrop = container(panel)
        .width(Fill)
        .height(Fill)
        .padding(32)
        .center_x(Fill)
        .center_y(Fill)
        .style(|theme| container::Style {
            background: Some(iced::Background::Color(theme::overlay_backdrop(theme, 0.7))),
            ..Default::default()
        });

    let event_blocker = mouse_area(backdrop)
        .interaction(Interaction::Idle)
        .on_press(Message::ClosePreview);

    // opaque to block all mouse button events from propagating
    opaque(event_blocker).into()
}
