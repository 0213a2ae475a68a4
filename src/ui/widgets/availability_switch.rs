//! Availability switch widget
//!
//! Pill-shaped switch: green with the knob on the right when available, red
//! with the knob on the left otherwise. A tooltip spells the state out.
//! Pressing it only emits `on_press`; the switch itself holds no state.

use iced::widget::{Space, button, container, row, text, tooltip};
use iced::{Border, Element, Fill, Length};

use crate::ui::theme;

const WIDTH: f32 = 64.0;
const HEIGHT: f32 = 32.0;
const KNOB: f32 = 28.0;

/// Create an availability switch element
///
/// # Arguments
/// * `available` - Server-provided availability
/// * `label` - Tooltip text describing the state
/// * `on_press` - Message emitted when the switch is pressed
pub fn view<'a, Message: Clone + 'a>(
    available: bool,
    label: &'a str,
    on_press: Message,
) -> Element<'a, Message> {
    let knob = container(Space::new().width(KNOB).height(KNOB)).style(|_theme| container::Style {
        background: Some(iced::Background::Color(theme::KNOB)),
        border: Border {
            radius: (KNOB / 2.0).into(),
            ..Default::default()
        },
        shadow: iced::Shadow {
            color: iced::Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            offset: iced::Vector::new(0.0, 1.0),
            blur_radius: 3.0,
        },
        ..Default::default()
    });

    let track_content = if available {
        row![Space::new().width(Fill), knob]
    } else {
        row![knob, Space::new().width(Fill)]
    };

    let track = container(track_content)
        .width(WIDTH)
        .height(HEIGHT)
        .padding(2)
        .center_y(Length::Fixed(HEIGHT))
        .style(move |_theme| container::Style {
            background: Some(iced::Background::Color(if available {
                theme::AVAILABLE
            } else {
                theme::UNAVAILABLE
            })),
            border: Border {
                radius: (HEIGHT / 2.0).into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let switch = button(track)
        .padding(0)
        .style(theme::transparent_btn)
        .on_press(on_press);

    tooltip(
        switch,
        container(text(label).size(12)).padding([4, 12]).style(theme::tooltip_container),
        tooltip::Position::Right,
    )
    .gap(8.0)
    .into()
}
