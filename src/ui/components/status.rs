//! Status panels for the non-list states of the catalog: loading, failed
//! and empty

use iced::widget::{Space, button, column, container, row, svg, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::primitives::{FlowerSpinner, view_flower_spinner};
use crate::ui::{icons, theme};

const SPINNER_SIZE: f32 = 96.0;

/// Full-height loading flower; no catalog chrome
pub fn loading(spinner_phase: f32, locale: Locale) -> Element<'static, Message> {
    let content = column![
        view_flower_spinner(FlowerSpinner::new(spinner_phase), SPINNER_SIZE),
        Space::new().height(16),
        text(locale.get(Key::Loading)).size(16).color(iced::Color::WHITE),
    ]
    .align_x(Alignment::Center);

    container(content)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .style(theme::page_container)
        .into()
}

/// Error message and retry control only
pub fn failed(locale: Locale) -> Element<'static, Message> {
    let icon = svg(svg::Handle::from_memory(icons::ALERT.as_bytes()))
        .width(40)
        .height(40)
        .style(|_theme, _status| svg::Style {
            color: Some(theme::UNAVAILABLE),
        });

    let retry_btn = button(
        row![
            svg(svg::Handle::from_memory(icons::REFRESH.as_bytes()))
                .width(16)
                .height(16)
                .style(|_theme, _status| svg::Style {
                    color: Some(iced::Color::WHITE),
                }),
            Space::new().width(8),
            text(locale.get(Key::Retry)).size(14),
        ]
        .align_y(Alignment::Center),
    )
    .padding([10, 24])
    .style(theme::primary_button)
    .on_press(Message::Retry);

    let card = container(
        column![
            icon,
            Space::new().height(12),
            text(locale.get(Key::LoadFailed)).size(16),
            Space::new().height(20),
            retry_btn,
        ]
        .align_x(Alignment::Center),
    )
    .padding(32)
    .style(theme::card_container);

    container(card)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .style(theme::page_container)
        .into()
}

/// Empty-state message with the clear-filters action
///
/// `filtered` tells whether the query hides records or the collection is
/// empty.
pub fn empty(filtered: bool, locale: Locale) -> Element<'static, Message> {
    let message = if filtered {
        locale.get(Key::EmptyFiltered)
    } else {
        locale.get(Key::EmptyCollection)
    };

    let clear_btn = button(text(locale.get(Key::ClearFilters)).size(14))
        .padding([8, 20])
        .style(theme::primary_button)
        .on_press(Message::ClearFilters);

    container(
        column![
            text(message).size(15).style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
            Space::new().height(16),
            clear_btn,
        ]
        .align_x(Alignment::Center),
    )
    .width(Fill)
    .padding(24)
    .center_x(Fill)
    .into()
}
