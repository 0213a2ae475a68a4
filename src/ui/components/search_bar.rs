//! Search bar component
//! Rounded search input with icon and placeholder text

use iced::widget::{Space, container, row, svg, text_input};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::theme;

/// Build the search bar component
pub fn view(search_term: &str, locale: Locale) -> Element<'_, Message> {
    let search_icon = svg(svg::Handle::from_memory(
        crate::ui::icons::SEARCH.as_bytes(),
    ))
    .width(18)
    .height(18)
    .style(|theme, _status| svg::Style {
        color: Some(theme::text_muted(theme)),
    });

    let input = text_input(locale.get(Key::SearchPlaceholder), search_term)
        .on_input(Message::SearchChanged)
        .padding(Padding::new(10.0).left(0.0))
        .size(14)
        .style(theme::search_input);

    let content = row![
        Space::new().width(14),
        search_icon,
        Space::new().width(10),
        input,
        Space::new().width(14),
    ]
    .align_y(Alignment::Center);

    container(content)
        .width(Fill)
        .style(|theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(theme::card(theme))),
            border: iced::Border {
                radius: 24.0.into(),
                width: 1.0,
                color: theme::border_color(theme),
            },
            ..Default::default()
        })
        .into()
}
