//! Catalog header: title with the theme and language toggles

use iced::widget::{Space, button, container, row, svg, text, tooltip};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::icons;
use crate::ui::theme::{self, BOLD_WEIGHT};

/// Build the header row above the catalog card
pub fn view(dark_mode: bool, locale: Locale) -> Element<'static, Message> {
    let title = text(locale.get(Key::CatalogTitle))
        .size(30)
        .color(iced::Color::WHITE)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        });

    let (theme_icon, theme_label) = if dark_mode {
        (icons::SUN, locale.get(Key::ToggleLightMode))
    } else {
        (icons::MOON, locale.get(Key::ToggleDarkMode))
    };

    let next_language = locale.language.next();

    let theme_btn = header_button(
        theme_icon,
        theme_label,
        Message::UpdateDarkMode(!dark_mode),
    );
    let language_btn = header_button(
        icons::GLOBE,
        next_language.display_name(),
        Message::UpdateAppLanguage(next_language),
    );

    row![
        Space::new().width(80),
        Space::new().width(Fill),
        title,
        Space::new().width(Fill),
        row![theme_btn, language_btn].spacing(4).width(80),
    ]
    .align_y(Alignment::Center)
    .into()
}

fn header_button(
    icon: &'static str,
    label: &'static str,
    on_press: Message,
) -> Element<'static, Message> {
    tooltip(
        button(
            svg(svg::Handle::from_memory(icon.as_bytes()))
                .width(20)
                .height(20)
                .style(|_theme, _status| svg::Style {
                    color: Some(iced::Color::WHITE),
                }),
        )
        .padding(8)
        .style(|_theme, status| button::Style {
            background: match status {
                button::Status::Hovered => Some(iced::Background::Color(
                    iced::Color::from_rgba(1.0, 1.0, 1.0, 0.15),
                )),
                _ => None,
            },
            border: iced::Border {
                radius: 50.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .on_press(on_press),
        container(text(label).size(12))
            .padding([4, 10])
            .style(theme::tooltip_container),
        tooltip::Position::Bottom,
    )
    .into()
}
