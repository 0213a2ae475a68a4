//! Availability filter toggles with the match count

use iced::widget::{Space, row, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::features::AvailabilityFilter;
use crate::i18n::{Key, Locale};
use crate::ui::{theme, widgets};

fn label_key(filter: AvailabilityFilter) -> Key {
    match filter {
        AvailabilityFilter::All => Key::FilterAll,
        AvailabilityFilter::AvailableOnly => Key::FilterAvailable,
        AvailabilityFilter::UnavailableOnly => Key::FilterUnavailable,
    }
}

/// Build the filter row; exactly one toggle is active
pub fn view(
    active: AvailabilityFilter,
    filtered_count: usize,
    locale: Locale,
) -> Element<'static, Message> {
    let toggles = AvailabilityFilter::all().iter().map(|filter| {
        widgets::toggle_button(
            locale.get(label_key(*filter)),
            *filter == active,
            Some(Message::FilterSelected(*filter)),
        )
    });

    let count = text(format!("{} {}", filtered_count, locale.get(Key::ResultCount)))
        .size(13)
        .style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        });

    row![
        row(toggles).spacing(8),
        Space::new().width(Fill),
        count,
    ]
    .align_y(Alignment::Center)
    .into()
}
