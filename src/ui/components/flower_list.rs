//! Flower list component
//! One row per record on the current page: clickable thumbnail, name and
//! the availability switch

use iced::widget::{Space, button, column, container, mouse_area, row, text};
use iced::{Alignment, ContentFit, Element, Fill};

use crate::api::FlowerRecord;
use crate::app::{ImageStore, Message};
use crate::features::ImageSource;
use crate::i18n::{Key, Locale};
use crate::ui::components::flower_picture;
use crate::ui::theme::{self, BOLD_WEIGHT};
use crate::ui::widgets;

const THUMBNAIL_SIZE: f32 = 64.0;

/// Build the list of visible records
pub fn view<'a>(
    flowers: &[&'a FlowerRecord],
    images: &'a ImageStore,
    hovered: Option<&str>,
    locale: Locale,
) -> Element<'a, Message> {
    let rows = flowers.iter().map(|&flower| {
        let is_hovered = hovered == Some(flower.id.as_str());
        flower_row(flower, images, is_hovered, locale)
    });

    column(rows).spacing(16).width(Fill).into()
}

fn flower_row<'a>(
    flower: &'a FlowerRecord,
    images: &'a ImageStore,
    is_hovered: bool,
    locale: Locale,
) -> Element<'a, Message> {
    let source = ImageSource::for_flower(flower);

    let thumbnail = button(
        container(flower_picture::view(
            &source,
            images,
            THUMBNAIL_SIZE,
            THUMBNAIL_SIZE,
            ContentFit::Cover,
        ))
        .style(|_theme| container::Style {
            border: iced::Border {
                radius: 6.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }),
    )
    .padding(0)
    .style(theme::transparent_btn)
    .on_press(Message::OpenPreview(source));

    let name = text(flower.name.as_str())
        .size(18)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        });

    let tooltip_label = if flower.available {
        locale.get(Key::FlowersAvailable)
    } else {
        locale.get(Key::FlowersUnavailable)
    };
    let switch = widgets::availability_switch(
        flower.available,
        tooltip_label,
        Message::AvailabilityToggled(flower.id.clone()),
    );

    let content = row![
        thumbnail,
        Space::new().width(16),
        name,
        Space::new().width(Fill),
        switch,
    ]
    .align_y(Alignment::Center);

    let row_container = container(content)
        .padding(12)
        .width(Fill)
        .style(move |theme| theme::row_container(theme, is_hovered));

    mouse_area(row_container)
        .on_enter(Message::HoverFlower(flower.id.clone(), true))
        .on_exit(Message::HoverFlower(flower.id.clone(), false))
        .into()
}
