//! Flower picture component
//! Renders a record's image from the in-memory store, or the placeholder
//! artwork while it is missing, loading or broken

use iced::widget::{image, svg};
use iced::{ContentFit, Element, Length};

use crate::app::{ImageStore, Message};
use crate::features::ImageSource;
use crate::ui::icons;

/// Build a picture for `source`
pub fn view<'a>(
    source: &ImageSource,
    images: &'a ImageStore,
    width: impl Into<Length>,
    height: impl Into<Length>,
    fit: ContentFit,
) -> Element<'a, Message> {
    let handle = match source {
        ImageSource::Remote(uri) => images.handle(uri),
        ImageSource::Placeholder => None,
    };

    match handle {
        Some(handle) => image(handle.clone())
            .width(width)
            .height(height)
            .content_fit(fit)
            .into(),
        None => svg(svg::Handle::from_memory(icons::FLOWER_PLACEHOLDER.as_bytes()))
            .width(width)
            .height(height)
            .content_fit(fit)
            .into(),
    }
}
