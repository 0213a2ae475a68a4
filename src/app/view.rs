//! Application view rendering

use iced::Element;

use super::App;
use super::message::Message;
use crate::ui::pages::{self, PageContext};

impl App {
    /// Build the window content
    pub fn view(&self) -> Element<'_, Message> {
        pages::catalog::view(
            &self.catalog,
            PageContext {
                images: &self.ui.images,
                hovered: self.ui.hovered_flower.as_deref(),
                spinner_phase: self.ui.spinner_phase,
                dark_mode: self.core.settings.display.dark_mode,
                locale: self.core.locale,
            },
        )
    }
}
