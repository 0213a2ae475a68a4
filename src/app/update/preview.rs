//! Image preview overlay and record row handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::ImageSource;

impl App {
    /// Handle preview, hover and availability switch messages
    pub fn handle_preview(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::OpenPreview(source) => {
                self.catalog.open_preview(source.clone());
                // The overlay may be opened before the thumbnail arrived
                match source {
                    ImageSource::Remote(uri) => Some(self.request_images([uri.as_str()])),
                    ImageSource::Placeholder => Some(Task::none()),
                }
            }

            Message::ClosePreview => {
                self.catalog.close_preview();
                Some(Task::none())
            }

            Message::HoverFlower(id, true) => {
                self.ui.hovered_flower = Some(id.clone());
                Some(Task::none())
            }
            Message::HoverFlower(id, false) => {
                // Leaving one row may arrive after entering the next
                if self.ui.hovered_flower.as_ref() == Some(id) {
                    self.ui.hovered_flower = None;
                }
                Some(Task::none())
            }

            Message::AvailabilityToggled(id) => {
                // Availability is server-owned; the switch is display only
                tracing::debug!("Availability switch pressed for {}", id);
                Some(Task::none())
            }

            Message::Noop => Some(Task::none()),

            _ => None,
        }
    }
}
