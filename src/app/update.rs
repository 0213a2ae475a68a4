//! Message update handlers - thin dispatcher delegating to submodules

mod catalog;
mod filters;
mod images;
mod keyboard;
mod preview;
mod settings;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Try each handler in order until one handles the message
        if let Some(task) = self.handle_catalog(&message) {
            return task;
        }
        if let Some(task) = self.handle_filters(&message) {
            return task;
        }
        if let Some(task) = self.handle_preview(&message) {
            return task;
        }
        if let Some(task) = self.handle_images(&message) {
            return task;
        }
        if let Some(task) = self.handle_keyboard(&message) {
            return task;
        }
        if let Some(task) = self.handle_settings(&message) {
            return task;
        }

        // Default: no task
        Task::none()
    }
}
