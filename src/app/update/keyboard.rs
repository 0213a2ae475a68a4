// src/app/update/keyboard.rs
//! Keyboard handlers

use iced::Task;
use iced::keyboard::{Key, key::Named};

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::LoadPhase;

/// What a key press means for the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    ClosePreview,
    PreviousPage,
    NextPage,
}

/// Map a key to an action given whether the overlay is open and the catalog ready
pub fn key_action(key: &Key, preview_open: bool, ready: bool) -> Option<KeyAction> {
    match key {
        Key::Named(Named::Escape) if preview_open => Some(KeyAction::ClosePreview),
        Key::Named(Named::PageUp) if ready && !preview_open => Some(KeyAction::PreviousPage),
        Key::Named(Named::PageDown) if ready && !preview_open => Some(KeyAction::NextPage),
        _ => None,
    }
}

impl App {
    /// Handle keyboard-related messages
    pub fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::KeyPressed(key, _modifiers) => {
                let action = key_action(
                    key,
                    self.catalog.selected_image.is_some(),
                    self.catalog.phase == LoadPhase::Ready,
                );
                match action {
                    Some(KeyAction::ClosePreview) => Some(self.update(Message::ClosePreview)),
                    Some(KeyAction::PreviousPage) => Some(self.update(Message::PreviousPage)),
                    Some(KeyAction::NextPage) => Some(self.update(Message::NextPage)),
                    None => Some(Task::none()),
                }
            }
            _ => None,
        }
    }
}
