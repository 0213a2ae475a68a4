//! Settings update handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::i18n::Locale;

impl App {
    /// Handle display settings messages
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::UpdateDarkMode(enabled) => {
                self.core.settings.display.dark_mode = *enabled;
                tracing::info!("Dark mode: {}", enabled);
                Some(Task::done(Message::SaveSettings))
            }
            Message::UpdateAppLanguage(language) => {
                self.core.settings.display.language = language.code().to_string();
                self.core.locale = Locale::new(*language);
                tracing::info!("Language changed to: {}", language.code());
                Some(Task::done(Message::SaveSettings))
            }
            Message::SaveSettings => {
                if let Err(e) = self.core.settings.save() {
                    tracing::error!("Failed to save settings: {}", e);
                } else {
                    tracing::info!("Settings saved successfully");
                }
                Some(Task::none())
            }
            _ => None,
        }
    }
}
