//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Subscription, Task, Theme};

use crate::features::{CatalogState, LoadPhase, Settings};
use state::{CoreState, UiState};
use crate::i18n::{Key, Language, Locale};
pub use message::Message;
pub use state::{App, ImageStore};

impl App {
    /// Create new application instance from the resolved settings on disk
    /// and in the environment
    pub fn new() -> (Self, Task<Message>) {
        Self::with_settings(Settings::load())
    }

    /// Create an application instance and issue the first fetch
    pub fn with_settings(settings: Settings) -> (Self, Task<Message>) {
        let locale = Locale::new(Language::from_code(&settings.display.language));
        tracing::info!(
            "Starting with backend {} and language {}",
            settings.api.base_url,
            locale.language.code()
        );

        let core = CoreState::new(settings, locale);
        let mut app = Self {
            core,
            catalog: CatalogState::new(),
            ui: UiState::new(),
        };

        let init_task = app.start_fetch();
        (app, init_task)
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title with the number of loaded flowers once ready
    pub fn title(&self) -> String {
        let name = self.core.locale.get(Key::CatalogTitle);
        match self.catalog.phase {
            LoadPhase::Ready => format!("{} ({})", name, self.catalog.flowers.len()),
            _ => name.to_string(),
        }
    }

    /// Subscriptions for the loading animation and keyboard shortcuts
    pub fn subscription(&self) -> Subscription<Message> {
        use iced::keyboard;

        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        // Frames only while the loading flower is on screen
        let animation_sub = if subscription_logic::needs_animation_subscription(&self.catalog.phase)
        {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            Subscription::none()
        };

        Subscription::batch([keyboard_sub, animation_sub])
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    use crate::features::LoadPhase;

    pub fn needs_animation_subscription(phase: &LoadPhase) -> bool {
        phase.is_loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FlowerRecord;
    use crate::features::{AvailabilityFilter, ImageSource};
    use crate::features::catalog::tests::sample_flowers;

    pub(super) fn test_app() -> App {
        let mut settings = Settings::default();
        settings.loading.min_display_ms = 0;
        App::with_settings(settings).0
    }

    pub(super) fn loaded_app(flowers: Vec<FlowerRecord>) -> App {
        let mut app = test_app();
        let ticket = app.catalog.current_ticket().unwrap();
        let _ = app.update(Message::FlowersLoaded(ticket, Ok(flowers)));
        app
    }

    mod property_subscriptions {
        use super::*;

        #[test]
        fn frames_only_while_loading() {
            assert!(subscription_logic::needs_animation_subscription(&LoadPhase::Loading));
            assert!(!subscription_logic::needs_animation_subscription(&LoadPhase::Ready));
            assert!(!subscription_logic::needs_animation_subscription(
                &LoadPhase::Failed("x".to_string())
            ));
        }
    }

    #[test]
    fn boot_issues_first_fetch() {
        let app = test_app();
        assert_eq!(app.catalog.phase, LoadPhase::Loading);
        assert!(app.catalog.current_ticket().is_some());
        assert!(app.core.client.is_ok());
    }

    #[test]
    fn boot_with_bad_backend_still_settles_through_fetch() {
        let mut settings = Settings::default();
        settings.api.base_url = "ftp://nowhere".to_string();
        let (app, _task) = App::with_settings(settings);

        assert!(app.core.client.is_err());
        assert_eq!(app.catalog.phase, LoadPhase::Loading);
        assert!(app.catalog.current_ticket().is_some());
    }

    #[test]
    fn title_counts_loaded_flowers() {
        let app = loaded_app(sample_flowers(10, 6));
        assert_eq!(app.title(), "Amana Flowers (10)");
    }

    #[test]
    fn chinese_locale_from_settings() {
        let mut settings = Settings::default();
        settings.display.language = "zh".to_string();
        let (app, _task) = App::with_settings(settings);
        assert_eq!(app.core.locale.language, Language::Chinese);
    }

    mod scenarios {
        use super::*;

        #[test]
        fn empty_backend() {
            let app = loaded_app(Vec::new());
            assert_eq!(app.catalog.phase, LoadPhase::Ready);
            let view = app.catalog.view();
            assert!(view.is_empty());
            assert!(!view.show_pagination());
        }

        #[test]
        fn pagination_and_filter() {
            let mut app = loaded_app(sample_flowers(10, 6));
            assert_eq!(app.catalog.view().visible.len(), 8);

            let _ = app.update(Message::NextPage);
            assert_eq!(app.catalog.view().visible.len(), 2);

            let _ = app.update(Message::FilterSelected(AvailabilityFilter::AvailableOnly));
            let view = app.catalog.view();
            assert_eq!(view.current_page, 1);
            assert_eq!(view.visible.len(), 6);
            assert!(!view.show_pagination());
        }

        #[test]
        fn retry_after_failure() {
            let mut app = test_app();
            let ticket = app.catalog.current_ticket().unwrap();
            let _ = app.update(Message::FlowersLoaded(ticket, Err("HTTP 502".to_string())));
            assert!(matches!(app.catalog.phase, LoadPhase::Failed(_)));

            let _ = app.update(Message::Retry);
            assert_eq!(app.catalog.phase, LoadPhase::Loading);

            let ticket = app.catalog.current_ticket().unwrap();
            let _ = app.update(Message::FlowersLoaded(ticket, Ok(sample_flowers(3, 1))));
            assert_eq!(app.catalog.phase, LoadPhase::Ready);
            assert_eq!(app.catalog.view().visible.len(), 3);
        }

        #[test]
        fn unmatched_search_then_clear() {
            let mut app = loaded_app(sample_flowers(10, 6));
            let _ = app.update(Message::SearchChanged("rose".to_string()));
            assert!(app.catalog.view().is_empty());

            let _ = app.update(Message::ClearFilters);
            assert_eq!(app.catalog.query.search_term, "");
            assert_eq!(app.catalog.query.filter, AvailabilityFilter::All);
            assert_eq!(app.catalog.view().visible.len(), 8);
        }

        #[test]
        fn preview_open_and_close() {
            let mut app = loaded_app(sample_flowers(3, 3));
            let _ = app.update(Message::OpenPreview(ImageSource::Placeholder));
            assert_eq!(app.catalog.selected_image, Some(ImageSource::Placeholder));

            // Clicks on the panel map to Noop
            let _ = app.update(Message::Noop);
            assert_eq!(app.catalog.selected_image, Some(ImageSource::Placeholder));

            let _ = app.update(Message::ClosePreview);
            assert_eq!(app.catalog.selected_image, None);
        }
    }
}
