//! Catalog lifecycle handlers: fetch, retry and the loading animation

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::catalog::{FetchTicket, with_min_display};

/// Spinner advance per frame, in turns
const SPINNER_STEP: f32 = 1.0 / 120.0;

impl App {
    /// Handle fetch-related messages
    pub fn handle_catalog(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::FlowersLoaded(ticket, result) => {
                if !self.catalog.settle(*ticket, result.clone()) {
                    return Some(Task::none());
                }
                Some(self.request_visible_images())
            }

            Message::Retry => {
                let Some(ticket) = self.catalog.retry() else {
                    tracing::debug!("Retry ignored while loading");
                    return Some(Task::none());
                };
                self.ui.images.forget_failures();
                Some(self.fetch_task(ticket))
            }

            Message::AnimationTick => {
                self.ui.spinner_phase = (self.ui.spinner_phase + SPINNER_STEP).fract();
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Begin the first fetch
    pub(crate) fn start_fetch(&mut self) -> Task<Message> {
        match self.catalog.begin_fetch() {
            Some(ticket) => self.fetch_task(ticket),
            None => Task::none(),
        }
    }

    /// Request the collection, holding the outcome for the minimum display time
    fn fetch_task(&self, ticket: FetchTicket) -> Task<Message> {
        let min_display = self.core.settings.loading.min_display();
        let client = self.core.client.clone();

        Task::perform(
            with_min_display(
                async move {
                    match client {
                        Ok(client) => client.fetch_flowers().await.map_err(|e| format!("{:#}", e)),
                        Err(e) => Err(e),
                    }
                },
                min_display,
            ),
            move |result| Message::FlowersLoaded(ticket, result),
        )
    }
}
