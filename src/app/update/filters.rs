//! Search, availability filter and pagination handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle query messages; every change refreshes the visible page's images
    pub fn handle_filters(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::SearchChanged(term) => self.catalog.set_search(term.clone()),
            Message::FilterSelected(filter) => self.catalog.set_filter(*filter),
            Message::ClearFilters => self.catalog.clear_filters(),
            Message::GoToPage(page) => self.catalog.go_to_page(*page),
            Message::PreviousPage => self.catalog.previous_page(),
            Message::NextPage => self.catalog.next_page(),
            _ => return None,
        }

        let view = self.catalog.view();
        tracing::debug!(
            "Query {:?}: {} matches, page {}/{}",
            self.catalog.query,
            view.filtered_count,
            view.current_page,
            view.total_pages
        );

        Some(self.request_visible_images())
    }
}
