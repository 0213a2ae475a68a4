//! Image download handlers
//!
//! Images are fetched for the visible page only and kept in memory.

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle image download results
    pub fn handle_images(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ImageLoaded(uri, Ok(bytes)) => {
                tracing::debug!("Image {} loaded ({} bytes)", uri, bytes.len());
                self.ui.images.insert(uri, bytes.clone());
                Some(Task::none())
            }
            Message::ImageLoaded(uri, Err(e)) => {
                tracing::warn!("Image {} unavailable, using placeholder: {}", uri, e);
                self.ui.images.mark_failed(uri);
                Some(Task::none())
            }
            _ => None,
        }
    }

    /// Request the images of the visible page that are not known yet
    pub(crate) fn request_visible_images(&mut self) -> Task<Message> {
        let uris: Vec<String> = self
            .catalog
            .view()
            .visible
            .iter()
            .filter_map(|flower| flower.image.clone())
            .collect();
        self.request_images(uris.iter().map(String::as_str))
    }

    pub(crate) fn request_images<'a>(
        &mut self,
        uris: impl IntoIterator<Item = &'a str>,
    ) -> Task<Message> {
        let Ok(client) = &self.core.client else {
            return Task::none();
        };

        let claimed = self.ui.images.claim(uris);
        if claimed.is_empty() {
            return Task::none();
        }
        tracing::debug!("Requesting {} images", claimed.len());

        Task::batch(claimed.into_iter().map(|uri| {
            let client = client.clone();
            Task::perform(
                async move {
                    let result = client
                        .fetch_image(&uri)
                        .await
                        .map_err(|e| format!("{:#}", e));
                    (uri, result)
                },
                |(uri, result)| Message::ImageLoaded(uri, result),
            )
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::app::tests::loaded_app;
    use crate::app::Message;
    use crate::app::state::ImageStatus;
    use crate::features::catalog::tests::sample_flowers;

    #[test]
    fn loaded_and_failed_images_are_recorded() {
        let mut app = loaded_app(sample_flowers(3, 3));
        let ok = "https://cdn.example/1.webp".to_string();
        let bad = "https://cdn.example/2.webp".to_string();
        assert_eq!(app.ui.images.status(&ok), ImageStatus::Pending);

        let _ = app.update(Message::ImageLoaded(ok.clone(), Ok(vec![0x89, b'P', b'N', b'G'])));
        let _ = app.update(Message::ImageLoaded(bad.clone(), Err("HTTP 404".to_string())));

        assert_eq!(app.ui.images.status(&ok), ImageStatus::Loaded);
        assert_eq!(app.ui.images.status(&bad), ImageStatus::Failed);
    }

    #[test]
    fn retry_gives_failed_images_another_chance() {
        let mut app = loaded_app(sample_flowers(2, 2));
        let bad = "https://cdn.example/1.webp".to_string();
        let _ = app.update(Message::ImageLoaded(bad.clone(), Err("timeout".to_string())));

        let _ = app.update(Message::Retry);
        assert_eq!(app.ui.images.status(&bad), ImageStatus::Missing);
    }
}
