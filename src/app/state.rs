// src/app/state.rs
//! Application state definitions

use std::collections::{HashMap, HashSet};

use iced::widget::image;

use crate::api::FlowersClient;
use crate::features::{CatalogState, Settings};
use crate::i18n::Locale;

/// Main application state
pub struct App {
    /// Core infrastructure (Settings, locale, HTTP client)
    pub core: CoreState,
    /// Catalog data and view state
    pub catalog: CatalogState,
    /// Transient UI state (images, hover, animation)
    pub ui: UiState,
}

/// Core Infrastructure & Services
pub struct CoreState {
    pub settings: Settings,
    pub locale: Locale,
    /// Flowers client, or the reason it could not be built
    pub client: Result<FlowersClient, String>,
}

impl CoreState {
    /// Initialize core services with resolved settings
    pub fn new(settings: Settings, locale: Locale) -> Self {
        let client = FlowersClient::new(&settings.api).map_err(|e| {
            tracing::error!("Failed to create flowers client: {:#}", e);
            format!("{:#}", e)
        });

        Self {
            settings,
            locale,
            client,
        }
    }
}

/// Where an image stands in the in-memory store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStatus {
    Missing,
    Pending,
    Loaded,
    Failed,
}

/// In-memory image handles keyed by the record's image URI
///
/// Nothing is written to disk; the store is rebuilt on every launch.
#[derive(Debug, Default)]
pub struct ImageStore {
    handles: HashMap<String, image::Handle>,
    pending: HashSet<String>,
    failed: HashSet<String>,
}

impl ImageStore {
    pub fn handle(&self, uri: &str) -> Option<&image::Handle> {
        self.handles.get(uri)
    }

    pub fn status(&self, uri: &str) -> ImageStatus {
        if self.handles.contains_key(uri) {
            ImageStatus::Loaded
        } else if self.pending.contains(uri) {
            ImageStatus::Pending
        } else if self.failed.contains(uri) {
            ImageStatus::Failed
        } else {
            ImageStatus::Missing
        }
    }

    /// Mark the missing URIs among `uris` as pending and return them
    pub fn claim<'a>(&mut self, uris: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut claimed = Vec::new();
        for uri in uris {
            if self.status(uri) == ImageStatus::Missing {
                self.pending.insert(uri.to_string());
                claimed.push(uri.to_string());
            }
        }
        claimed
    }

    pub fn insert(&mut self, uri: &str, bytes: Vec<u8>) {
        self.pending.remove(uri);
        self.handles
            .insert(uri.to_string(), image::Handle::from_bytes(bytes));
    }

    pub fn mark_failed(&mut self, uri: &str) {
        self.pending.remove(uri);
        self.failed.insert(uri.to_string());
    }

    /// Give failed images another chance on the next claim
    pub fn forget_failures(&mut self) {
        self.failed.clear();
    }
}

/// UI state
#[derive(Debug, Default)]
pub struct UiState {
    /// Rotation of the loading flower, in turns (0.0 - 1.0)
    pub spinner_phase: f32,
    pub images: ImageStore,
    /// Record id under the cursor
    pub hovered_flower: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_skips_known_images() {
        let mut store = ImageStore::default();
        let first = store.claim(["a.webp", "b.webp"]);
        assert_eq!(first, ["a.webp", "b.webp"]);
        assert_eq!(store.status("a.webp"), ImageStatus::Pending);

        // Pending images are not claimed twice
        assert!(store.claim(["a.webp"]).is_empty());

        store.insert("a.webp", vec![0x89, b'P', b'N', b'G']);
        store.mark_failed("b.webp");
        assert_eq!(store.status("a.webp"), ImageStatus::Loaded);
        assert_eq!(store.status("b.webp"), ImageStatus::Failed);
        assert!(store.handle("a.webp").is_some());
        assert!(store.claim(["a.webp", "b.webp"]).is_empty());
    }

    #[test]
    fn forgotten_failures_are_claimed_again() {
        let mut store = ImageStore::default();
        store.claim(["a.webp"]);
        store.mark_failed("a.webp");

        store.forget_failures();
        assert_eq!(store.status("a.webp"), ImageStatus::Missing);
        assert_eq!(store.claim(["a.webp"]), ["a.webp"]);
    }

    #[test]
    fn bad_backend_url_is_kept_as_error() {
        let mut settings = Settings::default();
        settings.api.base_url = "not a url".to_string();
        let core = CoreState::new(settings, Locale::default());
        assert!(core.client.is_err());
    }
}
