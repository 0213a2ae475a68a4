//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::CatalogTitle, "Amana Flowers");

    // Loading / errors
    m.insert(Key::Loading, "Loading flowers...");
    m.insert(
        Key::LoadFailed,
        "Failed to load flowers. Please try again later.",
    );
    m.insert(Key::Retry, "Retry");

    // Search & filters
    m.insert(Key::SearchPlaceholder, "Search flowers...");
    m.insert(Key::FilterAll, "All");
    m.insert(Key::FilterAvailable, "Available");
    m.insert(Key::FilterUnavailable, "Unavailable");
    m.insert(Key::ResultCount, "flowers");

    // Empty state
    m.insert(Key::EmptyCollection, "No flowers available.");
    m.insert(Key::EmptyFiltered, "No flowers match your search.");
    m.insert(Key::ClearFilters, "Clear filters");

    // Availability switch tooltip
    m.insert(Key::FlowersAvailable, "Flowers Available");
    m.insert(Key::FlowersUnavailable, "Flowers Unavailable");

    // Pagination
    m.insert(Key::PreviousPage, "Previous");
    m.insert(Key::NextPage, "Next");

    // Preview overlay
    m.insert(Key::Close, "Close");

    // Header toggles
    m.insert(Key::ToggleDarkMode, "Dark mode");
    m.insert(Key::ToggleLightMode, "Light mode");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
