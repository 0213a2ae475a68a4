//! Application messages

use iced::keyboard::{Key, Modifiers};

use crate::api::FlowerRecord;
use crate::features::{AvailabilityFilter, FetchTicket, ImageSource};
use crate::i18n::Language;

/// Application messages
#[derive(Clone)]
pub enum Message {
    /// No-op message for event interception (modal panel clicks)
    Noop,

    // ============ Catalog lifecycle ============
    /// A fetch settled (after the minimum display time)
    FlowersLoaded(FetchTicket, Result<Vec<FlowerRecord>, String>),
    /// Re-issue the fetch from `Ready` or `Failed`
    Retry,
    /// Frame tick while the loading flower is shown
    AnimationTick,

    // ============ Search / filter / pagination ============
    SearchChanged(String),
    FilterSelected(AvailabilityFilter),
    /// Reset search and filter
    ClearFilters,
    GoToPage(usize),
    PreviousPage,
    NextPage,

    // ============ Records ============
    OpenPreview(ImageSource),
    ClosePreview,
    /// Image download finished for a URI
    ImageLoaded(String, Result<Vec<u8>, String>),
    /// Cursor entered (`true`) or left (`false`) a record row
    HoverFlower(String, bool),
    /// Availability switch pressed; display only
    AvailabilityToggled(String),

    // ============ Keyboard ============
    KeyPressed(Key, Modifiers),

    // ============ Settings ============
    UpdateDarkMode(bool),
    UpdateAppLanguage(Language),
    SaveSettings,
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Use a macro to reduce boilerplate for simple variants
        macro_rules! simple {
            ($name:literal) => { write!(f, $name) };
            ($name:literal, $($arg:tt)*) => { write!(f, concat!($name, "({})"), format_args!($($arg)*)) };
        }

        match self {
            // High-frequency messages - keep minimal (no data)
            Self::AnimationTick => simple!("AnimationTick"),
            Self::Noop => simple!("Noop"),

            // Large payloads - only show size
            Self::FlowersLoaded(ticket, Ok(v)) => {
                simple!("FlowersLoaded", "{:?}, {} flowers", ticket, v.len())
            }
            Self::FlowersLoaded(ticket, Err(e)) => {
                simple!("FlowersLoaded", "{:?}, error={}", ticket, e)
            }
            Self::ImageLoaded(uri, Ok(bytes)) => {
                simple!("ImageLoaded", "{}, {} bytes", uri, bytes.len())
            }
            Self::ImageLoaded(uri, Err(e)) => simple!("ImageLoaded", "{}, error={}", uri, e),

            Self::Retry => simple!("Retry"),
            Self::SearchChanged(term) => simple!("SearchChanged", "{:?}", term),
            Self::FilterSelected(filter) => simple!("FilterSelected", "{:?}", filter),
            Self::ClearFilters => simple!("ClearFilters"),
            Self::GoToPage(page) => simple!("GoToPage", "{}", page),
            Self::PreviousPage => simple!("PreviousPage"),
            Self::NextPage => simple!("NextPage"),
            Self::OpenPreview(source) => simple!("OpenPreview", "{:?}", source),
            Self::ClosePreview => simple!("ClosePreview"),
            Self::HoverFlower(id, entered) => simple!("HoverFlower", "{}, {}", id, entered),
            Self::AvailabilityToggled(id) => simple!("AvailabilityToggled", "{}", id),
            Self::KeyPressed(key, modifiers) => {
                simple!("KeyPressed", "{:?}, {:?}", key, modifiers)
            }
            Self::UpdateDarkMode(enabled) => simple!("UpdateDarkMode", "{}", enabled),
            Self::UpdateAppLanguage(lang) => simple!("UpdateAppLanguage", "{}", lang.code()),
            Self::SaveSettings => simple!("SaveSettings"),
        }
    }
}
