//! Catalog derivation
//!
//! Pure search, availability filtering and pagination over the fetched
//! collection. Nothing here can fail: the collection was validated at the
//! API boundary.

pub mod lifecycle;

use crate::api::FlowerRecord;

pub use lifecycle::{CatalogState, FetchTicket, LoadPhase, with_min_display};

/// Number of flowers shown per page
pub const PAGE_SIZE: usize = 8;

/// Availability filter toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AvailabilityFilter {
    #[default]
    All,
    AvailableOnly,
    UnavailableOnly,
}

impl AvailabilityFilter {
    /// All filters, in toggle-row order
    pub fn all() -> &'static [AvailabilityFilter] {
        &[
            AvailabilityFilter::All,
            AvailabilityFilter::AvailableOnly,
            AvailabilityFilter::UnavailableOnly,
        ]
    }

    pub fn matches(&self, flower: &FlowerRecord) -> bool {
        match self {
            AvailabilityFilter::All => true,
            AvailabilityFilter::AvailableOnly => flower.available,
            AvailabilityFilter::UnavailableOnly => !flower.available,
        }
    }
}

/// Where a flower's picture comes from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageSource {
    /// Image URI served by the backend
    Remote(String),
    /// Built-in placeholder artwork
    Placeholder,
}

impl ImageSource {
    pub fn for_flower(flower: &FlowerRecord) -> Self {
        match &flower.image {
            Some(uri) => ImageSource::Remote(uri.clone()),
            None => ImageSource::Placeholder,
        }
    }
}

/// Case-insensitive substring match; an empty term matches everything
pub fn matches_search(name: &str, term: &str) -> bool {
    term.is_empty() || name.to_lowercase().contains(&term.to_lowercase())
}

/// Apply search, then availability, preserving collection order
pub fn filter_flowers<'a>(
    flowers: &'a [FlowerRecord],
    term: &str,
    filter: AvailabilityFilter,
) -> Vec<&'a FlowerRecord> {
    flowers
        .iter()
        .filter(|f| matches_search(&f.name, term))
        .filter(|f| filter.matches(f))
        .collect()
}

/// `ceil(count / PAGE_SIZE)`, zero for an empty result
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

/// Clamp a 1-based page number into `[1, max(total_pages, 1)]`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// The window `[(page-1)*PAGE_SIZE, page*PAGE_SIZE)` of `items`, clipped
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE).min(items.len());
    let end = start.saturating_add(PAGE_SIZE).min(items.len());
    &items[start..end]
}

/// User-controlled search, filter and page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    pub search_term: String,
    pub filter: AvailabilityFilter,
    /// 1-based
    pub current_page: usize,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            filter: AvailabilityFilter::All,
            current_page: 1,
        }
    }
}

impl CatalogQuery {
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    pub fn set_filter(&mut self, filter: AvailabilityFilter) {
        self.filter = filter;
        self.current_page = 1;
    }

    /// Reset search and filter back to the full collection
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn go_to_page(&mut self, page: usize, total_pages: usize) {
        self.current_page = clamp_page(page, total_pages);
    }

    pub fn previous(&mut self, total_pages: usize) {
        self.go_to_page(self.current_page.saturating_sub(1), total_pages);
    }

    pub fn next(&mut self, total_pages: usize) {
        self.go_to_page(self.current_page.saturating_add(1), total_pages);
    }
}

/// The derived, render-ready view of the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView<'a> {
    /// Records on the current page
    pub visible: Vec<&'a FlowerRecord>,
    /// Number of records that passed search and filter
    pub filtered_count: usize,
    pub total_pages: usize,
    /// 1-based, already clamped
    pub current_page: usize,
}

impl CatalogView<'_> {
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Pagination controls are only worth showing with more than one page
    pub fn show_pagination(&self) -> bool {
        self.total_pages > 1
    }
}

/// Derive the visible page from the collection and the current query
pub fn derive<'a>(flowers: &'a [FlowerRecord], query: &CatalogQuery) -> CatalogView<'a> {
    let filtered = filter_flowers(flowers, &query.search_term, query.filter);
    let filtered_count = filtered.len();
    let total_pages = total_pages(filtered_count);
    let current_page = clamp_page(query.current_page, total_pages);
    let visible = page_slice(&filtered, current_page).to_vec();

    CatalogView {
        visible,
        filtered_count,
        total_pages,
        current_page,
    }
}
