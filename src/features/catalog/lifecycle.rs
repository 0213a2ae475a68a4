//! Fetch lifecycle of the catalog
//!
//! `CatalogState` is the whole mutable state of the catalog view. The iced
//! application owns one and routes messages into it; every transition lives
//! here so it can be tested without a runtime.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use super::{AvailabilityFilter, CatalogQuery, CatalogView, ImageSource, derive};
use crate::api::FlowerRecord;

/// Message shown whenever the collection could not be loaded
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load flowers. Please try again later.";

/// Where the catalog is in its fetch cycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
    /// Carries the user-facing message; the cause is only logged
    Failed(String),
}

impl LoadPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadPhase::Loading)
    }
}

/// Generation number of one fetch
///
/// Results are only applied when they carry the ticket of the fetch that is
/// currently outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket(u64);

/// Catalog view state
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    /// Last successfully fetched collection, in response order
    pub flowers: Vec<FlowerRecord>,
    pub phase: LoadPhase,
    pub query: CatalogQuery,
    /// Image shown in the preview overlay, if open
    pub selected_image: Option<ImageSource>,
    last_ticket: u64,
    in_flight: Option<FetchTicket>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter `Loading` and hand out a ticket for a new request
    ///
    /// Returns `None` while a request is already outstanding.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if let Some(ticket) = self.current_ticket() {
            debug!("Fetch {:?} still outstanding, not starting another", ticket);
            return None;
        }

        self.last_ticket += 1;
        let ticket = FetchTicket(self.last_ticket);
        self.in_flight = Some(ticket);
        self.phase = LoadPhase::Loading;
        Some(ticket)
    }

    /// Re-issue the fetch; only reachable from `Ready` or `Failed`
    pub fn retry(&mut self) -> Option<FetchTicket> {
        if self.phase.is_loading() {
            return None;
        }
        info!("Retrying flower fetch");
        self.begin_fetch()
    }

    /// Apply the outcome of a fetch
    ///
    /// Returns `false` when the ticket is stale and the result was dropped.
    pub fn settle(&mut self, ticket: FetchTicket, result: Result<Vec<FlowerRecord>, String>) -> bool {
        if self.current_ticket() != Some(ticket) {
            warn!("Discarding result of stale fetch {:?}", ticket);
            return false;
        }
        self.in_flight = None;

        match result {
            Ok(flowers) => {
                info!("Catalog ready with {} flowers", flowers.len());
                self.flowers = flowers;
                self.phase = LoadPhase::Ready;
                let total = self.view().total_pages;
                self.query.go_to_page(self.query.current_page, total);
            }
            Err(cause) => {
                error!("Failed to load flowers: {}", cause);
                self.phase = LoadPhase::Failed(FETCH_FAILED_MESSAGE.to_string());
            }
        }
        true
    }

    /// Ticket of the outstanding request, if any
    pub fn current_ticket(&self) -> Option<FetchTicket> {
        self.in_flight
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.query.set_search(term);
    }

    pub fn set_filter(&mut self, filter: AvailabilityFilter) {
        self.query.set_filter(filter);
    }

    pub fn clear_filters(&mut self) {
        self.query.clear();
    }

    pub fn go_to_page(&mut self, page: usize) {
        let total = self.view().total_pages;
        self.query.go_to_page(page, total);
    }

    pub fn previous_page(&mut self) {
        let total = self.view().total_pages;
        self.query.previous(total);
    }

    pub fn next_page(&mut self) {
        let total = self.view().total_pages;
        self.query.next(total);
    }

    /// Show `source` in the overlay, replacing any open preview
    pub fn open_preview(&mut self, source: ImageSource) {
        self.selected_image = Some(source);
    }

    pub fn close_preview(&mut self) {
        self.selected_image = None;
    }

    /// Derived page for the current state
    pub fn view(&self) -> CatalogView<'_> {
        derive(&self.flowers, &self.query)
    }
}

/// Await `fetch`, then hold the result for `min_display`
///
/// The hold starts when the request settles, whatever its outcome, so the
/// loading indicator never flashes on fast responses.
pub async fn with_min_display<F>(fetch: F, min_display: Duration) -> F::Output
where
    F: Future,
{
    let output = fetch.await;
    tokio::time::sleep(min_display).await;
    output
}
