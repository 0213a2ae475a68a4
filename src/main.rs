//! Amana - a native viewer for the Amana flower catalog
//! Built with iced; fetches the collection once and browses it locally

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod api;
mod app;
mod features;
mod i18n;
mod ui;

use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    // RUST_LOG overrides the default filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("amana=info")),
        )
        .init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window_size((760.0, 900.0))
        .antialiasing(true)
        .run()
}
