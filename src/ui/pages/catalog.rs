//! Catalog page
//!
//! Picks what to render from the load phase:
//! - `Loading`: the loading flower only
//! - `Failed`: the error message and retry control only
//! - `Ready`, nothing matches: the empty state with "clear filters"
//! - `Ready`: search, filter toggles, the current page and pagination

use iced::widget::{Space, column, container, scrollable, stack};
use iced::{Element, Fill, Padding};

use crate::app::{ImageStore, Message};
use crate::features::{CatalogState, LoadPhase};
use crate::i18n::Locale;
use crate::ui::components::{
    banner, filter_bar, flower_list, header, image_preview, pagination, search_bar, status,
};
use crate::ui::theme;

const CARD_WIDTH: f32 = 672.0;

/// Everything the page needs besides the catalog itself
pub struct PageContext<'a> {
    pub images: &'a ImageStore,
    pub hovered: Option<&'a str>,
    pub spinner_phase: f32,
    pub dark_mode: bool,
    pub locale: Locale,
}

/// Build the catalog page
pub fn view<'a>(catalog: &'a CatalogState, ctx: PageContext<'a>) -> Element<'a, Message> {
    let locale = ctx.locale;

    let page: Element<'a, Message> = match &catalog.phase {
        LoadPhase::Loading => return status::loading(ctx.spinner_phase, locale),
        LoadPhase::Failed(_) => return status::failed(locale),
        LoadPhase::Ready => {
            let view = catalog.view();

            let card_body: Element<'a, Message> = if view.is_empty() {
                status::empty(!catalog.flowers.is_empty(), locale)
            } else {
                column![
                    search_bar::view(&catalog.query.search_term, locale),
                    filter_bar::view(catalog.query.filter, view.filtered_count, locale),
                    flower_list::view(&view.visible, ctx.images, ctx.hovered, locale),
                    pagination::view(&view, locale),
                ]
                .spacing(20)
                .into()
            };

            let card = container(card_body)
                .padding(20)
                .width(Fill)
                .max_width(CARD_WIDTH)
                .style(theme::card_container);

            let body = container(
                column![
                    header::view(ctx.dark_mode, locale),
                    Space::new().height(16),
                    container(card).center_x(Fill),
                ]
                .max_width(CARD_WIDTH),
            )
            .padding(Padding::new(20.0))
            .width(Fill)
            .center_x(Fill)
            .style(theme::page_container);

            let content = column![banner::view(), body];

            container(scrollable(content).height(Fill))
                .width(Fill)
                .height(Fill)
                .style(theme::page_container)
                .into()
        }
    };

    match &catalog.selected_image {
        Some(source) => stack![page, image_preview::view(source, ctx.images, locale)].into(),
        None => page,
    }
}
