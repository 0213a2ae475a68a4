//! Pagination controls
//! Previous / page numbers / Next; only rendered with more than one page

use iced::widget::{Space, button, row, svg, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::features::catalog::CatalogView;
use crate::i18n::{Key, Locale};
use crate::ui::{icons, theme, widgets};

/// Build the pagination row for `view`
pub fn view(view: &CatalogView<'_>, locale: Locale) -> Element<'static, Message> {
    if !view.show_pagination() {
        return Space::new().width(0).height(0).into();
    }

    let previous = step_button(
        icons::CHEVRON_LEFT,
        locale.get(Key::PreviousPage),
        true,
        view.has_previous().then_some(Message::PreviousPage),
    );
    let next = step_button(
        icons::CHEVRON_RIGHT,
        locale.get(Key::NextPage),
        false,
        view.has_next().then_some(Message::NextPage),
    );

    let current = view.current_page;
    let pages = (1..=view.total_pages).map(|page| {
        widgets::toggle_button(
            page.to_string(),
            page == current,
            Some(Message::GoToPage(page)),
        )
    });

    row![
        previous,
        Space::new().width(Fill),
        row(pages).spacing(6),
        Space::new().width(Fill),
        next,
    ]
    .align_y(Alignment::Center)
    .into()
}

fn step_button(
    icon: &'static str,
    label: &'static str,
    icon_first: bool,
    on_press: Option<Message>,
) -> Element<'static, Message> {
    let enabled = on_press.is_some();
    let chevron = svg(svg::Handle::from_memory(icon.as_bytes()))
        .width(16)
        .height(16)
        .style(move |theme, _status| svg::Style {
            color: Some(if enabled {
                theme::text_primary(theme)
            } else {
                theme::TEXT_DISABLED
            }),
        });
    let label = text(label).size(14);

    let content = if icon_first {
        row![chevron, Space::new().width(4), label]
    } else {
        row![label, Space::new().width(4), chevron]
    }
    .align_y(Alignment::Center);

    button(content)
        .padding([6, 12])
        .style(|theme, status| theme::toggle_button(theme, status, false))
        .on_press_maybe(on_press)
        .into()
}
