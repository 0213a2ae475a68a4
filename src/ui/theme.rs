//! Theme system for the flower catalog
//! Supports both dark and light modes around the Amana green palette

use iced::color;
use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const PAGE: Color = color!(0x17402c);
    pub const CARD: Color = color!(0x1a1a1a);
    pub const ROW: Color = color!(0x222222);
    pub const ROW_HOVER: Color = color!(0x2e2e2e);
    pub const BORDER: Color = color!(0x333333);
    pub const TEXT_MUTED: Color = color!(0x888888);
    pub const TEXT_SECONDARY: Color = color!(0xb3b3b3);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const PAGE: Color = color!(0x2a734f);
    pub const CARD: Color = color!(0xffffff);
    pub const ROW: Color = color!(0xf9fafb);
    pub const ROW_HOVER: Color = color!(0xe5e7eb);
    pub const BORDER: Color = color!(0xdddddd);
    pub const TEXT_MUTED: Color = color!(0x6b7280);
    pub const TEXT_SECONDARY: Color = color!(0x4b5563);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1a);
}

/// Switch and accent colour for available flowers (same for both modes)
pub const AVAILABLE: Color = color!(0x208f58);

/// Switch colour for unavailable flowers
pub const UNAVAILABLE: Color = color!(0xf13536);

/// Switch knob
pub const KNOB: Color = color!(0xd1d5db);

/// Disabled text color (for inactive buttons)
pub const TEXT_DISABLED: Color = Color::from_rgba(0.5, 0.5, 0.5, 0.5);

pub const BOLD_WEIGHT: iced::font::Weight = iced::font::Weight::Bold;

/// Page background behind the catalog card
pub fn page(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::PAGE
    } else {
        light::PAGE
    }
}

/// Get card color based on theme
pub fn card(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::CARD
    } else {
        light::CARD
    }
}

/// Get border color based on theme
pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Get muted text color based on theme
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

/// Get secondary text color based on theme
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Hover background color based on theme
pub fn hover_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.12)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.08)
    }
}

/// Overlay backdrop color
pub fn overlay_backdrop(theme: &Theme, opacity: f32) -> Color {
    if is_dark(theme) {
        Color::from_rgba(0.0, 0.0, 0.0, opacity)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, opacity * 0.9)
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Green page area holding the catalog
pub fn page_container(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(page(theme))),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

/// White card with the records
pub fn card_container(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(card(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}

/// Record row, highlighted under the cursor
pub fn row_container(theme: &Theme, hovered: bool) -> container::Style {
    let bg = match (is_dark(theme), hovered) {
        (true, false) => dark::ROW,
        (true, true) => dark::ROW_HOVER,
        (false, false) => light::ROW,
        (false, true) => light::ROW_HOVER,
    };
    container::Style {
        background: Some(Background::Color(bg)),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
            offset: Vector::new(0.0, 1.0),
            blur_radius: 3.0,
        },
        ..Default::default()
    }
}

/// Dark tooltip bubble
pub fn tooltip_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::BLACK)),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Preview overlay panel
pub fn preview_panel(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(card(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 16.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Primary button style
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(AVAILABLE)),
        text_color: Color::WHITE,
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(color!(0x1a7a4b))),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(color!(0x14613b))),
            ..base
        },
        _ => base,
    }
}

/// Toggle / page button, filled when active
pub fn toggle_button(theme: &Theme, status: button::Status, active: bool) -> button::Style {
    if active {
        return button::Style {
            background: Some(Background::Color(AVAILABLE)),
            text_color: Color::WHITE,
            border: Border {
                radius: 8.0.into(),
                width: 1.0,
                color: AVAILABLE,
            },
            ..Default::default()
        };
    }

    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_primary(theme),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover_bg(theme))),
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: TEXT_DISABLED,
            ..base
        },
        _ => base,
    }
}

/// Icon button (circular)
pub fn icon_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_secondary(theme),
        border: Border {
            radius: 50.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover_bg(theme))),
            text_color: text_primary(theme),
            ..base
        },
        _ => base,
    }
}

/// Transparent button - no background, no hover effect
pub fn transparent_btn(theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_primary(theme),
        border: Border::default(),
        ..Default::default()
    }
}

// ============================================================================
// Input Styles
// ============================================================================

/// Search field
pub fn search_input(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border = match status {
        text_input::Status::Focused { .. } => AVAILABLE,
        _ => border_color(theme),
    };
    text_input::Style {
        background: Background::Color(Color::TRANSPARENT),
        border: Border {
            color: border,
            ..Border::default()
        },
        icon: text_muted(theme),
        placeholder: text_muted(theme),
        value: text_primary(theme),
        selection: Color {
            a: 0.35,
            ..AVAILABLE
        },
    }
}
