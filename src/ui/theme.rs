use ratatui::style::{Color, Modifier, Style};

use crate::auth::StrengthLevel;
use crate::controller::AlertKind;

/// Title bar, popups and the text drawn on colored banners.
pub(crate) const BASE: Color = Color::Rgb(30, 30, 46);
/// Raised panels: alternate list rows, gauge track, status bar.
pub(crate) const SURFACE: Color = Color::Rgb(49, 50, 68);
/// Alert line while no alert is showing.
pub(crate) const BANNER_IDLE: Color = Color::Rgb(24, 24, 37);

pub(crate) const TEXT: Color = Color::Rgb(205, 214, 244);
pub(crate) const MUTED: Color = Color::Rgb(127, 132, 156);
pub(crate) const HEADING: Color = Color::Rgb(249, 226, 175);
/// Focused borders, selection, the signed-in user.
pub(crate) const ACCENT: Color = Color::Rgb(137, 180, 250);
pub(crate) const BORDER_IDLE: Color = Color::Rgb(69, 71, 90);

// Feedback: alerts, income, password strength.
pub(crate) const SUCCESS: Color = Color::Rgb(166, 227, 161);
pub(crate) const CAUTION: Color = Color::Rgb(250, 179, 135);
pub(crate) const DANGER: Color = Color::Rgb(243, 139, 168);

/// Slice colors, cycled per category.
pub(crate) const CHART_PALETTE: [Color; 5] = [
    Color::Rgb(0xFF, 0x57, 0x33),
    Color::Rgb(0x33, 0xFF, 0x57),
    Color::Rgb(0x33, 0x57, 0xFF),
    Color::Rgb(0xFF, 0x33, 0xA8),
    Color::Rgb(0xF3, 0xFF, 0x33),
];

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(TEXT)
        .bg(BASE)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn selected_style() -> Style {
    Style::default().fg(BASE).bg(ACCENT)
}

pub(crate) fn normal_style() -> Style {
    Style::default().fg(TEXT)
}

pub(crate) fn dim_style() -> Style {
    Style::default().fg(MUTED)
}

pub(crate) fn alt_row_style() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub(crate) fn status_bar_style() -> Style {
    Style::default().fg(MUTED).bg(SURFACE)
}

pub(crate) fn title_style() -> Style {
    Style::default().fg(MUTED).add_modifier(Modifier::BOLD)
}

pub(crate) fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(BORDER_IDLE)
    }
}

pub(crate) fn alert_style(kind: AlertKind) -> Style {
    let bg = match kind {
        AlertKind::Success => SUCCESS,
        AlertKind::Error => DANGER,
    };
    Style::default()
        .fg(BASE)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn strength_color(level: StrengthLevel) -> Color {
    match level {
        StrengthLevel::Weak => DANGER,
        StrengthLevel::Fair => CAUTION,
        StrengthLevel::Strong => SUCCESS,
    }
}
