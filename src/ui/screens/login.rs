use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

use crate::ui::app::{App, LoginField};
use crate::ui::theme;
use crate::ui::util::mask;

const CARD_WIDTH: u16 = 52;
const CARD_HEIGHT: u16 = 14;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let width = CARD_WIDTH.min(area.width);
    let height = CARD_HEIGHT.min(area.height);
    let card = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    );

    f.render_widget(Clear, card);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style(true))
        .title(Span::styled(
            " Sign in ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(card);
    f.render_widget(block, card);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Username
            Constraint::Length(3), // Password
            Constraint::Length(3), // Strength gauge
            Constraint::Min(1),    // Hints
        ])
        .split(inner);

    let username_focused = app.login_focus == LoginField::Username;
    let password_focused = app.login_focus == LoginField::Password;

    render_field(f, rows[0], "Username", &app.username_input, username_focused);
    render_field(f, rows[1], "Password", &mask(&app.password_input), password_focused);
    render_strength(f, rows[2], app);

    let hints = Paragraph::new(vec![
        Line::from(Span::styled(
            "Enter log in · Ctrl-R register · Tab switch",
            theme::dim_style(),
        )),
        Line::from(Span::styled("F1 help · Ctrl-Q quit", theme::dim_style())),
    ])
    .centered();
    f.render_widget(hints, rows[3]);

    let (field_area, shown) = if username_focused {
        (rows[0], app.username_input.chars().count())
    } else {
        (rows[1], app.password_input.chars().count())
    };
    let offset = u16::try_from(shown).unwrap_or(u16::MAX);
    let max_x = field_area.x + field_area.width.saturating_sub(2);
    f.set_cursor_position(((field_area.x + 1).saturating_add(offset).min(max_x), field_area.y + 1));
}

fn render_field(f: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style(focused))
        .title(Span::styled(format!(" {title} "), theme::title_style()));
    let text = Paragraph::new(Line::from(Span::styled(value, theme::normal_style()))).block(block);
    f.render_widget(text, area);
}

fn render_strength(f: &mut Frame, area: Rect, app: &App) {
    let strength = app.password_strength();
    let level = strength.level();
    let label = if app.password_input.is_empty() {
        String::new()
    } else {
        format!("{}% {level}", strength.percent())
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border_style(false))
                .title(Span::styled(" Strength ", theme::title_style())),
        )
        .gauge_style(
            Style::default()
                .fg(theme::strength_color(level))
                .bg(theme::SURFACE),
        )
        .ratio(strength.ratio())
        .label(label);
    f.render_widget(gauge, area);
}
