use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::App;
use super::screens;
use super::theme;
use crate::controller::View;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Alert banner
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], app);
    match app.view() {
        View::LoggedOut => screens::login::render(f, chunks[1], app),
        View::LoggedIn => screens::dashboard::render(f, chunks[1], app),
    }
    render_alert(f, chunks[2], app);
    render_status_bar(f, chunks[3], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_title_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(" PieBudget ", theme::header_style()),
        Span::styled(
            format!(" {} ", app.view()),
            Style::default()
                .fg(theme::ACCENT)
                .bg(theme::BASE)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(user) = app.state.user() {
        spans.push(Span::styled(
            format!(" {user} "),
            Style::default().fg(theme::MUTED).bg(theme::BASE),
        ));
    }

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme::BASE));
    f.render_widget(bar, area);
}

fn render_alert(f: &mut Frame, area: Rect, app: &App) {
    let Some(alert) = app.state.alert() else {
        f.render_widget(
            Paragraph::new("").style(Style::default().bg(theme::BANNER_IDLE)),
            area,
        );
        return;
    };

    let banner = Paragraph::new(Line::from(Span::raw(format!(" {} ", alert.message))))
        .style(theme::alert_style(alert.kind));
    f.render_widget(banner, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let hints = match app.view() {
        View::LoggedOut => " Enter login | Ctrl-R register | Tab field | F1 help | Ctrl-Q quit ",
        View::LoggedIn => {
            " Enter add | Tab field | Up/Down scroll | Ctrl-O logout | F1 help | Ctrl-Q quit "
        }
    };
    let bar = Paragraph::new(Line::from(Span::styled(hints, theme::status_bar_style())))
        .style(theme::status_bar_style());
    f.render_widget(bar, area);
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let section = |title: &'static str| {
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(theme::HEADING)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let row = |text: &'static str| Line::from(Span::styled(text, theme::normal_style()));

    let help_text = vec![
        Line::from(Span::styled(
            " PieBudget Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section(" Login"),
        row("  Tab              Switch username/password"),
        row("  Enter            Log in"),
        row("  Ctrl-R           Register the typed username/password"),
        Line::from(""),
        section(" Dashboard"),
        row("  Tab              Switch amount/category"),
        row("  Enter            Add transaction"),
        row("  Up/Down          Scroll transactions"),
        row("  Home/End         First/last transaction"),
        row("  Ctrl-O           Log out"),
        Line::from(""),
        section(" Anywhere"),
        row("  F1               Toggle this help"),
        row("  Ctrl-Q / Ctrl-C  Quit"),
        Line::from(""),
        Line::from(Span::styled(
            " Press any key to close ",
            Style::default().fg(theme::MUTED),
        )),
    ];

    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 60.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::BASE)),
    );
    f.render_widget(help, popup_area);
}
