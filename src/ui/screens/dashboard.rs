use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::app::{App, EntryField};
use crate::ui::chart;
use crate::ui::theme;
use crate::ui::util::{fit, format_amount};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Summary cards
            Constraint::Min(8),    // Chart + entry/list
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    chart::render(f, body[0], &app.chart);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Amount
            Constraint::Length(3), // Category
            Constraint::Min(3),    // Transaction list
        ])
        .split(body[1]);

    render_entry_form(f, right[0], right[1], app);
    render_transaction_list(f, right[2], app);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(area);

    let ledger = app.state.ledger();
    render_card(
        f,
        cards[0],
        "Signed in as",
        app.state.user().unwrap_or("-"),
        theme::ACCENT,
    );
    render_card(
        f,
        cards[1],
        "Income",
        &format_amount(ledger.income()),
        theme::SUCCESS,
    );
    render_card(
        f,
        cards[2],
        "Transactions",
        &ledger.len().to_string(),
        theme::TEXT,
    );
}

fn render_card(f: &mut Frame, area: Rect, title: &str, value: &str, color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style(false))
        .title(Span::styled(format!(" {title} "), theme::title_style()));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_entry_form(f: &mut Frame, amount_area: Rect, category_area: Rect, app: &App) {
    let amount_focused = app.entry_focus == EntryField::Amount;
    let fields = [
        (amount_area, " Amount ", &app.amount_input, amount_focused),
        (category_area, " Category ", &app.category_input, !amount_focused),
    ];

    for (area, title, value, focused) in fields {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style(focused))
            .title(Span::styled(title, theme::title_style()));
        let input = Paragraph::new(Line::from(Span::styled(
            value.as_str(),
            theme::normal_style(),
        )))
        .block(block);
        f.render_widget(input, area);

        if focused {
            let offset = u16::try_from(value.chars().count()).unwrap_or(u16::MAX);
            let max_x = area.x + area.width.saturating_sub(2);
            f.set_cursor_position(((area.x + 1).saturating_add(offset).min(max_x), area.y + 1));
        }
    }
}

fn render_transaction_list(f: &mut Frame, area: Rect, app: &App) {
    let transactions = app.state.ledger().list_transactions();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style(false))
        .title(Span::styled(
            format!(" Transactions ({}) ", transactions.len()),
            theme::title_style(),
        ));

    if transactions.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No transactions yet", theme::dim_style())),
            Line::from(Span::styled(
                "Type an amount and category, then press Enter",
                theme::dim_style(),
            )),
        ])
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let page = usize::from(area.height.saturating_sub(2)).max(1);
    let width = usize::from(area.width.saturating_sub(2));
    let lines: Vec<Line> = transactions
        .iter()
        .enumerate()
        .skip(app.cursor.offset)
        .take(page)
        .map(|(i, txn)| {
            let style = if i == app.cursor.selected {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            Line::from(Span::styled(fit(&txn.display_line(), width), style))
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}
