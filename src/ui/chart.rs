//! Pie chart over the per-category series.
//!
//! [`PieChart`] holds the geometry (which fraction of the turn each slice
//! covers, which palette color it gets); [`render`] draws it on a Braille
//! canvas next to a legend.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, Borders, Paragraph,
    },
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::f64::consts::TAU;

use crate::ledger::CategoryTotal;
use crate::ui::theme;
use crate::ui::util::{fit, format_amount};

pub(crate) const CHART_TITLE: &str = "Spending Breakdown";

const LEGEND_WIDTH: u16 = 34;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Slice {
    pub(crate) label: String,
    pub(crate) color: Color,
    /// Fractions of a full turn, clockwise from twelve o'clock.
    pub(crate) start: f64,
    pub(crate) end: f64,
}

impl Slice {
    pub(crate) fn share(&self) -> f64 {
        self.end - self.start
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PieChart {
    slices: Vec<Slice>,
    /// Original amounts, parallel to `slices`; `None` for the placeholder.
    amounts: Vec<Option<Decimal>>,
}

impl PieChart {
    /// Build from parallel label/value sequences. Colors cycle through
    /// [`theme::CHART_PALETTE`]. Negative values count as zero.
    pub(crate) fn new(labels: &[String], data: &[f64]) -> Self {
        if labels.len() != data.len() {
            log::warn!(
                "Chart got {} labels for {} values; extra entries ignored",
                labels.len(),
                data.len()
            );
        }

        let total: f64 = data.iter().map(|v| v.max(0.0)).sum();
        let mut cursor = 0.0;
        let slices = labels
            .iter()
            .zip(data)
            .enumerate()
            .map(|(i, (label, &value))| {
                let share = if total > 0.0 {
                    value.max(0.0) / total
                } else {
                    0.0
                };
                let start = cursor;
                cursor += share;
                Slice {
                    label: label.clone(),
                    color: theme::CHART_PALETTE[i % theme::CHART_PALETTE.len()],
                    start,
                    end: cursor,
                }
            })
            .collect();

        Self {
            slices,
            amounts: Vec::new(),
        }
    }

    /// The placeholder row gets a weight of 1 so it fills the whole pie.
    pub(crate) fn from_series(series: &[CategoryTotal]) -> Self {
        let labels: Vec<String> = series.iter().map(|t| t.label.clone()).collect();
        let data: Vec<f64> = series
            .iter()
            .map(|t| {
                if t.placeholder {
                    1.0
                } else {
                    t.total.to_f64().unwrap_or(0.0)
                }
            })
            .collect();

        let mut chart = Self::new(&labels, &data);
        chart.amounts = series
            .iter()
            .map(|t| (!t.placeholder).then_some(t.total))
            .collect();
        chart
    }

    pub(crate) fn slices(&self) -> &[Slice] {
        &self.slices
    }

    /// Index of the slice covering point `(x, y)` of the unit disc, or `None`
    /// outside the disc.
    pub(crate) fn slice_at(&self, x: f64, y: f64) -> Option<usize> {
        if x * x + y * y > 1.0 {
            return None;
        }
        // atan2(x, y) measures clockwise from +y
        let turn = x.atan2(y).rem_euclid(TAU) / TAU;
        self.slices
            .iter()
            .position(|s| turn >= s.start && turn < s.end)
            .or_else(|| {
                // rounding can leave the last sliver uncovered
                self.slices.iter().rposition(|s| s.share() > 0.0)
            })
    }

    /// Sample the unit disc on a grid, grouped per slice.
    pub(crate) fn sample(&self, step_x: f64, step_y: f64) -> Vec<Vec<(f64, f64)>> {
        let mut groups = vec![Vec::new(); self.slices.len()];
        if step_x <= 0.0 || step_y <= 0.0 {
            return groups;
        }

        let mut y = -1.0;
        while y <= 1.0 {
            let mut x = -1.0;
            while x <= 1.0 {
                if let Some(i) = self.slice_at(x, y) {
                    groups[i].push((x, y));
                }
                x += step_x;
            }
            y += step_y;
        }
        groups
    }

    fn amount(&self, index: usize) -> Option<Decimal> {
        self.amounts.get(index).copied().flatten()
    }
}

pub(crate) fn render(f: &mut Frame, area: Rect, chart: &PieChart) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style(false))
        .title(Span::styled(format!(" {CHART_TITLE} "), theme::title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width < 4 || inner.height < 2 {
        return;
    }

    let legend_width = LEGEND_WIDTH.min(inner.width / 2);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(4), Constraint::Length(legend_width)])
        .split(inner);

    render_pie(f, chunks[0], chart);
    render_legend(f, chunks[1], chart);
}

fn render_pie(f: &mut Frame, area: Rect, chart: &PieChart) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    // a terminal cell is roughly twice as tall as it is wide
    let cols = f64::from(area.width);
    let rows = f64::from(area.height) * 2.0;
    let (x_bounds, y_bounds) = if cols >= rows {
        let r = cols / rows;
        ([-r, r], [-1.0, 1.0])
    } else {
        let r = rows / cols;
        ([-1.0, 1.0], [-r, r])
    };

    // Braille packs 2x4 dots per cell
    let step_x = (x_bounds[1] - x_bounds[0]) / (f64::from(area.width) * 2.0);
    let step_y = (y_bounds[1] - y_bounds[0]) / (f64::from(area.height) * 4.0);
    let groups = chart.sample(step_x, step_y);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            for (slice, coords) in chart.slices().iter().zip(&groups) {
                ctx.draw(&Points {
                    coords: coords.as_slice(),
                    color: slice.color,
                });
            }
        });
    f.render_widget(canvas, area);
}

fn render_legend(f: &mut Frame, area: Rect, chart: &PieChart) {
    let label_width = usize::from(area.width).saturating_sub(20).max(4);
    let lines: Vec<Line> = chart
        .slices()
        .iter()
        .enumerate()
        .map(|(i, slice)| {
            let mut spans = vec![
                Span::styled("■ ", Style::default().fg(slice.color)),
                Span::styled(
                    fit(&slice.label, label_width),
                    theme::normal_style(),
                ),
            ];
            if let Some(amount) = chart.amount(i) {
                spans.push(Span::styled(
                    format!(" {:>10} {:>5.1}%", format_amount(amount), slice.share() * 100.0),
                    theme::dim_style(),
                ));
            }
            Line::from(spans)
        })
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}
