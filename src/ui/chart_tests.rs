#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::chart::PieChart;
use super::theme::CHART_PALETTE;
use crate::ledger::{aggregate_by_category, CategoryTotal};
use crate::models::Transaction;

fn total(label: &str, amount: Decimal) -> CategoryTotal {
    CategoryTotal {
        label: label.into(),
        total: amount,
        placeholder: false,
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_shares_follow_totals() {
    let chart = PieChart::from_series(&[total("food", dec!(75)), total("fuel", dec!(25))]);
    let slices = chart.slices();
    assert_eq!(slices.len(), 2);
    assert!(approx(slices[0].start, 0.0));
    assert!(approx(slices[0].end, 0.75));
    assert!(approx(slices[1].start, 0.75));
    assert!(approx(slices[1].end, 1.0));
    assert!(approx(slices[1].share(), 0.25));
}

#[test]
fn test_palette_cycles_per_slice() {
    let labels: Vec<String> = (0..7).map(|i| format!("c{i}")).collect();
    let data = vec![1.0; 7];
    let chart = PieChart::new(&labels, &data);
    let colors: Vec<_> = chart.slices().iter().map(|s| s.color).collect();
    assert_eq!(colors[0], CHART_PALETTE[0]);
    assert_eq!(colors[4], CHART_PALETTE[4]);
    assert_eq!(colors[5], CHART_PALETTE[0]);
    assert_eq!(colors[6], CHART_PALETTE[1]);
}

#[test]
fn test_placeholder_fills_whole_pie() {
    let series = aggregate_by_category(&[]);
    let chart = PieChart::from_series(&series);
    assert_eq!(chart.slices().len(), 1);
    assert_eq!(chart.slices()[0].label, "No transactions yet");
    assert!(approx(chart.slices()[0].share(), 1.0));
    assert_eq!(chart.slice_at(0.3, -0.2), Some(0));
}

#[test]
fn test_slice_at_clockwise_from_top() {
    // four equal quarters: top-right, bottom-right, bottom-left, top-left
    let chart = PieChart::from_series(&[
        total("a", dec!(1)),
        total("b", dec!(1)),
        total("c", dec!(1)),
        total("d", dec!(1)),
    ]);
    assert_eq!(chart.slice_at(0.5, 0.5), Some(0));
    assert_eq!(chart.slice_at(0.5, -0.5), Some(1));
    assert_eq!(chart.slice_at(-0.5, -0.5), Some(2));
    assert_eq!(chart.slice_at(-0.5, 0.5), Some(3));
}

#[test]
fn test_slice_at_outside_disc() {
    let chart = PieChart::from_series(&[total("a", dec!(1))]);
    assert_eq!(chart.slice_at(0.9, 0.9), None);
}

#[test]
fn test_labels_and_data_length_mismatch_uses_shorter() {
    let labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let chart = PieChart::new(&labels, &[1.0, 1.0]);
    assert_eq!(chart.slices().len(), 2);
}

#[test]
fn test_sample_covers_every_nonzero_slice() {
    let txns = vec![
        Transaction::new(dec!(10), "food").unwrap(),
        Transaction::new(dec!(5), "fuel").unwrap(),
        Transaction::new(dec!(3), "food").unwrap(),
    ];
    let chart = PieChart::from_series(&aggregate_by_category(&txns));
    let groups = chart.sample(0.05, 0.05);
    assert_eq!(groups.len(), 2);
    assert!(groups.iter().all(|g| !g.is_empty()));
    // food is 13/18 of the pie, so it gets most of the points
    assert!(groups[0].len() > groups[1].len());
    for (x, y) in groups.iter().flatten() {
        assert!(x * x + y * y <= 1.0);
    }
}

#[test]
fn test_sample_rejects_non_positive_step() {
    let chart = PieChart::from_series(&[total("a", dec!(1))]);
    let groups = chart.sample(0.0, 0.1);
    assert_eq!(groups.len(), 1);
    assert!(groups[0].is_empty());
}
