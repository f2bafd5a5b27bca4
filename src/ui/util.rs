use rust_decimal::{Decimal, RoundingStrategy};

/// Dollar amount rounded to cents, with comma-grouped whole dollars:
/// `1234567.891` → `"$1,234,567.89"`.
pub(crate) fn format_amount(val: Decimal) -> String {
    let cents = val
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{cents:.2}");
    let (dollars, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if val.is_sign_negative() && !cents.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{frac}")
}

/// Fit `s` into exactly `width` columns: shorter text is space-padded,
/// longer text is cut and ends in `…`.
pub(crate) fn fit(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len <= width {
        return format!("{s}{}", " ".repeat(width - len));
    }
    match width {
        0 => String::new(),
        _ => s.chars().take(width - 1).chain(['…']).collect(),
    }
}

/// Password field contents as bullets, one per character.
pub(crate) fn mask(s: &str) -> String {
    "•".repeat(s.chars().count())
}
