#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::error::Error;

// ── Transaction::new ──────────────────────────────────────────

#[test]
fn test_new_trims_category() {
    let txn = Transaction::new(dec!(10), "  food ").unwrap();
    assert_eq!(txn.category, "food");
    assert_eq!(txn.amount, dec!(10));
}

#[test]
fn test_new_rejects_zero_and_negative() {
    assert!(matches!(
        Transaction::new(Decimal::ZERO, "food"),
        Err(Error::InvalidTransaction)
    ));
    assert!(matches!(
        Transaction::new(dec!(-4.50), "food"),
        Err(Error::InvalidTransaction)
    ));
}

#[test]
fn test_new_rejects_blank_category() {
    assert!(matches!(
        Transaction::new(dec!(1), ""),
        Err(Error::InvalidTransaction)
    ));
    assert!(matches!(
        Transaction::new(dec!(1), " \t "),
        Err(Error::InvalidTransaction)
    ));
}

#[test]
fn test_small_amount_is_valid() {
    let txn = Transaction::new(dec!(0.01), "coffee").unwrap();
    assert!(txn.is_valid());
}

// ── parse_amount ──────────────────────────────────────────────

#[test]
fn test_parse_amount_plain() {
    assert_eq!(Transaction::parse_amount("12.50").unwrap(), dec!(12.50));
    assert_eq!(Transaction::parse_amount(" 7 ").unwrap(), dec!(7));
}

#[test]
fn test_parse_amount_scientific() {
    assert_eq!(Transaction::parse_amount("1e2").unwrap(), dec!(100));
}

#[test]
fn test_parse_amount_rejects_garbage() {
    for input in ["", "abc", "NaN", "inf", "12abc", "$5"] {
        assert!(
            matches!(Transaction::parse_amount(input), Err(Error::InvalidTransaction)),
            "accepted {input:?}"
        );
    }
}

// ── Display / serde ───────────────────────────────────────────

#[test]
fn test_display_line_two_decimals() {
    let txn = Transaction::new(dec!(5), "fuel").unwrap();
    assert_eq!(txn.display_line(), "fuel: $5.00");
    let txn = Transaction::new(dec!(3.456), "food").unwrap();
    assert_eq!(txn.display_line(), "food: $3.46");
}

#[test]
fn test_deserialize_numeric_amount() {
    let txns: Vec<Transaction> =
        serde_json::from_str(r#"[{"amount":10,"category":"food"},{"amount":2.5,"category":"fuel"}]"#)
            .unwrap();
    assert_eq!(txns[0].amount, dec!(10));
    assert_eq!(txns[1].amount, dec!(2.5));
    assert_eq!(txns[1].category, "fuel");
}

#[test]
fn test_is_valid_flags_bad_records() {
    let bad = Transaction {
        amount: dec!(-1),
        category: "food".into(),
    };
    assert!(!bad.is_valid());
    let blank = Transaction {
        amount: dec!(1),
        category: "  ".into(),
    };
    assert!(!blank.is_valid());
}
