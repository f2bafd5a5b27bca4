use rust_decimal::Decimal;

use crate::models::Transaction;

pub(crate) const PLACEHOLDER_LABEL: &str = "No transactions yet";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CategoryTotal {
    pub(crate) label: String,
    pub(crate) total: Decimal,
    /// Set only on the single row produced for an empty ledger.
    pub(crate) placeholder: bool,
}

impl CategoryTotal {
    fn placeholder() -> Self {
        Self {
            label: PLACEHOLDER_LABEL.to_string(),
            total: Decimal::ZERO,
            placeholder: true,
        }
    }
}

/// Group by category and sum, in first-seen order. Never returns an empty
/// list: an empty ledger yields one placeholder row with a zero total.
/// Totals saturate at `Decimal::MAX`; a [`super::Ledger`] never gets there
/// because its income is checked on every append.
pub(crate) fn aggregate_by_category(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for txn in transactions {
        match totals.iter_mut().find(|t| t.label == txn.category) {
            Some(existing) => existing.total = existing.total.saturating_add(txn.amount),
            None => totals.push(CategoryTotal {
                label: txn.category.clone(),
                total: txn.amount,
                placeholder: false,
            }),
        }
    }

    if totals.is_empty() {
        totals.push(CategoryTotal::placeholder());
    }
    totals
}
