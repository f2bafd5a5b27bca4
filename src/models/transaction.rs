use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Error, Result};

/// One ledger entry. Immutable once created.
///
/// The amount is stored as a JSON number carrying every decimal digit, so a
/// reload reads back exactly what was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Transaction {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub(crate) amount: Decimal,
    pub(crate) category: String,
}

impl Transaction {
    /// Build a validated entry. The category is trimmed; the amount must be
    /// strictly positive.
    pub(crate) fn new(amount: Decimal, category: &str) -> Result<Self> {
        let category = category.trim();
        if amount <= Decimal::ZERO || category.is_empty() {
            return Err(Error::InvalidTransaction);
        }
        Ok(Self {
            amount,
            category: category.to_string(),
        })
    }

    /// Parse user-entered amount text such as `"12.50"` or `"1e2"`.
    /// Values outside `Decimal`'s range (beyond 28 fractional digits or
    /// above `Decimal::MAX`) are rejected rather than rounded.
    pub(crate) fn parse_amount(text: &str) -> Result<Decimal> {
        let text = text.trim();
        Decimal::from_str(text)
            .or_else(|_| Decimal::from_scientific(text))
            .map_err(|_| Error::InvalidTransaction)
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.amount > Decimal::ZERO && !self.category.trim().is_empty()
    }

    /// `"food: $12.50"`
    pub(crate) fn display_line(&self) -> String {
        let amount = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{}: ${amount:.2}", self.category)
    }
}
