mod aggregate;

use anyhow::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::models::Transaction;
use crate::storage::{self, KeyValueStore};

#[cfg(test)]
pub(crate) use aggregate::PLACEHOLDER_LABEL;
pub(crate) use aggregate::{aggregate_by_category, CategoryTotal};

/// Append-only transaction log with a running income total.
///
/// `income` always equals the sum of all amounts. Both are written back to
/// the store on every append.
#[derive(Debug, Clone, Default)]
pub(crate) struct Ledger {
    transactions: Vec<Transaction>,
    income: Decimal,
}

/// Income as written under the `income` key: a lossless JSON number.
#[derive(Debug, Serialize, Deserialize)]
#[serde(transparent)]
struct StoredIncome(#[serde(with = "rust_decimal::serde::arbitrary_precision")] Decimal);

impl Ledger {
    /// Load the stored ledger. Records that fail to parse or validate, or
    /// that would push income past `Decimal::MAX`, are dropped with a
    /// warning; an unreadable `transactions` value starts an empty ledger.
    pub(crate) fn load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Self> {
        let raw: Vec<serde_json::Value> = match store.get(storage::KEY_TRANSACTIONS)? {
            Some(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                log::error!(
                    "Malformed JSON stored under '{}', starting empty: {e}",
                    storage::KEY_TRANSACTIONS
                );
                Vec::new()
            }),
            None => Vec::new(),
        };

        let mut ledger = Self::default();
        let mut dropped = 0usize;
        for record in raw {
            let txn = match serde_json::from_value::<Transaction>(record) {
                Ok(txn) if txn.is_valid() => txn,
                _ => {
                    dropped += 1;
                    continue;
                }
            };
            match ledger.income.checked_add(txn.amount) {
                Some(income) => {
                    ledger.income = income;
                    ledger.transactions.push(txn);
                }
                None => dropped += 1,
            }
        }
        if dropped > 0 {
            log::warn!("Dropped {dropped} unreadable or invalid stored transactions");
        }

        if let Some(text) = store.get(storage::KEY_INCOME)? {
            match serde_json::from_str::<StoredIncome>(&text) {
                Ok(StoredIncome(stored)) if stored != ledger.income => log::warn!(
                    "Stored income {stored} disagrees with transactions ({}); using the sum",
                    ledger.income
                ),
                Ok(_) => {}
                Err(e) => log::warn!("Ignoring unreadable stored income: {e}"),
            }
        }

        Ok(ledger)
    }

    /// Validate, append, and persist. An amount that would overflow the
    /// income total is rejected. On a storage failure the in-memory ledger
    /// is left unchanged.
    pub(crate) fn add_transaction<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        amount: Decimal,
        category: &str,
    ) -> crate::error::Result<&Transaction> {
        let txn = Transaction::new(amount, category)?;
        let income = self
            .income
            .checked_add(txn.amount)
            .ok_or(Error::InvalidTransaction)?;

        self.transactions.push(txn);
        if let Err(e) = self.persist(store, income) {
            self.transactions.pop();
            return Err(e.into());
        }
        self.income = income;

        let last = self.transactions.len() - 1;
        Ok(&self.transactions[last])
    }

    fn persist<S: KeyValueStore + ?Sized>(&self, store: &mut S, income: Decimal) -> Result<()> {
        storage::write_json(store, storage::KEY_TRANSACTIONS, &self.transactions)?;
        storage::write_json(store, storage::KEY_INCOME, &StoredIncome(income))
    }

    /// Entries in insertion order, most recent last.
    pub(crate) fn list_transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn income(&self) -> Decimal {
        self.income
    }

    pub(crate) fn len(&self) -> usize {
        self.transactions.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub(crate) fn by_category(&self) -> Vec<CategoryTotal> {
        aggregate_by_category(&self.transactions)
    }
}
