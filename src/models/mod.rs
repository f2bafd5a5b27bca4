mod transaction;

pub(crate) use transaction::Transaction;

#[cfg(test)]
mod tests;
