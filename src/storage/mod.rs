#[cfg(test)]
mod memory;
mod schema;
mod sqlite;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[cfg(test)]
pub(crate) use memory::MemoryStore;
pub(crate) use sqlite::SqliteStore;

pub(crate) const KEY_USERS: &str = "users";
pub(crate) const KEY_LOGGED_IN_USER: &str = "loggedInUser";
pub(crate) const KEY_TRANSACTIONS: &str = "transactions";
pub(crate) const KEY_INCOME: &str = "income";

/// String key-value storage. Values are opaque text; structured values are
/// stored as JSON through [`read_json`] and [`write_json`].
pub(crate) trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Read and deserialize a JSON value. A missing key yields `None`.
pub(crate) fn read_json<T, S>(store: &S, key: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw)
        .with_context(|| format!("Malformed JSON stored under '{key}'"))?;
    Ok(Some(value))
}

pub(crate) fn write_json<T, S>(store: &mut S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)
        .with_context(|| format!("Failed to serialize value for '{key}'"))?;
    store.set(key, &raw)
}
