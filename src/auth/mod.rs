mod strength;

use anyhow::Result;
use std::collections::BTreeMap;

use crate::error::Error;
use crate::storage::{self, KeyValueStore};

pub(crate) use strength::{PasswordStrength, StrengthLevel};

pub(crate) const MIN_PASSWORD_LEN: usize = 6;

pub(crate) fn is_weak_password(password: &str) -> bool {
    password.chars().count() < MIN_PASSWORD_LEN
}

/// Username → password map persisted under the `users` key.
///
/// Passwords are stored and compared as plain text.
#[derive(Debug, Clone, Default)]
pub(crate) struct Credentials {
    users: BTreeMap<String, String>,
}

impl Credentials {
    pub(crate) fn load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Self> {
        let users = storage::read_json(store, storage::KEY_USERS)?.unwrap_or_default();
        Ok(Self { users })
    }

    fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        storage::write_json(store, storage::KEY_USERS, &self.users)
    }

    /// Exact match against the stored password. Unknown users and empty
    /// stored passwords never match.
    pub(crate) fn validate(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .is_some_and(|stored| !stored.is_empty() && stored == password)
    }

    pub(crate) fn register<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        username: &str,
        password: &str,
    ) -> crate::error::Result<()> {
        let username = username.trim();
        if username.is_empty() {
            return Err(Error::MissingUsername);
        }
        if is_weak_password(password) {
            return Err(Error::WeakPassword);
        }
        if self.users.contains_key(username) {
            return Err(Error::UsernameTaken(username.to_string()));
        }
        self.users
            .insert(username.to_string(), password.to_string());
        self.save(store)?;
        Ok(())
    }

    pub(crate) fn len(&self) -> usize {
        self.users.len()
    }
}

/// Who is logged in on this machine, mirrored to the `loggedInUser` key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Session {
    logged_in_user: Option<String>,
}

impl Session {
    /// Read a previously recorded session. An empty value counts as none.
    pub(crate) fn restore<S: KeyValueStore + ?Sized>(store: &S) -> Result<Self> {
        let logged_in_user = store
            .get(storage::KEY_LOGGED_IN_USER)?
            .filter(|user| !user.is_empty());
        Ok(Self { logged_in_user })
    }

    pub(crate) fn login<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        username: &str,
    ) -> Result<()> {
        store.set(storage::KEY_LOGGED_IN_USER, username)?;
        self.logged_in_user = Some(username.to_string());
        Ok(())
    }

    pub(crate) fn logout<S: KeyValueStore + ?Sized>(&mut self, store: &mut S) -> Result<()> {
        store.remove(storage::KEY_LOGGED_IN_USER)?;
        self.logged_in_user = None;
        Ok(())
    }

    pub(crate) fn user(&self) -> Option<&str> {
        self.logged_in_user.as_deref()
    }

    pub(crate) fn is_logged_in(&self) -> bool {
        self.logged_in_user.is_some()
    }
}
