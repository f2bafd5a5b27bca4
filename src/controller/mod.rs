//! Application state and the command handlers that drive it.
//!
//! The handlers take plain input text, mutate the session/ledger through the
//! key-value store, and return a [`Notice`] describing what changed. They
//! never touch the terminal, so the TUI and the CLI share them.

mod alert;

use std::time::Instant;

use crate::auth::{self, Credentials, Session};
use crate::error::{Error, Result};
use crate::ledger::{CategoryTotal, Ledger};
use crate::models::Transaction;
use crate::storage::KeyValueStore;

pub(crate) use alert::{Alert, AlertKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum View {
    LoggedOut,
    LoggedIn,
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LoggedOut => write!(f, "Login"),
            Self::LoggedIn => write!(f, "Dashboard"),
        }
    }
}

/// State delta reported by a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Notice {
    LoggedIn { username: String },
    LoggedOut,
    Registered { username: String },
    TransactionAdded(Transaction),
}

impl Notice {
    pub(crate) fn message(&self) -> String {
        match self {
            Self::LoggedIn { .. } => "Login successful!".into(),
            Self::LoggedOut => "Logged out.".into(),
            Self::Registered { username } => {
                format!("Account created for {username}. You can log in now.")
            }
            Self::TransactionAdded(_) => "Transaction added!".into(),
        }
    }
}

pub(crate) struct AppState<S: KeyValueStore> {
    store: S,
    view: View,
    session: Session,
    ledger: Ledger,
    chart_series: Vec<CategoryTotal>,
    alert: Option<Alert>,
}

impl<S: KeyValueStore> AppState<S> {
    /// Load the ledger and restore a recorded session, if any.
    pub(crate) fn start(store: S) -> Result<Self> {
        let session = Session::restore(&store)?;
        let ledger = Ledger::load(&store)?;
        log::info!(
            "Loaded {} transactions (income {})",
            ledger.len(),
            ledger.income()
        );

        let mut state = Self {
            store,
            view: View::LoggedOut,
            session,
            ledger,
            chart_series: Vec::new(),
            alert: None,
        };
        if let Some(user) = state.session.user() {
            log::info!("Restored session for '{user}'");
            state.enter_dashboard();
        }
        Ok(state)
    }

    // ── Command handlers ─────────────────────────────────────

    pub(crate) fn on_login_submit(&mut self, username: &str, password: &str) -> Result<Notice> {
        let username = username.trim();
        let password = password.trim();

        if auth::is_weak_password(password) {
            log::info!("Login rejected for '{username}': password too short");
            return Err(Error::WeakPassword);
        }

        let credentials = Credentials::load(&self.store)?;
        if !credentials.validate(username, password) {
            log::info!("Login rejected for '{username}': invalid credentials");
            return Err(Error::InvalidCredentials);
        }

        self.session.login(&mut self.store, username)?;
        self.enter_dashboard();
        log::info!("User '{username}' logged in");
        Ok(Notice::LoggedIn {
            username: username.to_string(),
        })
    }

    pub(crate) fn on_register_submit(&mut self, username: &str, password: &str) -> Result<Notice> {
        let mut credentials = Credentials::load(&self.store)?;
        credentials.register(&mut self.store, username, password.trim())?;

        let username = username.trim().to_string();
        log::info!(
            "Registered '{username}' ({} users on file)",
            credentials.len()
        );
        Ok(Notice::Registered { username })
    }

    pub(crate) fn on_add_transaction(&mut self, amount: &str, category: &str) -> Result<Notice> {
        if self.view != View::LoggedIn {
            return Err(Error::NotLoggedIn);
        }

        let amount = Transaction::parse_amount(amount)?;
        let added = self
            .ledger
            .add_transaction(&mut self.store, amount, category)?
            .clone();
        self.render_chart();
        log::info!(
            "Added {} to '{}' (income now {})",
            added.amount,
            added.category,
            self.ledger.income()
        );
        Ok(Notice::TransactionAdded(added))
    }

    pub(crate) fn on_logout(&mut self) -> Result<Notice> {
        if !self.session.is_logged_in() {
            self.view = View::LoggedOut;
            return Ok(Notice::LoggedOut);
        }
        let user = self.session.user().unwrap_or_default().to_string();
        self.session.logout(&mut self.store)?;
        self.view = View::LoggedOut;
        log::info!("User '{user}' logged out");
        Ok(Notice::LoggedOut)
    }

    /// Turn a handler result into the alert banner. Returns the notice on
    /// success so callers can react to the specific state change.
    pub(crate) fn report(&mut self, result: Result<Notice>) -> Option<Notice> {
        match result {
            Ok(notice) => {
                self.alert = Some(Alert::from(&notice));
                Some(notice)
            }
            Err(err) => {
                if err.is_input_error() {
                    log::info!("Rejected input: {err}");
                } else {
                    log::error!("Storage failure: {err:#}");
                }
                self.alert = Some(Alert::from(&err));
                None
            }
        }
    }

    /// Drop the alert once it has been visible for three seconds.
    /// Returns true when something was dismissed.
    pub(crate) fn dismiss_expired_alert(&mut self, now: Instant) -> bool {
        if self.alert.as_ref().is_some_and(|a| a.is_expired(now)) {
            self.alert = None;
            return true;
        }
        false
    }

    // ── View transitions ─────────────────────────────────────

    fn enter_dashboard(&mut self) {
        self.view = View::LoggedIn;
        self.render_chart();
    }

    /// Recompute the chart series from the current ledger.
    fn render_chart(&mut self) {
        self.chart_series = self.ledger.by_category();
    }

    // ── Accessors ────────────────────────────────────────────

    pub(crate) fn view(&self) -> View {
        self.view
    }

    pub(crate) fn user(&self) -> Option<&str> {
        self.session.user()
    }

    pub(crate) fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub(crate) fn chart_series(&self) -> &[CategoryTotal] {
        &self.chart_series
    }

    pub(crate) fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    pub(crate) fn set_alert(&mut self, alert: Alert) {
        self.alert = Some(alert);
    }
}
