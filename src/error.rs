use thiserror::Error;

pub(crate) type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the command handlers.
///
/// Everything except `Storage` is a user-input failure: it is shown in the
/// alert banner and the app carries on.
#[derive(Error, Debug)]
pub(crate) enum Error {
    #[error("Password must be at least {} characters.", crate::auth::MIN_PASSWORD_LEN)]
    WeakPassword,

    #[error("Invalid username or password.")]
    InvalidCredentials,

    #[error("Please enter a valid amount and category.")]
    InvalidTransaction,

    #[error("Username is required.")]
    MissingUsername,

    #[error("Username '{0}' is already registered.")]
    UsernameTaken(String),

    #[error("Log in first.")]
    NotLoggedIn,

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl Error {
    pub(crate) fn is_input_error(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}
