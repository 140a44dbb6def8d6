use thiserror::Error;

use auth::AuthenticationError;
use auth::PasswordError;
use auth::TokenError;

/// Error for Subject validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubjectError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for user store operations
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Subject already registered: {0}")]
    AlreadyExists(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Top-level error for all gateway flows.
///
/// The first four variants are the user-visible taxonomy; the rest are
/// internal failure channels that well-formed input never produces.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Unknown subject and wrong password are merged on purpose: no login
    /// error path may reveal whether a username exists.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Already registered: {0}")]
    AlreadyExists(String),

    #[error("Invalid token")]
    InvalidToken,

    #[error("User not found")]
    UserNotFound,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Store error: {0}")]
    Store(String),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::AlreadyExists(subject) => AuthError::AlreadyExists(subject),
            StoreError::Unavailable(message) => AuthError::Store(message),
        }
    }
}

impl From<AuthenticationError> for AuthError {
    fn from(err: AuthenticationError) -> Self {
        match err {
            AuthenticationError::InvalidToken => AuthError::InvalidToken,
            AuthenticationError::UserNotFound => AuthError::UserNotFound,
        }
    }
}
