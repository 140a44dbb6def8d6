use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::gateway::errors::SubjectError;

/// Subject value type
///
/// The identity a token is issued for. Subjects are email addresses,
/// validated with an RFC 5322 compliant parser at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject(String);

impl Subject {
    /// Create a new validated subject.
    ///
    /// # Errors
    /// * `InvalidFormat` - Value does not parse as an email address
    pub fn new(subject: String) -> Result<Self, SubjectError> {
        email_address::EmailAddress::from_str(&subject)
            .map(|_| Subject(subject))
            .map_err(|e| SubjectError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// User record as kept by the credential store.
///
/// Owned and persisted by the store; the gateway reads it to verify
/// credentials and resolve authenticated requests, and never holds the
/// plaintext that produced `password_hash`.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: Uuid,
    pub subject: Subject,
    pub full_name: String,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Public projection of a [`UserRecord`], safe to return to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub is_active: bool,
}

impl From<&UserRecord> for Profile {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id.to_string(),
            email: record.subject.to_string(),
            full_name: record.full_name.clone(),
            is_active: record.is_active,
        }
    }
}

/// Command to register a new user with a validated subject.
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub subject: Subject,
    pub full_name: String,
    pub password: String,
}

impl RegisterUserCommand {
    pub fn new(subject: Subject, full_name: String, password: String) -> Self {
        Self {
            subject,
            full_name,
            password,
        }
    }
}

/// Raw login credentials as presented by a client.
///
/// The username is deliberately unvalidated; a malformed value must be
/// indistinguishable from a wrong password at the login boundary.
#[derive(Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Access/refresh token pair returned by login and refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

impl TokenPair {
    pub fn bearer(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "bearer".to_string(),
        }
    }
}
