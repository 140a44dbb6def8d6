use async_trait::async_trait;

use crate::domain::gateway::errors::AuthError;
use crate::domain::gateway::errors::StoreError;
use crate::domain::gateway::models::Credentials;
use crate::domain::gateway::models::Profile;
use crate::domain::gateway::models::RegisterUserCommand;
use crate::domain::gateway::models::TokenPair;
use crate::domain::gateway::models::UserRecord;

/// Port for the authentication flows consumed by the route handlers.
#[async_trait]
pub trait AuthGatewayPort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Errors
    /// * `AlreadyExists` - Subject is already registered
    /// * `Password` - Hashing operation failed
    /// * `Store` - Store backend failed
    async fn register(&self, command: RegisterUserCommand) -> Result<Profile, AuthError>;

    /// Verify credentials and issue an access/refresh token pair.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown subject or wrong password, merged
    async fn login(&self, credentials: Credentials) -> Result<TokenPair, AuthError>;

    /// Exchange a refresh token for a brand-new token pair.
    ///
    /// # Errors
    /// * `InvalidToken` - Token is malformed, expired, or not a refresh token
    /// * `UserNotFound` - Token verified but its subject left the store
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError>;

    /// Resolve the user behind a bearer access token.
    ///
    /// # Errors
    /// * `InvalidToken` - Token is malformed, expired, or not an access token
    /// * `UserNotFound` - Token verified but its subject left the store
    async fn current_user(&self, token: &str) -> Result<UserRecord, AuthError>;

    /// Acknowledge a logout for the holder of a valid access token.
    ///
    /// Tokens stay valid until they expire; there is no revocation list.
    ///
    /// # Errors
    /// * `InvalidToken` - Presented token does not authenticate
    /// * `UserNotFound` - Token verified but its subject left the store
    async fn logout(&self, token: &str) -> Result<(), AuthError>;
}

/// Persistence port for user credential records, keyed by subject.
///
/// Implementations own their concurrency discipline: `insert` must be atomic
/// per subject, so concurrent registrations of one subject cannot both
/// succeed.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Retrieve the record for a subject, if registered.
    async fn find(&self, subject: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Persist a new record under its subject.
    ///
    /// # Errors
    /// * `AlreadyExists` - Subject is already registered
    async fn insert(&self, record: UserRecord) -> Result<(), StoreError>;

    /// Whether a subject is registered.
    async fn exists(&self, subject: &str) -> Result<bool, StoreError>;
}
