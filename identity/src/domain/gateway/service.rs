use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use chrono::Utc;
use uuid::Uuid;

use auth::Authenticator;
use auth::PasswordHasher;
use auth::SubjectLookup;
use auth::TokenCodec;
use auth::TokenIssuer;
use auth::TokenType;

use crate::domain::gateway::errors::AuthError;
use crate::domain::gateway::models::Credentials;
use crate::domain::gateway::models::Profile;
use crate::domain::gateway::models::RegisterUserCommand;
use crate::domain::gateway::models::Subject;
use crate::domain::gateway::models::TokenPair;
use crate::domain::gateway::models::UserRecord;
use crate::domain::gateway::ports::AuthGatewayPort;
use crate::domain::gateway::ports::UserStore;

/// Authentication gateway coordinating hashing, token issuance, and the
/// injected user store.
///
/// Holds no per-request state; every flow is a pure function of its inputs
/// and the store's contents.
pub struct AuthGateway<S>
where
    S: UserStore,
{
    store: Arc<S>,
    password_hasher: PasswordHasher,
    codec: TokenCodec,
    issuer: TokenIssuer,
    authenticator: Authenticator,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

/// Adapts the gateway's store to the authenticator's lookup seam.
struct StoreLookup<'a, S>(&'a S);

#[async_trait]
impl<'a, S> SubjectLookup for StoreLookup<'a, S>
where
    S: UserStore,
{
    type Record = UserRecord;

    async fn find(&self, subject: &str) -> Option<UserRecord> {
        self.0.find(subject).await.ok().flatten()
    }
}

impl<S> AuthGateway<S>
where
    S: UserStore,
{
    /// Create a gateway over an injected store.
    ///
    /// # Arguments
    /// * `store` - User credential store implementation
    /// * `codec` - Token codec carrying the process secret and algorithm
    /// * `access_ttl` - Access token lifetime (configured, short)
    /// * `refresh_ttl` - Refresh token lifetime (configured, long)
    pub fn new(store: Arc<S>, codec: TokenCodec, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            store,
            password_hasher: PasswordHasher::new(),
            issuer: TokenIssuer::new(codec.clone()),
            authenticator: Authenticator::new(codec.clone()),
            codec,
            access_ttl,
            refresh_ttl,
        }
    }

    fn issue_pair(&self, subject: &str) -> Result<TokenPair, AuthError> {
        let access_token = self
            .issuer
            .issue_access(subject, self.access_ttl, HashMap::new())?;
        let refresh_token = self.issuer.issue_refresh(subject, self.refresh_ttl)?;

        Ok(TokenPair::bearer(access_token, refresh_token))
    }
}

#[async_trait]
impl<S> AuthGatewayPort for AuthGateway<S>
where
    S: UserStore,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<Profile, AuthError> {
        if self.store.exists(command.subject.as_str()).await? {
            return Err(AuthError::AlreadyExists(command.subject.to_string()));
        }

        let password_hash = self.password_hasher.hash(&command.password)?;

        let record = UserRecord {
            id: Uuid::new_v4(),
            subject: command.subject,
            full_name: command.full_name,
            password_hash,
            is_active: true,
            created_at: Utc::now(),
        };
        let profile = Profile::from(&record);

        // A racing duplicate registration surfaces here as AlreadyExists.
        self.store.insert(record).await?;

        tracing::info!(subject = %profile.email, "User registered");

        Ok(profile)
    }

    async fn login(&self, credentials: Credentials) -> Result<TokenPair, AuthError> {
        // Malformed subject, unknown subject, and wrong password must be
        // indistinguishable to the caller.
        let subject = Subject::new(credentials.username)
            .map_err(|_| AuthError::InvalidCredentials)?;

        let record = self
            .store
            .find(subject.as_str())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self
            .password_hasher
            .verify(&credentials.password, &record.password_hash)
        {
            return Err(AuthError::InvalidCredentials);
        }

        self.issue_pair(record.subject.as_str())
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        let claims = self.codec.decode(refresh_token).map_err(|e| {
            tracing::warn!("Refresh token validation failed: {}", e);
            AuthError::InvalidToken
        })?;

        if claims.token_type != TokenType::Refresh {
            return Err(AuthError::InvalidToken);
        }

        let record = self
            .store
            .find(&claims.sub)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        // The pair is rotated, but the presented refresh token stays valid
        // until its own expiry.
        self.issue_pair(record.subject.as_str())
    }

    async fn current_user(&self, token: &str) -> Result<UserRecord, AuthError> {
        let record = self
            .authenticator
            .authenticate(token, &StoreLookup(self.store.as_ref()))
            .await?;

        Ok(record)
    }

    async fn logout(&self, token: &str) -> Result<(), AuthError> {
        // No revocation list: logout only proves the caller held a valid
        // access token.
        let record = self.current_user(token).await?;

        tracing::info!(subject = %record.subject, "User logged out");

        Ok(())
    }
}
