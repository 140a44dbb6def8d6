use async_trait::async_trait;

use crate::token::TokenCodec;
use crate::token::TokenType;

/// Resolves a subject string to whatever record the host application keeps
/// for it. Implemented by the caller's user store; the authenticator stays
/// storage-agnostic.
#[async_trait]
pub trait SubjectLookup: Send + Sync {
    type Record;

    async fn find(&self, subject: &str) -> Option<Self::Record>;
}

/// Validates bearer tokens on every authenticated request.
///
/// Decodes the presented token, requires it to be an access token, and
/// resolves its subject through the injected lookup. Does no I/O of its own.
pub struct Authenticator {
    codec: TokenCodec,
}

/// Authentication operation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid token")]
    InvalidToken,

    #[error("User not found")]
    UserNotFound,
}

impl Authenticator {
    pub fn new(codec: TokenCodec) -> Self {
        Self { codec }
    }

    /// Validate a bearer token and resolve its subject.
    ///
    /// A refresh token presented here is rejected as `InvalidToken` even
    /// though it decodes cleanly; only access tokens authorize requests.
    ///
    /// # Errors
    /// * `InvalidToken` - Token is malformed, mis-signed, expired, or not an access token
    /// * `UserNotFound` - Token verified but its subject has no record
    pub async fn authenticate<L>(
        &self,
        token: &str,
        lookup: &L,
    ) -> Result<L::Record, AuthenticationError>
    where
        L: SubjectLookup,
    {
        let claims = self
            .codec
            .decode(token)
            .map_err(|_| AuthenticationError::InvalidToken)?;

        if claims.token_type != TokenType::Access {
            return Err(AuthenticationError::InvalidToken);
        }

        lookup
            .find(&claims.sub)
            .await
            .ok_or(AuthenticationError::UserNotFound)
    }
}

/// Extract the token from a standard bearer-auth header value.
///
/// Returns `None` unless the value is exactly `Bearer <token>`.
pub fn extract_bearer(header_value: &str) -> Option<&str> {
    header_value
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::Duration;

    use super::*;
    use crate::token::TokenIssuer;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    struct MapLookup(HashMap<String, String>);

    #[async_trait]
    impl SubjectLookup for MapLookup {
        type Record = String;

        async fn find(&self, subject: &str) -> Option<String> {
            self.0.get(subject).cloned()
        }
    }

    fn lookup_with(subject: &str) -> MapLookup {
        let mut users = HashMap::new();
        users.insert(subject.to_string(), format!("record for {subject}"));
        MapLookup(users)
    }

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(TokenCodec::hs256(SECRET))
    }

    fn authenticator() -> Authenticator {
        Authenticator::new(TokenCodec::hs256(SECRET))
    }

    #[tokio::test]
    async fn authenticates_valid_access_token() {
        let token = issuer()
            .issue_access("user@example.com", Duration::minutes(30), HashMap::new())
            .unwrap();

        let record = authenticator()
            .authenticate(&token, &lookup_with("user@example.com"))
            .await
            .expect("Authentication failed");

        assert_eq!(record, "record for user@example.com");
    }

    #[tokio::test]
    async fn rejects_refresh_token_presented_as_bearer() {
        let token = issuer()
            .issue_refresh("user@example.com", Duration::days(7))
            .unwrap();

        let result = authenticator()
            .authenticate(&token, &lookup_with("user@example.com"))
            .await;

        assert!(matches!(result, Err(AuthenticationError::InvalidToken)));
    }

    #[tokio::test]
    async fn rejects_expired_access_token() {
        let token = issuer()
            .issue_access("user@example.com", Duration::zero(), HashMap::new())
            .unwrap();

        let result = authenticator()
            .authenticate(&token, &lookup_with("user@example.com"))
            .await;

        assert!(matches!(result, Err(AuthenticationError::InvalidToken)));
    }

    #[tokio::test]
    async fn rejects_token_signed_with_other_secret() {
        let foreign_issuer = TokenIssuer::new(TokenCodec::hs256(b"other_secret_32_bytes_long_here!!"));
        let token = foreign_issuer
            .issue_access("user@example.com", Duration::minutes(30), HashMap::new())
            .unwrap();

        let result = authenticator()
            .authenticate(&token, &lookup_with("user@example.com"))
            .await;

        assert!(matches!(result, Err(AuthenticationError::InvalidToken)));
    }

    #[tokio::test]
    async fn rejects_subject_without_record() {
        let token = issuer()
            .issue_access("ghost@example.com", Duration::minutes(30), HashMap::new())
            .unwrap();

        let result = authenticator()
            .authenticate(&token, &lookup_with("user@example.com"))
            .await;

        assert!(matches!(result, Err(AuthenticationError::UserNotFound)));
    }

    #[tokio::test]
    async fn rejects_garbage_token() {
        let result = authenticator()
            .authenticate("invalid.token.here", &lookup_with("user@example.com"))
            .await;

        assert!(matches!(result, Err(AuthenticationError::InvalidToken)));
    }

    #[test]
    fn extract_bearer_parses_header_value() {
        assert_eq!(extract_bearer("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(extract_bearer("Bearer "), None);
        assert_eq!(extract_bearer("bearer abc"), None);
        assert_eq!(extract_bearer("Basic abc"), None);
        assert_eq!(extract_bearer(""), None);
    }
}
