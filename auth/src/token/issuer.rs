use std::collections::HashMap;

use chrono::Duration;

use super::claims::Claims;
use super::codec::TokenCodec;
use super::errors::TokenError;

/// Mints access and refresh tokens for a subject.
///
/// TTLs are supplied per call; the issuer holds no policy of its own.
pub struct TokenIssuer {
    codec: TokenCodec,
}

impl TokenIssuer {
    pub fn new(codec: TokenCodec) -> Self {
        Self { codec }
    }

    /// Issue an access token for `subject`, expiring `ttl` from now.
    ///
    /// `extra_claims` are merged into the payload alongside the standard
    /// claims and travel opaquely to whoever decodes the token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue_access(
        &self,
        subject: &str,
        ttl: Duration,
        extra_claims: HashMap<String, serde_json::Value>,
    ) -> Result<String, TokenError> {
        let mut claims = Claims::access(subject, ttl);
        claims.extra.extend(extra_claims);

        self.codec.encode(&claims)
    }

    /// Issue a refresh token for `subject`, expiring `ttl` from now.
    ///
    /// Refresh tokens never carry extra claims; they authorize re-issuance
    /// only, not authorization scope.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue_refresh(&self, subject: &str, ttl: Duration) -> Result<String, TokenError> {
        self.codec.encode(&Claims::refresh(subject, ttl))
    }
}
