use std::collections::HashMap;

use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Discriminates what a token is allowed to do.
///
/// Access tokens authorize API calls; refresh tokens only authorize minting
/// a new token pair. Serialized lowercase under the `type` claim key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// Signed token payload.
///
/// `sub`, `exp`, and `type` are mandatory; a payload missing any of them
/// fails deserialization and is reported as an invalid token by the codec.
/// Application-specific claims ride in `extra` and are flattened into the
/// wire payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject (identity the token was issued for)
    pub sub: String,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,

    /// Token kind, serialized as the `type` claim
    #[serde(rename = "type")]
    pub token_type: TokenType,

    /// Additional custom fields (flattened into token)
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Claims {
    /// Build access-token claims expiring `ttl` from now.
    pub fn access(subject: impl Into<String>, ttl: Duration) -> Self {
        Self::with_type(subject, ttl, TokenType::Access)
    }

    /// Build refresh-token claims expiring `ttl` from now.
    pub fn refresh(subject: impl Into<String>, ttl: Duration) -> Self {
        Self::with_type(subject, ttl, TokenType::Refresh)
    }

    fn with_type(subject: impl Into<String>, ttl: Duration, token_type: TokenType) -> Self {
        Self {
            sub: subject.into(),
            exp: (Utc::now() + ttl).timestamp(),
            token_type,
            extra: HashMap::new(),
        }
    }

    /// Add a custom claim.
    pub fn with_extra(mut self, key: impl ToString, value: impl Serialize) -> Self {
        if let Ok(json_value) = serde_json::to_value(value) {
            self.extra.insert(key.to_string(), json_value);
        }
        self
    }

    /// A token is expired from the instant `now` reaches `exp`.
    pub fn is_expired(&self, now: i64) -> bool {
        self.exp <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_claims_expire_ttl_from_now() {
        let claims = Claims::access("user@example.com", Duration::minutes(30));

        assert_eq!(claims.sub, "user@example.com");
        assert_eq!(claims.token_type, TokenType::Access);

        let lifetime = claims.exp - Utc::now().timestamp();
        assert!((lifetime - 30 * 60).abs() <= 1);
    }

    #[test]
    fn refresh_claims_carry_refresh_type() {
        let claims = Claims::refresh("user@example.com", Duration::days(7));

        assert_eq!(claims.token_type, TokenType::Refresh);
        assert!(claims.extra.is_empty());
    }

    #[test]
    fn token_type_serializes_under_type_key() {
        let claims = Claims::access("user@example.com", Duration::minutes(5));
        let json = serde_json::to_value(&claims).unwrap();

        assert_eq!(json["type"], "access");
        assert_eq!(json["sub"], "user@example.com");
    }

    #[test]
    fn extra_claims_flatten_into_payload() {
        let claims =
            Claims::access("user@example.com", Duration::minutes(5)).with_extra("role", "admin");
        let json = serde_json::to_value(&claims).unwrap();

        assert_eq!(json["role"], "admin");

        let round_tripped: Claims = serde_json::from_value(json).unwrap();
        assert_eq!(round_tripped, claims);
    }

    #[test]
    fn is_expired_boundary() {
        let claims = Claims {
            sub: "user@example.com".to_string(),
            exp: 1000,
            token_type: TokenType::Access,
            extra: HashMap::new(),
        };

        assert!(!claims.is_expired(999));
        assert!(claims.is_expired(1000));
        assert!(claims.is_expired(1001));
    }
}
