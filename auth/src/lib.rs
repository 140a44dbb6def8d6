//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for the dashboard
//! backend:
//! - Password hashing (Argon2id)
//! - Signed access/refresh token encoding, decoding, and issuance
//! - Bearer-token validation against an injected subject lookup
//!
//! The host service owns users and routing; this crate only ever sees a
//! plaintext password to hash or compare, or a token to mint or verify.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("guess", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use std::collections::HashMap;
//!
//! use auth::{TokenCodec, TokenIssuer, TokenType};
//! use chrono::Duration;
//!
//! let codec = TokenCodec::hs256(b"secret_key_at_least_32_bytes_long!");
//! let issuer = TokenIssuer::new(codec.clone());
//!
//! let token = issuer
//!     .issue_access("ops@example.com", Duration::minutes(30), HashMap::new())
//!     .unwrap();
//!
//! let claims = codec.decode(&token).unwrap();
//! assert_eq!(claims.sub, "ops@example.com");
//! assert_eq!(claims.token_type, TokenType::Access);
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::extract_bearer;
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use authenticator::SubjectLookup;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenCodec;
pub use token::TokenError;
pub use token::TokenIssuer;
pub use token::TokenType;
