pub mod claims;
pub mod codec;
pub mod errors;
pub mod issuer;

pub use claims::Claims;
pub use claims::TokenType;
pub use codec::TokenCodec;
pub use errors::TokenError;
pub use issuer::TokenIssuer;

pub use jsonwebtoken::Algorithm;
