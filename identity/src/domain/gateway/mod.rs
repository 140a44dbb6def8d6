pub mod errors;
pub mod models;
pub mod ports;
pub mod service;

pub use errors::AuthError;
pub use models::Credentials;
pub use models::Profile;
pub use models::RegisterUserCommand;
pub use models::Subject;
pub use models::TokenPair;
pub use models::UserRecord;
pub use ports::AuthGatewayPort;
pub use ports::UserStore;
pub use service::AuthGateway;
