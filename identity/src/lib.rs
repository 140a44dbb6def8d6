pub mod config;
pub mod domain;
pub mod outbound;

pub use domain::gateway;
pub use outbound::repositories;
