pub mod cookie;
pub mod credentials;
pub mod dtos;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod services;
pub mod signer;

pub use model::AdminIdentity;
pub use services::{AuthService, TokenService};
