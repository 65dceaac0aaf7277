//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide the operations HTTP
//! handlers and the admin CLI call into.
//!
//! - [`services::link_service::LinkService`] - Alias allocation and URL record lifecycle
//! - [`services::auth_service::AuthService`] - Registration, login and token checks
//! - [`services::password_service::PasswordService`] - Argon2id password hashing
//! - [`services::token_service::TokenService`] - Signed bearer tokens

pub mod services;
