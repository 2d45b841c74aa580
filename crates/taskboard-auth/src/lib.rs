//! # taskboard-auth
//!
//! JWT claims, encoding, and validation. Token issuance flows (login,
//! refresh) live in an external identity service; this crate only needs
//! to verify bearer credentials and resolve them to a user identity.

pub mod jwt;

pub use jwt::claims::Claims;
pub use jwt::decoder::JwtDecoder;
pub use jwt::encoder::JwtEncoder;
