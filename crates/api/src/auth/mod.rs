//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`credentials`] -- the credential-store abstraction and the fixed
//!   single-admin implementation.
//! - [`jwt`] -- HS256 token generation and validation.

pub mod credentials;
pub mod jwt;
pub mod password;
