//! Credential-store abstraction over the fixed admin identity.
//!
//! The deployment has exactly one admin and no registration persistence, so
//! the only implementation holds a single identity. The trait keeps token
//! issuance independent of where credentials live, so a persisted multi-user
//! backend can slot in later without touching the login handler.

use crate::auth::password::{hash_password, verify_password};
use crate::config::AdminConfig;

/// Verifies an identity/secret pair against some credential backend.
pub trait CredentialStore: Send + Sync {
    /// Returns `true` when `identity` exists and `secret` matches.
    fn verify(&self, identity: &str, secret: &str) -> bool;
}

/// The single fixed admin identity.
///
/// The configured plaintext password is Argon2id-hashed at construction, so
/// login compares against a hash rather than a plaintext constant.
pub struct FixedAdminCredentials {
    email: String,
    password_hash: String,
}

impl FixedAdminCredentials {
    /// Build the store from configuration, hashing the admin password.
    ///
    /// # Panics
    ///
    /// Panics if hashing fails, which only happens on invalid Argon2
    /// parameters and should abort startup.
    pub fn from_config(admin: &AdminConfig) -> Self {
        let password_hash =
            hash_password(&admin.password).expect("admin password hashing must succeed");
        Self {
            email: admin.email.clone(),
            password_hash,
        }
    }
}

impl CredentialStore for FixedAdminCredentials {
    fn verify(&self, identity: &str, secret: &str) -> bool {
        if identity != self.email {
            return false;
        }
        verify_password(secret, &self.password_hash).unwrap_or(false)
    }
}
