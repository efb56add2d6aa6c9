//! Session signing keys and salts.
//!
//! Eight opaque string constants consumed by the external CMS runtime
//! for session/cookie signing. Only their shape is validated; they are
//! never generated or interpreted here. The defaults are development
//! placeholders and must be overridden in production deployments.

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

use crate::validation;

/// Session signing keys and salts.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct SecurityConfig {
    #[serde(default = "default_auth_key")]
    #[validate(custom(function = validation::validate_secret))]
    pub auth_key: String,

    #[serde(default = "default_secure_auth_key")]
    #[validate(custom(function = validation::validate_secret))]
    pub secure_auth_key: String,

    #[serde(default = "default_logged_in_key")]
    #[validate(custom(function = validation::validate_secret))]
    pub logged_in_key: String,

    #[serde(default = "default_nonce_key")]
    #[validate(custom(function = validation::validate_secret))]
    pub nonce_key: String,

    #[serde(default = "default_auth_salt")]
    #[validate(custom(function = validation::validate_secret))]
    pub auth_salt: String,

    #[serde(default = "default_secure_auth_salt")]
    #[validate(custom(function = validation::validate_secret))]
    pub secure_auth_salt: String,

    #[serde(default = "default_logged_in_salt")]
    #[validate(custom(function = validation::validate_secret))]
    pub logged_in_salt: String,

    #[serde(default = "default_nonce_salt")]
    #[validate(custom(function = validation::validate_secret))]
    pub nonce_salt: String,
}

fn default_auth_key() -> String {
    "test-auth-key-123456789".into()
}
fn default_secure_auth_key() -> String {
    "test-secure-auth-key-123456789".into()
}
fn default_logged_in_key() -> String {
    "test-logged-in-key-123456789".into()
}
fn default_nonce_key() -> String {
    "test-nonce-key-123456789".into()
}
fn default_auth_salt() -> String {
    "test-auth-salt-123456789".into()
}
fn default_secure_auth_salt() -> String {
    "test-secure-auth-salt-123456789".into()
}
fn default_logged_in_salt() -> String {
    "test-logged-in-salt-123456789".into()
}
fn default_nonce_salt() -> String {
    "test-nonce-salt-123456789".into()
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            auth_key: default_auth_key(),
            secure_auth_key: default_secure_auth_key(),
            logged_in_key: default_logged_in_key(),
            nonce_key: default_nonce_key(),
            auth_salt: default_auth_salt(),
            secure_auth_salt: default_secure_auth_salt(),
            logged_in_salt: default_logged_in_salt(),
            nonce_salt: default_nonce_salt(),
        }
    }
}
