//! Database connection settings.
//!
//! Connection parameters consumed by the external CMS runtime. This
//! crate treats them as opaque: it never opens a connection itself.

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

use crate::validation;

/// Database connection settings.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct DatabaseConfig {
    /// Database name.
    #[serde(default = "default_name")]
    #[validate(length(min = 1))]
    pub name: String,

    /// Database user.
    #[serde(default = "default_user")]
    #[validate(length(min = 1))]
    pub user: String,

    /// Database password. Empty is permitted for local development.
    #[serde(default)]
    pub password: String,

    /// Database host.
    #[serde(default = "default_host")]
    #[validate(custom(function = validation::validate_host))]
    pub host: String,

    /// Connection character set.
    #[serde(default = "default_charset")]
    #[validate(custom(function = validation::validate_charset))]
    pub charset: String,

    /// Collation. Empty means the server default.
    #[serde(default)]
    pub collate: String,
}

fn default_name() -> String {
    "sikt".into()
}
fn default_user() -> String {
    "root".into()
}
fn default_host() -> String {
    "localhost".into()
}
fn default_charset() -> String {
    "utf8".into()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            user: default_user(),
            password: String::new(),
            host: default_host(),
            charset: default_charset(),
            collate: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_database_settings_validate() {
        DatabaseConfig::default().validate().unwrap();
    }

    #[test]
    fn rejects_bad_charset() {
        let config = DatabaseConfig {
            charset: "UTF-8;DROP".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_name() {
        let config = DatabaseConfig {
            name: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
