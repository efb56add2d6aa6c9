//! # Sikt Settings
//!
//! Layered settings for the sikt toolkit and the CMS runtime it feeds:
//! database connection parameters, session signing constants, and the
//! debug flag.
//!
//! ## Features
//! - **Single source of truth**: one container for every setting
//! - **Validation**: shape checks on load, before anything runs
//! - **Environment awareness**: per-environment YAML overrides
//!
//! The values are opaque to this crate; it neither connects to the
//! database nor signs anything.

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

mod database;
mod error;
mod security;
mod validation;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use security::SecurityConfig;

/// Top-level settings container.
#[derive(Debug, Serialize, Deserialize, Validate, Default, Clone)]
pub struct SiktConfig {
    /// Database connection parameters.
    #[validate(nested)]
    pub database: DatabaseConfig,

    /// Session signing keys and salts.
    #[validate(nested)]
    pub security: SecurityConfig,

    /// Debug mode for the consuming runtime.
    #[serde(default)]
    pub debug: bool,
}

impl SiktConfig {
    /// Load settings from default files and environment.
    ///
    /// Hierarchy:
    /// 1. Default values
    /// 2. `config/sikt.yaml` - base settings; defaults are used if missing.
    /// 3. `config/<environment>.yaml` - environment-specific overrides,
    ///    selected by `SIKT_ENV` (default `production`).
    /// 4. `SIKT_*` environment variables, `__`-nested.
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(SiktConfig::default()));

        if Path::new("config/sikt.yaml").exists() {
            figment = figment.merge(Yaml::file("config/sikt.yaml"));
        }

        let env = std::env::var("SIKT_ENV").unwrap_or_else(|_| "production".into());
        let env_file = format!("config/{}.yaml", env);
        if Path::new(&env_file).exists() {
            figment = figment.merge(Yaml::file(env_file));
        }

        figment
            .merge(Env::prefixed("SIKT_").split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }

    /// Load settings from a specific path for testing/validation.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(PathBuf::from(
                path.to_string_lossy().to_string(),
            )));
        }

        Figment::from(Serialized::defaults(SiktConfig::default()))
            .merge(Yaml::file(path))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn full_settings_validation() {
        let config = SiktConfig::default();
        config.validate().expect("Default settings should validate");
        assert!(!config.debug);
    }

    #[test]
    fn environment_override() {
        // Override a nested field via environment variable.
        std::env::set_var("SIKT_DATABASE__NAME", "cms_env");
        let config = SiktConfig::load().unwrap();
        assert_eq!(config.database.name, "cms_env");
        std::env::remove_var("SIKT_DATABASE__NAME");
    }

    #[test]
    fn missing_file_is_reported() {
        let result = SiktConfig::load_from_path("/nonexistent/sikt.yaml");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn yaml_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "debug: true\ndatabase:\n  name: cms\n  host: db.internal").unwrap();

        let config = SiktConfig::load_from_path(file.path()).unwrap();
        assert!(config.debug);
        assert_eq!(config.database.name, "cms");
        assert_eq!(config.database.host, "db.internal");
        // Untouched sections keep their defaults.
        assert_eq!(config.database.charset, "utf8");
    }

    #[test]
    fn invalid_override_fails_validation() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "security:\n  auth_key: short").unwrap();

        let result = SiktConfig::load_from_path(file.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
