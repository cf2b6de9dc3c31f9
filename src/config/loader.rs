//! Configuration loading from disk and the process environment.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::EdgeConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error("no credential configured (set filter.credential or filter.username/password)")]
    MissingCredential,
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration from an optional TOML file, overlay the process
/// environment and validate the result.
pub fn load_config(path: Option<&Path>) -> Result<EdgeConfig, ConfigError> {
    let content = match path {
        Some(path) => fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?,
        None => String::new(),
    };

    parse_config(&content, std::env::vars())
}

/// Parse TOML content, apply the given environment variables and validate.
pub fn parse_config<I>(content: &str, vars: I) -> Result<EdgeConfig, ConfigError>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut config: EdgeConfig = toml::from_str(content)?;
    apply_env_overrides(&mut config, vars);

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Overlay the variable names the deployed handlers are configured with.
///
/// | variable       | field                 |
/// |----------------|-----------------------|
/// | `basic_auth`   | `filter.credential` (`"Basic " + value`) |
/// | `cors_headers` | `cors.allow_headers`  |
/// | `cors_methods` | `cors.allow_methods`  |
/// | `cors_origins` | `cors.allow_origins`  |
/// | `policy`       | `cookie.policy`       |
/// | `signature`    | `cookie.signature`    |
/// | `keypair`      | `cookie.key_pair`     |
///
/// Unknown variables are ignored.
pub fn apply_env_overrides<I>(config: &mut EdgeConfig, vars: I)
where
    I: IntoIterator<Item = (String, String)>,
{
    for (key, value) in vars {
        match key.as_str() {
            "basic_auth" => config.filter.credential = Some(format!("Basic {value}")),
            "cors_headers" => config.cors.allow_headers = Some(value),
            "cors_methods" => config.cors.allow_methods = Some(value),
            "cors_origins" => config.cors.allow_origins = Some(value),
            "policy" => config.cookie.policy = Some(value),
            "signature" => config.cookie.signature = Some(value),
            "keypair" => config.cookie.key_pair = Some(value),
            _ => continue,
        }
        tracing::debug!(variable = %key, "Configuration overridden from environment");
    }
}
