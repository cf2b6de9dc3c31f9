//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject placeholder secrets
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: EdgeConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system
//! - A missing credential is not a validation error; only the filter needs one

use std::net::SocketAddr;

use axum::http::uri::PathAndQuery;
use thiserror::Error;

use crate::config::schema::EdgeConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is empty")]
    Empty { field: &'static str },

    #[error("{field} holds a placeholder value")]
    Placeholder { field: &'static str },

    #[error("{field} is not a valid socket address: {value}")]
    InvalidAddress { field: &'static str, value: String },

    #[error("filter.index_document must be a file name, got {0:?}")]
    InvalidIndexDocument(String),

    #[error("filter.username and filter.password must be set together")]
    IncompleteCredential,

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &EdgeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let filter = &config.filter;
    if let Some(credential) = &filter.credential {
        check_secret("filter.credential", credential.trim_start_matches("Basic "), &mut errors);
    }
    match (&filter.username, &filter.password) {
        (Some(_), None) | (None, Some(_)) => errors.push(ValidationError::IncompleteCredential),
        (Some(user), Some(pass)) => {
            check_secret("filter.username", user, &mut errors);
            check_secret("filter.password", pass, &mut errors);
        }
        (None, None) => {}
    }

    if !is_valid_index_document(&filter.index_document) {
        errors.push(ValidationError::InvalidIndexDocument(filter.index_document.clone()));
    }

    let cookie = &config.cookie;
    for (field, value) in [
        ("cookie.policy", &cookie.policy),
        ("cookie.signature", &cookie.signature),
        ("cookie.key_pair", &cookie.key_pair),
    ] {
        if let Some(value) = value {
            if is_placeholder(value) {
                errors.push(ValidationError::Placeholder { field });
            }
        }
    }

    check_address("listener.bind_address", &config.listener.bind_address, &mut errors);
    if config.observability.metrics_enabled {
        check_address(
            "observability.metrics_address",
            &config.observability.metrics_address,
            &mut errors,
        );
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_secret(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    if value.is_empty() {
        errors.push(ValidationError::Empty { field });
    } else if is_placeholder(value) {
        errors.push(ValidationError::Placeholder { field });
    }
}

fn check_address(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}

/// The index document is spliced into request paths, so it must be a single
/// segment that survives as a URI path on its own.
fn is_valid_index_document(index: &str) -> bool {
    !index.is_empty()
        && !index.contains(['/', '?', '#'])
        && PathAndQuery::try_from(format!("/{index}")).is_ok()
}

/// Values like `XXXXXXXX` are template stand-ins, never real secrets.
fn is_placeholder(value: &str) -> bool {
    value.len() >= PLACEHOLDER_MIN_LEN && value.chars().all(|c| c == 'X')
}

const PLACEHOLDER_MIN_LEN: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&EdgeConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = EdgeConfig::default();
        config.filter.credential = Some("Basic XXXXXXXX".into());
        config.filter.username = Some("id".into());
        config.filter.index_document = "docs/index.html".into();
        config.cookie.signature = Some("XXXXXXXX".into());
        config.listener.bind_address = "localhost".into();
        config.timeouts.request_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::Placeholder { field: "filter.credential" },
                ValidationError::IncompleteCredential,
                ValidationError::InvalidIndexDocument("docs/index.html".into()),
                ValidationError::Placeholder { field: "cookie.signature" },
                ValidationError::InvalidAddress {
                    field: "listener.bind_address",
                    value: "localhost".into(),
                },
                ValidationError::ZeroTimeout,
            ]
        );
    }

    #[test]
    fn test_empty_credential_rejected() {
        let mut config = EdgeConfig::default();
        config.filter.credential = Some(String::new());
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::Empty { field: "filter.credential" }])
        );
    }

    #[test]
    fn test_index_document_must_fit_in_a_path() {
        for index in ["my index.html", "index.html?v=1", "index.html#top", "", "a/b.html"] {
            let mut config = EdgeConfig::default();
            config.filter.index_document = index.into();
            assert_eq!(
                validate_config(&config),
                Err(vec![ValidationError::InvalidIndexDocument(index.into())]),
                "{index:?}"
            );
        }

        let mut config = EdgeConfig::default();
        config.filter.index_document = "default.htm".into();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_short_x_values_are_not_placeholders() {
        let mut config = EdgeConfig::default();
        config.filter.username = Some("X".into());
        config.filter.password = Some("XXX".into());
        assert!(validate_config(&config).is_ok());

        config.filter.password = Some("XXXX".into());
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::Placeholder { field: "filter.password" }])
        );
    }

    #[test]
    fn test_metrics_address_only_checked_when_enabled() {
        let mut config = EdgeConfig::default();
        config.observability.metrics_address = "nope".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert!(validate_config(&config).is_err());
    }
}
