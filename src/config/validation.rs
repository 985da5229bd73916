//! Configuration validation.
//!
//! Returns all validation errors, not just the first.

use thiserror::Error;

use crate::config::schema::LogCatConfig;

/// Longest tag accepted by the Android log daemon.
pub const MAX_TAG_LEN: usize = 23;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// A single semantic problem in a config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("logcat.tag must not be empty")]
    EmptyTag,

    #[error("logcat.tag '{tag}' is longer than {max} characters")]
    TagTooLong { tag: String, max: usize },

    #[error("logcat.chunk_size must be greater than 0")]
    ZeroChunkSize,

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error, off")]
    UnknownLogLevel(String),
}

/// Check a parsed config for semantic errors.
pub fn validate_config(config: &LogCatConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let logcat = &config.logcat;

    if logcat.tag.trim().is_empty() {
        errors.push(ValidationError::EmptyTag);
    } else if logcat.tag.chars().count() > MAX_TAG_LEN {
        errors.push(ValidationError::TagTooLong {
            tag: logcat.tag.clone(),
            max: MAX_TAG_LEN,
        });
    }

    if logcat.chunk_size == 0 {
        errors.push(ValidationError::ZeroChunkSize);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&LogCatConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = LogCatConfig::default();
        config.logcat.tag = "  ".into();
        config.logcat.chunk_size = 0;
        config.observability.log_level = "loud".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyTag,
                ValidationError::ZeroChunkSize,
                ValidationError::UnknownLogLevel("loud".into()),
            ]
        );
    }

    #[test]
    fn test_tag_length_limit() {
        let mut config = LogCatConfig::default();
        config.logcat.tag = "x".repeat(MAX_TAG_LEN);
        assert!(validate_config(&config).is_ok());

        config.logcat.tag = "x".repeat(MAX_TAG_LEN + 1);
        assert!(matches!(
            validate_config(&config).unwrap_err()[0],
            ValidationError::TagTooLong { .. }
        ));
    }
}
