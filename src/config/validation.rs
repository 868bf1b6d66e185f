//! Seed configuration validation.

use thiserror::Error;

use crate::config::schema::SeedConfig;

/// A semantic problem in a seed file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("context.tags contains an empty tag")]
    EmptyTag,

    #[error("context.metadata contains an empty key")]
    EmptyMetadataKey,

    #[error("context.{0} is set but blank")]
    BlankField(&'static str),

    #[error("diagnostics.filter is empty")]
    EmptyFilter,
}

/// Check a parsed seed. Returns every problem found.
pub fn validate_config(config: &SeedConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let context = &config.context;

    if context.tags.iter().any(|t| t.trim().is_empty()) {
        errors.push(ValidationError::EmptyTag);
    }
    if context.metadata.keys().any(|k| k.trim().is_empty()) {
        errors.push(ValidationError::EmptyMetadataKey);
    }
    if context.category.as_deref().is_some_and(|c| c.trim().is_empty()) {
        errors.push(ValidationError::BlankField("category"));
    }
    if context.session_id.as_deref().is_some_and(|s| s.trim().is_empty()) {
        errors.push(ValidationError::BlankField("session_id"));
    }
    if config.diagnostics.filter.trim().is_empty() {
        errors.push(ValidationError::EmptyFilter);
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
    fn test_default_is_valid() {
        assert!(validate_config(&SeedConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = SeedConfig::default();
        config.context.tags.insert(" ".into());
        config.context.metadata.insert(String::new(), "v".into());
        config.context.category = Some(String::new());
        config.diagnostics.filter = String::new();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyTag,
                ValidationError::EmptyMetadataKey,
                ValidationError::BlankField("category"),
                ValidationError::EmptyFilter,
            ]
        );
    }
}
