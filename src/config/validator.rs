//! Configuration validation for environment records.
//!
//! Validation covers what the synthesizer itself depends on: non-empty names
//! and unique behavior path patterns. Combinations that are merely invalid on
//! the provider side (for example a malformed domain name) are deliberately
//! not checked here; they are rejected by the external provisioning step.

use crate::error::{ConfigError, EdgestackError, Result};
use std::collections::HashSet;
use tracing::debug;

use super::spec::EnvironmentConfig;

/// Validator for environment configurations.
#[derive(Debug, Default)]
pub struct ConfigValidator;

/// Validation result containing all errors found.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of warnings (non-fatal issues).
    pub warnings: Vec<String>,
}

/// A single validation error.
#[derive(Debug)]
pub struct ValidationError {
    /// The field path that failed validation.
    pub field: String,
    /// The error message.
    pub message: String,
}

impl ValidationResult {
    /// Returns true if no errors were found.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl ConfigValidator {
    /// Creates a new validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates an environment configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn validate(&self, config: &EnvironmentConfig) -> Result<ValidationResult> {
        let mut result = ValidationResult::default();

        Self::validate_names(config, &mut result);
        Self::validate_behaviors(config, &mut result);
        Self::validate_firewall(config, &mut result);
        Self::validate_domain(config, &mut result);

        if result.errors.is_empty() {
            debug!("Configuration validation passed");
            Ok(result)
        } else {
            let first_error = &result.errors[0];
            Err(EdgestackError::Config(ConfigError::ValidationError {
                message: first_error.message.clone(),
                field: Some(first_error.field.clone()),
            }))
        }
    }

    /// Validates required names.
    fn validate_names(config: &EnvironmentConfig, result: &mut ValidationResult) {
        if config.resource_name.is_empty() {
            result.errors.push(ValidationError {
                field: String::from("resource_name"),
                message: String::from("Resource name cannot be empty"),
            });
        }

        if config.origin_domain.is_empty() {
            result.errors.push(ValidationError {
                field: String::from("origin_domain"),
                message: String::from("Origin domain cannot be empty"),
            });
        }

        if config.log_bucket.is_empty() {
            result.errors.push(ValidationError {
                field: String::from("log_bucket"),
                message: String::from("Log bucket name cannot be empty"),
            });
        }
    }

    /// Validates behavior settings: path patterns must be unique keys.
    fn validate_behaviors(config: &EnvironmentConfig, result: &mut ValidationResult) {
        let mut seen: HashSet<&str> = HashSet::new();

        for behavior in &config.behaviors {
            if !seen.insert(behavior.path_pattern.as_str()) {
                result.errors.push(ValidationError {
                    field: String::from("behaviors"),
                    message: format!("Duplicate path pattern: {}", behavior.path_pattern),
                });
            }
        }
    }

    /// Validates firewall settings.
    fn validate_firewall(config: &EnvironmentConfig, result: &mut ValidationResult) {
        let mut seen: HashSet<&str> = HashSet::new();

        for rule in &config.managed_rules {
            if rule.is_empty() {
                result.errors.push(ValidationError {
                    field: String::from("managed_rules"),
                    message: String::from("Managed rule name cannot be empty"),
                });
            } else if !seen.insert(rule.as_str()) {
                result.warnings.push(format!(
                    "Managed rule '{rule}' listed more than once; each occurrence gets its own priority"
                ));
            }
        }
    }

    /// Warns about certificate/domain combinations that will not attach.
    fn validate_domain(config: &EnvironmentConfig, result: &mut ValidationResult) {
        let has_cert = config.certificate_arn.as_ref().is_some_and(|arn| !arn.is_empty());
        let has_domains = !config.alternate_domain_names.is_empty();

        if has_cert && !has_domains {
            result.warnings.push(String::from(
                "certificate_arn is set but alternate_domain_names is empty; neither will be attached",
            ));
        } else if has_domains && !has_cert {
            result.warnings.push(String::from(
                "alternate_domain_names is set but certificate_arn is empty; neither will be attached",
            ));
        }
    }
}
