//! Configuration validation.

use std::collections::HashSet;

use crate::error::ConfigError;
use crate::schema::Config;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Turn the first error, if any, into a [`ConfigError::InvalidValue`].
    pub fn into_error(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(ConfigError::InvalidValue {
                field: error.path,
                message: error.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::default();

        Self::validate_app(config, &mut result);
        Self::validate_locale(config, &mut result);
        Self::validate_logging(config, &mut result);
        Self::validate_registry(config, &mut result);
        Self::validate_modules(config, &mut result);

        Ok(result)
    }

    fn validate_app(config: &Config, result: &mut ValidationResult) {
        if config.app.name.trim().is_empty() {
            result.add_error(ValidationError::new("app.name", "Name cannot be empty"));
        }

        let url = &config.app.public_url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            result.add_error(ValidationError::new(
                "app.public_url",
                "public_url must start with http:// or https://",
            ));
        }
    }

    fn validate_locale(config: &Config, result: &mut ValidationResult) {
        let active = &config.locale.active;
        let valid = active.len() >= 2
            && active
                .chars()
                .all(|c| c.is_ascii_alphabetic() || c == '-' || c == '_');
        if !valid {
            result.add_error(ValidationError::new(
                "locale.active",
                format!("{:?} is not a locale code", active),
            ));
        }

        if !config.locale.merge_builder_locales {
            result.add_warning(ValidationWarning::new(
                "locale.merge_builder_locales",
                "Builder messages are not merged, labels will show their message keys",
            ));
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        let level = config.logging.level.trim();
        if level.is_empty() {
            result.add_error(ValidationError::new(
                "logging.level",
                "Log level cannot be empty",
            ));
        } else if !level.contains('=') && !LOG_LEVELS.contains(&level) {
            result.add_warning(ValidationWarning::new(
                "logging.level",
                format!("Unknown log level {:?}, falling back to info", level),
            ));
        }

        if config.logging.file_enabled && config.logging.file.trim().is_empty() {
            result.add_error(ValidationError::new(
                "logging.file",
                "Log file name cannot be empty when file logging is enabled",
            ));
        }
    }

    fn validate_registry(config: &Config, result: &mut ValidationResult) {
        if !config.registry.freeze_after_startup && !config.environment.dev {
            result.add_warning(ValidationWarning::new(
                "registry.freeze_after_startup",
                "Registry stays writable after startup outside dev mode",
            ));
        }
    }

    fn validate_modules(config: &Config, result: &mut ValidationResult) {
        if config.modules.enabled.is_empty() {
            result.add_warning(ValidationWarning::new(
                "modules.enabled",
                "No modules enabled, the registry will be empty",
            ));
        }

        let mut seen = HashSet::new();
        for module in &config.modules.enabled {
            if !seen.insert(module.as_str()) {
                result.add_error(ValidationError::new(
                    "modules.enabled",
                    format!("Module {} is listed twice", module),
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
