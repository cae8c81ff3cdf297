//! Configuration validation utilities.

use super::error::{ConfigError, ConfigResult};
use super::schema::{AlphagenConfig, LogOutput, LoggingConfig};

/// Validates the entire configuration.
pub fn validate_config(config: &AlphagenConfig) -> ConfigResult<()> {
    validate_logging_config(&config.logging)?;
    Ok(())
}

/// Validates logging settings.
fn validate_logging_config(logging: &LoggingConfig) -> ConfigResult<()> {
    if logging.output == LogOutput::File {
        match &logging.file_path {
            None => return Err(ConfigError::missing_field("logging.file_path")),
            Some(path) if path.file_name().is_none() => {
                return Err(ConfigError::validation(format!(
                    "Log file path has no file name: {}",
                    path.display()
                )));
            }
            Some(_) => {}
        }
    }

    for module in logging.filters.keys() {
        validate_filter_target(module)?;
    }

    Ok(())
}

/// Validates a filter directive target.
fn validate_filter_target(module: &str) -> ConfigResult<()> {
    if module.is_empty() {
        return Err(ConfigError::validation("Log filter target cannot be empty"));
    }

    if module.contains(|c: char| c.is_whitespace() || c == '=' || c == ',') {
        return Err(ConfigError::validation(format!(
            "Invalid log filter target: {module:?}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::LogLevel;
    use std::path::PathBuf;

    #[test]
    fn test_validate_default_config() {
        let config = AlphagenConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_file_output_without_path() {
        let mut config = AlphagenConfig::default();
        config.logging.output = LogOutput::File;
        let result = validate_config(&config);
        assert!(matches!(result, Err(ConfigError::MissingField { .. })));
    }

    #[test]
    fn test_validate_file_output_with_path() {
        let mut config = AlphagenConfig::default();
        config.logging.output = LogOutput::File;
        config.logging.file_path = Some(PathBuf::from("logs/alphagen.log"));
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_file_output_directory_path() {
        let mut config = AlphagenConfig::default();
        config.logging.output = LogOutput::File;
        config.logging.file_path = Some(PathBuf::from("/"));
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_validate_bad_filter_target() {
        let mut config = AlphagenConfig::default();
        config
            .logging
            .filters
            .insert("alphagen_core=debug".to_string(), LogLevel::Trace);
        assert!(validate_config(&config).is_err());

        config.logging.filters.clear();
        config.logging.filters.insert(String::new(), LogLevel::Trace);
        assert!(validate_config(&config).is_err());
    }
}
