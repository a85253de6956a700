//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::RedactorConfig;
use crate::domain::errors::RedactorError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// `${VAR}` references in the file are substituted from the environment
/// (comment lines excluded), then `REDACTOR_*` environment variables override
/// individual settings, and the result is validated.
///
/// # Errors
///
/// Returns an error if the file cannot be read, a referenced environment
/// variable is unset, the TOML is malformed, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use redactor::config::load_config;
///
/// let config = load_config("redactor.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<RedactorConfig> {
    let path = path.as_ref();

    let raw = fs::read_to_string(path).map_err(|e| {
        RedactorError::Configuration(format!(
            "Cannot read configuration file {}: {e}",
            path.display()
        ))
    })?;

    let expanded = expand_env_refs(&raw)?;
    let mut config: RedactorConfig = toml::from_str(&expanded)?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        RedactorError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes `${VAR_NAME}` references from the environment
///
/// Comment lines keep their references untouched, so a commented-out setting
/// never demands a variable. All missing variables are reported together.
fn expand_env_refs(input: &str) -> Result<String> {
    let var_ref = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut missing: Vec<String> = Vec::new();
    let mut output = String::with_capacity(input.len());

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            output.push_str(line);
        } else {
            let expanded = var_ref.replace_all(line, |caps: &regex::Captures| {
                match std::env::var(&caps[1]) {
                    Ok(value) => value,
                    Err(_) => {
                        let name = caps[1].to_string();
                        if !missing.contains(&name) {
                            missing.push(name);
                        }
                        caps[0].to_string()
                    }
                }
            });
            output.push_str(&expanded);
        }
        output.push('\n');
    }

    if missing.is_empty() {
        Ok(output)
    } else {
        Err(RedactorError::Configuration(format!(
            "Missing required environment variables: {}",
            missing.join(", ")
        )))
    }
}

/// Applies `REDACTOR_<SECTION>_<KEY>` environment variable overrides
fn apply_env_overrides(config: &mut RedactorConfig) -> Result<()> {
    if let Ok(val) = std::env::var("REDACTOR_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("REDACTOR_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("REDACTOR_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    // REDACTOR_MARKER, REDACTOR_PATTERN_LIBRARY, REDACTOR_AUDIT_*
    config
        .redaction
        .apply_env_overrides()
        .map_err(|e| RedactorError::Configuration(e.to_string()))?;

    Ok(())
}
