use std::path::Path;
use crate::errors::PlagcheckError;
use super::types::PlagcheckConfig;
use super::schema::CONFIG_SCHEMA;
use super::security::validate_security_patterns;

const MAX_CONFIG_BYTES: u64 = 1_048_576;

pub async fn parse_config(path: &Path) -> Result<PlagcheckConfig, PlagcheckError> {
    if !path.exists() {
        return Err(PlagcheckError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(PlagcheckError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    parse_config_str(&content)
}

/// Parse and validate config text. An empty document yields the defaults.
pub fn parse_config_str(content: &str) -> Result<PlagcheckConfig, PlagcheckError> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;
    if yaml.is_null() {
        return Ok(PlagcheckConfig::default());
    }

    validate_security_patterns(&yaml)?;
    validate_schema(&yaml)?;

    let config: PlagcheckConfig = serde_yaml::from_value(yaml)?;
    validate_values(&config)?;

    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
///
/// Runs before logging is set up, so violations are returned rather than logged.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), PlagcheckError> {
    let json_value = serde_json::to_value(yaml)
        .map_err(|e| PlagcheckError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| PlagcheckError::Config(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        let messages: Vec<String> = errors
            .map(|e| {
                let at = e.instance_path.to_string();
                if at.is_empty() { e.to_string() } else { format!("{} at {}", e, at) }
            })
            .collect();
        if !messages.is_empty() {
            return Err(PlagcheckError::Config(messages.join("; ")));
        }
    }

    Ok(())
}

fn validate_values(config: &PlagcheckConfig) -> Result<(), PlagcheckError> {
    if let Some(host) = config.server.as_ref().and_then(|s| s.host.as_deref()) {
        if host.trim().is_empty() || host.chars().any(char::is_whitespace) {
            return Err(PlagcheckError::Config(format!("Invalid server host: '{}'", host)));
        }
    }
    Ok(())
}
