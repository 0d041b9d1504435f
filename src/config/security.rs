use crate::errors::PlagcheckError;

const DANGEROUS_PATTERNS: &[&str] = &[
    "../",
    "..\\",
    "<script",
    "javascript:",
    "vbscript:",
    "data:",
    "file:",
    "$(",
    "${",
    "`",
];

/// Reject any string value in the config carrying a path-traversal, markup or
/// shell-substitution pattern.
pub fn validate_security_patterns(value: &serde_yaml::Value) -> Result<(), PlagcheckError> {
    check_value(value, &mut Vec::new())
}

fn check_value(value: &serde_yaml::Value, path: &mut Vec<String>) -> Result<(), PlagcheckError> {
    match value {
        serde_yaml::Value::String(s) => {
            let lower = s.to_lowercase();
            match DANGEROUS_PATTERNS.iter().find(|p| lower.contains(*p)) {
                Some(pattern) => {
                    let at = if path.is_empty() { "root".to_string() } else { path.join(".") };
                    Err(PlagcheckError::Config(format!(
                        "Dangerous pattern '{}' found at config path: {}",
                        pattern, at
                    )))
                }
                None => Ok(()),
            }
        }
        serde_yaml::Value::Mapping(map) => {
            for (k, v) in map {
                path.push(k.as_str().unwrap_or("?").to_string());
                check_value(v, path)?;
                path.pop();
            }
            Ok(())
        }
        serde_yaml::Value::Sequence(seq) => {
            for (i, v) in seq.iter().enumerate() {
                path.push(format!("[{}]", i));
                check_value(v, path)?;
                path.pop();
            }
            Ok(())
        }
        _ => Ok(()),
    }
}
