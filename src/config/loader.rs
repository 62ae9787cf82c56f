//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::ProberConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::prober::ServiceList;

/// Supported config file formats, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

/// Error type for configuration loading. Always fatal at startup.
#[derive(Debug)]
pub enum ConfigError {
    UnknownFormat,
    Io(std::io::Error),
    ParseYaml(serde_yaml::Error),
    ParseJson(serde_json::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::UnknownFormat => write!(f, "please use yaml or json config file"),
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseYaml(e) => write!(f, "YAML parse error: {}", e),
            ConfigError::ParseJson(e) => write!(f, "JSON parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Pick the config format from the file extension. `.yml` counts as YAML;
/// anything other than YAML/JSON is rejected outright.
pub fn detect_format(path: &Path) -> Result<ConfigFormat, ConfigError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
        Some("json") => Ok(ConfigFormat::Json),
        _ => Err(ConfigError::UnknownFormat),
    }
}

/// Deserialize config file contents in the given format.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<ProberConfig, ConfigError> {
    match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(ConfigError::ParseYaml),
        ConfigFormat::Json => serde_json::from_str(content).map_err(ConfigError::ParseJson),
    }
}

/// Load, parse, and validate a configuration file into a probe-ready
/// service list.
pub fn load_config(path: &Path) -> Result<ServiceList, ConfigError> {
    let format = detect_format(path)?;
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&content, format)?;
    validate_config(&config).map_err(ConfigError::Validation)
}
