use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::validators::validate_format;

pub const DEFAULT_CONFIG_FILE_NAME: &'static str = "bundle-gen.yaml";

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RawValidatorConfig {
  pub require_vendor_namespace: Option<bool>,
  pub default_format: Option<String>
}

/// Validator defaults after the config file (if any) has been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
  pub require_vendor_namespace: bool,
  // Already normalized by validate_format.
  pub default_format: Option<String>
}

impl Default for ValidatorConfig {
  fn default() -> Self {
    Self {
      require_vendor_namespace: true,
      default_format: None
    }
  }
}

impl ValidatorConfig {
  pub fn from_raw(raw_config: RawValidatorConfig) -> Result<Self, String> {
    let default_format: Option<String> = match &raw_config.default_format {
      Some(format) => Some(
        validate_format(format)
          .map_err(|err| format!("Invalid default_format in config: {}", err))?
      ),
      None => None
    };

    return Ok(Self {
      require_vendor_namespace: raw_config.require_vendor_namespace.unwrap_or(true),
      default_format
    });
  }

  pub fn from_yaml_str(yaml_str: &str) -> Result<Self, String> {
    // An empty file means "use every default".
    if yaml_str.trim().is_empty() {
      return Ok(Self::default());
    }

    // A document that is only "~" or "null" means the same as an empty file.
    let maybe_raw_config: Option<RawValidatorConfig> = serde_yaml::from_str(yaml_str)
      .map_err(|err| err.to_string())?;

    return match maybe_raw_config {
      Some(raw_config) => Self::from_raw(raw_config),
      None => Ok(Self::default())
    }
  }

  pub fn load(config_file_path: impl AsRef<Path>) -> Result<Self, String> {
    let config_file_path: &Path = config_file_path.as_ref();

    let file_contents: String = fs::read_to_string(config_file_path)
      .map_err(|err| format!(
        "Unable to read config file '{}': {}",
        config_file_path.to_string_lossy(),
        err
      ))?;

    return Self::from_yaml_str(&file_contents)
      .map_err(|err_message| format!(
        "When loading config file '{}':\n{}",
        config_file_path.to_string_lossy(),
        err_message
      ));
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_config_defaults() {
    let config = ValidatorConfig::from_yaml_str("").unwrap();
    assert_eq!(config, ValidatorConfig::default());
    assert!(config.require_vendor_namespace);
    assert_eq!(config.default_format, None);

    assert_eq!(ValidatorConfig::from_yaml_str("~\n").unwrap(), ValidatorConfig::default());
    assert_eq!(ValidatorConfig::from_yaml_str("null").unwrap(), ValidatorConfig::default());

    let partial = ValidatorConfig::from_yaml_str("require_vendor_namespace: false\n").unwrap();
    assert!(!partial.require_vendor_namespace);
  }

  #[test]
  fn test_config_normalizes_default_format() {
    let config = ValidatorConfig::from_yaml_str("default_format: YAML\n").unwrap();
    assert_eq!(config.default_format, Some(String::from("yml")));
  }

  #[test]
  fn test_invalid_configs() {
    let bad_format = ValidatorConfig::from_yaml_str("default_format: ini\n").unwrap_err();
    assert_eq!(bad_format, "Invalid default_format in config: Format \"ini\" is not supported.");

    assert!(ValidatorConfig::from_yaml_str("vendor: Acme\n").is_err());
    assert!(ValidatorConfig::from_yaml_str("require_vendor_namespace: maybe\n").is_err());
  }

  #[test]
  fn test_missing_config_file() {
    let err = ValidatorConfig::load("./this-config-does-not-exist.yaml").unwrap_err();
    assert!(err.starts_with("Unable to read config file './this-config-does-not-exist.yaml'"));
  }
}
