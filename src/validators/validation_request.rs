use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::{
  name_validators::{
    validate_bundle_name,
    validate_bundle_namespace,
    validate_controller_name,
    validate_entity_name,
    validate_format
  },
  validation_error::ValidationResult
};

#[derive(Serialize, Deserialize, ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationKind {
  Namespace,
  BundleName,
  ControllerName,
  EntityName,
  Format
}

impl ValidationKind {
  pub fn display_name(&self) -> &'static str {
    return match self {
      Self::Namespace => "Bundle namespace",
      Self::BundleName => "Bundle name",
      Self::ControllerName => "Controller name",
      Self::EntityName => "Entity name",
      Self::Format => "Configuration format"
    }
  }
}

impl fmt::Display for ValidationKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.display_name())
  }
}

fn default_require_vendor_namespace() -> bool {
  true
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ValidationRequest {
  pub kind: ValidationKind,
  pub value: String,
  // Only used when validating a namespace.
  #[serde(default = "default_require_vendor_namespace")]
  pub require_vendor_namespace: bool
}

impl ValidationRequest {
  pub fn new(kind: ValidationKind, value: impl Into<String>) -> Self {
    Self {
      kind,
      value: value.into(),
      require_vendor_namespace: default_require_vendor_namespace()
    }
  }

  pub fn with_vendor_namespace_required(mut self, is_required: bool) -> Self {
    self.require_vendor_namespace = is_required;
    self
  }

  pub fn validate(&self) -> ValidationResult {
    validate_as(self.kind, &self.value, self.require_vendor_namespace)
  }
}

pub fn validate_as(
  kind: ValidationKind,
  value: &str,
  require_vendor_namespace: bool
) -> ValidationResult {
  return match kind {
    ValidationKind::Namespace => validate_bundle_namespace(value, require_vendor_namespace),
    ValidationKind::BundleName => validate_bundle_name(value),
    ValidationKind::ControllerName => validate_controller_name(value),
    ValidationKind::EntityName => validate_entity_name(value),
    ValidationKind::Format => validate_format(value)
  }
}
