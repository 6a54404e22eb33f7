use std::{error::Error, fmt};

use super::output_format::OutputFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
  InvalidFormat,
  MissingInput,
  Unsupported
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
  MissingInput,
  // Holds the lowercased format which was given.
  Unsupported(String)
}

impl fmt::Display for ConfigurationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::MissingInput => write!(f, "Please enter a configuration format."),
      Self::Unsupported(format) => write!(f, "Format \"{}\" is not supported.", format)
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
  InvalidFormat(String),
  Configuration(ConfigurationError)
}

impl ValidationError {
  pub fn invalid_format(message: impl Into<String>) -> Self {
    return Self::InvalidFormat(message.into());
  }

  pub fn kind(&self) -> ValidationErrorKind {
    return match self {
      Self::InvalidFormat(_) => ValidationErrorKind::InvalidFormat,
      Self::Configuration(ConfigurationError::MissingInput) => ValidationErrorKind::MissingInput,
      Self::Configuration(ConfigurationError::Unsupported(_)) => ValidationErrorKind::Unsupported
    }
  }

  pub fn message(&self) -> String {
    return self.to_string();
  }

  /// Extra guidance shown after the message, when there is any.
  pub fn hint(&self) -> Option<String> {
    return match self {
      Self::InvalidFormat(_) => None,
      Self::Configuration(_) => Some(format!(
        "Supported formats: {} (\"yaml\" is accepted as \"yml\").",
        OutputFormat::supported_list_str()
      ))
    }
  }
}

impl fmt::Display for ValidationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidFormat(message) => write!(f, "{}", message),
      Self::Configuration(config_error) => write!(f, "{}", config_error)
    }
  }
}

impl Error for ValidationError { }

impl From<ConfigurationError> for ValidationError {
  fn from(config_error: ConfigurationError) -> Self {
    Self::Configuration(config_error)
  }
}

pub type ValidationResult<T = String> = Result<T, ValidationError>;
