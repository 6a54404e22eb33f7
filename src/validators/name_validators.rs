use regex::Regex;

use super::{
  output_format::{OutputFormat, YAML_ALIAS_STR},
  reserved_words::is_reserved_word,
  validation_error::{ConfigurationError, ValidationError, ValidationResult}
};

pub const NAMESPACE_SEPARATOR: char = '\\';
const PATH_SEPARATOR: char = '/';
const BUNDLE_SUFFIX: &'static str = "Bundle";

// Identifier characters match the generated language's rules: ASCII letters,
// digits and underscore, plus everything from 0x7F upward.
lazy_static! {
  static ref IDENTIFIER_REGEX: Regex = Regex::new(
    r"^[a-zA-Z_\x7F-\x{10FFFF}][a-zA-Z0-9_\x7F-\x{10FFFF}]*$"
  ).unwrap();

  static ref NAMESPACE_REGEX: Regex = Regex::new(
    r"^(?:[a-zA-Z_\x7F-\x{10FFFF}][a-zA-Z0-9_\x7F-\x{10FFFF}]*\\?)+$"
  ).unwrap();

  static ref ENTITY_NAME_REGEX: Regex = Regex::new(
    r"^[a-zA-Z_\x7F-\x{10FFFF}][a-zA-Z0-9_\x7F-\x{10FFFF}]*:[a-zA-Z0-9_\x7F-\x{10FFFF}\\/]+$"
  ).unwrap();
}

pub fn normalize_namespace(namespace: &str) -> String {
  return namespace.replace(PATH_SEPARATOR, &NAMESPACE_SEPARATOR.to_string());
}

/// Validates a bundle namespace such as `Acme\BlogBundle`. Forward slashes are
/// accepted as separators and converted to backslashes in the returned value.
///
/// When `require_vendor_namespace` is true, the namespace must have at least one
/// separator. Only the presence of the separator is checked, not the vendor
/// segment itself.
pub fn validate_bundle_namespace(
  namespace: &str,
  require_vendor_namespace: bool
) -> ValidationResult {
  let namespace: String = normalize_namespace(namespace);

  if !namespace.ends_with(BUNDLE_SUFFIX) {
    return Err(ValidationError::invalid_format("The namespace must end with Bundle."));
  }

  if !NAMESPACE_REGEX.is_match(&namespace) {
    return Err(ValidationError::invalid_format("The namespace contains invalid characters."));
  }

  if let Some(reserved_segment) = namespace.split(NAMESPACE_SEPARATOR).find(|segment| is_reserved_word(segment)) {
    return Err(ValidationError::invalid_format(format!(
      "The namespace cannot contain reserved words (\"{}\").",
      reserved_segment
    )));
  }

  if require_vendor_namespace && !namespace.contains(NAMESPACE_SEPARATOR) {
    return Err(ValidationError::invalid_format(format!(
      "The namespace must contain a vendor namespace (e.g. \"VendorName\\{}\" instead of simply \"{}\").\n\n{}",
      namespace,
      namespace,
      "If you've specified a vendor namespace, did you forget to surround it with quotes (namespace \"Acme\\BlogBundle\")?"
    )));
  }

  return Ok(namespace);
}

pub fn validate_bundle_name(bundle: &str) -> ValidationResult {
  if !IDENTIFIER_REGEX.is_match(bundle) {
    return Err(ValidationError::invalid_format(format!(
      "The bundle name {} contains invalid characters.",
      bundle
    )));
  }

  if !bundle.ends_with(BUNDLE_SUFFIX) {
    return Err(ValidationError::invalid_format("The bundle name must end with Bundle."));
  }

  return Ok(bundle.to_string());
}

/// Performs basic checks on an entity name of the form `AcmeBlogBundle:Blog/Post`.
pub fn validate_entity_name(entity: &str) -> ValidationResult {
  if !ENTITY_NAME_REGEX.is_match(entity) {
    return Err(ValidationError::invalid_format(format!(
      "The entity name isn't valid (\"{}\" given, expecting something like AcmeBlogBundle:Blog/Post)",
      entity
    )));
  }

  return Ok(entity.to_string());
}

pub fn validate_controller_name(controller: &str) -> ValidationResult {
  return validate_entity_name(controller)
    .map_err(|_| ValidationError::invalid_format(format!(
      "The controller name must contain a : (\"{}\" given, expecting something like AcmeBlogBundle:Post)",
      controller
    )));
}

pub fn parse_format(format: &str) -> ValidationResult<OutputFormat> {
  if format.is_empty() {
    return Err(ConfigurationError::MissingInput.into());
  }

  let mut format: String = format.to_ascii_lowercase();

  if format == YAML_ALIAS_STR {
    format = OutputFormat::Yml.to_string();
  }

  return OutputFormat::from_normalized_str(&format)
    .ok_or_else(|| ConfigurationError::Unsupported(format).into());
}

/// Returns the normalized configuration format. Input is case-insensitive and
/// "yaml" is accepted as an alias for "yml".
pub fn validate_format(format: &str) -> ValidationResult {
  return parse_format(format)
    .map(|output_format| output_format.to_string());
}
