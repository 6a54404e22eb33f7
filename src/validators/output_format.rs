use std::fmt;

use enum_iterator::Sequence;

const PHP_FORMAT_STR: &'static str = "php";
const XML_FORMAT_STR: &'static str = "xml";
const YML_FORMAT_STR: &'static str = "yml";
const ANNOTATION_FORMAT_STR: &'static str = "annotation";

// Accepted on input, but always normalized to "yml".
pub const YAML_ALIAS_STR: &'static str = "yaml";

/// Configuration formats the generator can write.
#[derive(Debug, Hash, PartialEq, Eq, Sequence, Clone, Copy)]
pub enum OutputFormat {
  Php,
  Xml,
  Yml,
  Annotation
}

impl OutputFormat {
  /// Matches an already-normalized (lowercase, alias-resolved) format string.
  pub fn from_normalized_str(format_str: &str) -> Option<Self> {
    return match format_str {
      PHP_FORMAT_STR => Some(Self::Php),
      XML_FORMAT_STR => Some(Self::Xml),
      YML_FORMAT_STR => Some(Self::Yml),
      ANNOTATION_FORMAT_STR => Some(Self::Annotation),
      _ => None
    }
  }

  pub fn as_str(&self) -> &'static str {
    return match self {
      Self::Php => PHP_FORMAT_STR,
      Self::Xml => XML_FORMAT_STR,
      Self::Yml => YML_FORMAT_STR,
      Self::Annotation => ANNOTATION_FORMAT_STR
    }
  }

  pub fn all_supported() -> Vec<Self> {
    return enum_iterator::all::<Self>().collect();
  }

  /// Comma-separated list of every supported format, e.g. for help text.
  pub fn supported_list_str() -> String {
    return Self::all_supported()
      .iter()
      .map(Self::as_str)
      .collect::<Vec<&str>>()
      .join(", ");
  }
}

impl fmt::Display for OutputFormat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

#[test]
fn test_format_strings() {
  let supported: Vec<&str> = OutputFormat::all_supported()
    .iter()
    .map(OutputFormat::as_str)
    .collect();

  assert_eq!(supported, vec!["php", "xml", "yml", "annotation"]);

  for format in OutputFormat::all_supported() {
    assert_eq!(OutputFormat::from_normalized_str(&format.to_string()), Some(format));
  }

  assert_eq!(OutputFormat::from_normalized_str(YAML_ALIAS_STR), None);
  assert_eq!(OutputFormat::from_normalized_str("XML"), None);
  assert_eq!(OutputFormat::supported_list_str(), "php, xml, yml, annotation");
}
