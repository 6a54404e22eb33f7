use crate::{config::ValidatorConfig, validators::{ValidationKind, ValidationRequest}};

use self::clap_cli_config::SubCommandStruct;
pub mod clap_cli_config;

pub enum CLIValidationAction {
  Validate(ValidationRequest),
  ListReservedWords,
  CheckReservedWord(String),
  Ask {
    kind: ValidationKind,
    default_value: Option<String>,
    require_vendor_namespace: bool
  },
  CheckBatch(String)
}

impl CLIValidationAction {
  pub fn new(command: SubCommandStruct, config: &ValidatorConfig) -> Self {
    match command {
      SubCommandStruct::Namespace(namespace_info) => {
        return CLIValidationAction::Validate(
          ValidationRequest::new(ValidationKind::Namespace, namespace_info.namespace)
            .with_vendor_namespace_required(
              resolve_vendor_requirement(namespace_info.no_vendor, config)
            )
        )
      },
      SubCommandStruct::BundleName(value_info) => {
        return CLIValidationAction::Validate(ValidationRequest::new(ValidationKind::BundleName, value_info.value))
      },
      SubCommandStruct::Entity(value_info) => {
        return CLIValidationAction::Validate(ValidationRequest::new(ValidationKind::EntityName, value_info.value))
      },
      SubCommandStruct::Controller(value_info) => {
        return CLIValidationAction::Validate(ValidationRequest::new(ValidationKind::ControllerName, value_info.value))
      },
      SubCommandStruct::Format(value_info) => {
        return CLIValidationAction::Validate(ValidationRequest::new(ValidationKind::Format, value_info.value))
      },
      SubCommandStruct::ReservedWords(reserved_info) => {
        return match reserved_info.word {
          Some(word) => CLIValidationAction::CheckReservedWord(word),
          None => CLIValidationAction::ListReservedWords
        }
      },
      SubCommandStruct::Ask(ask_info) => {
        let default_value: Option<String> = match ask_info.kind {
          ValidationKind::Format => ask_info.default.or_else(|| config.default_format.clone()),
          _ => ask_info.default
        };

        return CLIValidationAction::Ask {
          kind: ask_info.kind,
          default_value,
          require_vendor_namespace: resolve_vendor_requirement(ask_info.no_vendor, config)
        }
      },
      SubCommandStruct::Check(check_info) => {
        return CLIValidationAction::CheckBatch(check_info.batch_file)
      }
    }
  }
}

fn resolve_vendor_requirement(no_vendor_flag: bool, config: &ValidatorConfig) -> bool {
  return !no_vendor_flag && config.require_vendor_namespace;
}

#[cfg(test)]
mod tests {
  use clap::Parser;

  use super::*;
  use super::clap_cli_config::Opts;

  fn action_for(args: &[&str], config: &ValidatorConfig) -> CLIValidationAction {
    let opts = Opts::try_parse_from(args).unwrap();
    CLIValidationAction::new(opts.subcommand, config)
  }

  #[test]
  fn test_namespace_vendor_requirement() {
    let strict = ValidatorConfig::default();
    let relaxed = ValidatorConfig {
      require_vendor_namespace: false,
      default_format: None
    };

    match action_for(&["bundle-gen-validators", "namespace", "AppBundle"], &strict) {
      CLIValidationAction::Validate(request) => {
        assert_eq!(request.kind, ValidationKind::Namespace);
        assert!(request.require_vendor_namespace);
      },
      _ => panic!("Expected a validation action")
    }

    match action_for(&["bundle-gen-validators", "namespace", "AppBundle", "--no-vendor"], &strict) {
      CLIValidationAction::Validate(request) => assert!(!request.require_vendor_namespace),
      _ => panic!("Expected a validation action")
    }

    match action_for(&["bundle-gen-validators", "namespace", "AppBundle"], &relaxed) {
      CLIValidationAction::Validate(request) => assert_eq!(request.validate().unwrap(), "AppBundle"),
      _ => panic!("Expected a validation action")
    }
  }

  #[test]
  fn test_value_subcommands() {
    let config = ValidatorConfig::default();

    let expected_kinds = [
      ("bundle-name", ValidationKind::BundleName),
      ("entity", ValidationKind::EntityName),
      ("controller", ValidationKind::ControllerName),
      ("format", ValidationKind::Format)
    ];

    for (subcommand, expected_kind) in expected_kinds {
      match action_for(&["bundle-gen-validators", subcommand, "AppBundle:Post"], &config) {
        CLIValidationAction::Validate(request) => {
          assert_eq!(request.kind, expected_kind);
          assert_eq!(request.value, "AppBundle:Post");
        },
        _ => panic!("Expected a validation action for {}", subcommand)
      }
    }
  }

  #[test]
  fn test_ask_uses_configured_default_format() {
    let config = ValidatorConfig {
      require_vendor_namespace: true,
      default_format: Some(String::from("yml"))
    };

    match action_for(&["bundle-gen-validators", "ask", "format"], &config) {
      CLIValidationAction::Ask { kind, default_value, .. } => {
        assert_eq!(kind, ValidationKind::Format);
        assert_eq!(default_value, Some(String::from("yml")));
      },
      _ => panic!("Expected an ask action")
    }

    match action_for(&["bundle-gen-validators", "ask", "format", "--default", "xml"], &config) {
      CLIValidationAction::Ask { default_value, .. } => assert_eq!(default_value, Some(String::from("xml"))),
      _ => panic!("Expected an ask action")
    }

    match action_for(&["bundle-gen-validators", "ask", "bundle-name"], &config) {
      CLIValidationAction::Ask { default_value, .. } => assert_eq!(default_value, None),
      _ => panic!("Expected an ask action")
    }
  }

  #[test]
  fn test_reserved_words_and_check() {
    let config = ValidatorConfig::default();

    assert!(matches!(
      action_for(&["bundle-gen-validators", "reserved-words"], &config),
      CLIValidationAction::ListReservedWords
    ));
    assert!(matches!(
      action_for(&["bundle-gen-validators", "reserved-words", "Class"], &config),
      CLIValidationAction::CheckReservedWord(word) if word == "Class"
    ));
    assert!(matches!(
      action_for(&["bundle-gen-validators", "--config", "other.yaml", "check", "names.yaml"], &config),
      CLIValidationAction::CheckBatch(path) if path == "names.yaml"
    ));
  }

  #[test]
  fn test_missing_arguments_are_rejected() {
    assert!(Opts::try_parse_from(["bundle-gen-validators", "namespace"]).is_err());
    assert!(Opts::try_parse_from(["bundle-gen-validators", "ask", "route"]).is_err());
    assert!(Opts::try_parse_from(["bundle-gen-validators"]).is_err());
  }
}
