use std::path::Path;

use bundle_gen_validators::{
  batch::{load_batch_file, run_batch, BatchOutcome},
  cli_config::{clap_cli_config::Opts, CLIValidationAction},
  common::prompt::prompt_until_valid,
  config::{ValidatorConfig, DEFAULT_CONFIG_FILE_NAME},
  logger::{self, exit_error_log},
  validators::{get_reserved_words, is_reserved_word, validate_as, ValidationRequest}
};
use clap::Parser;
use colored::*;

fn main() {
  let opts: Opts = Opts::parse();

  let config: ValidatorConfig = match load_config(opts.config.as_deref()) {
    Ok(config) => config,
    Err(err_message) => exit_error_log(err_message)
  };

  let was_successful: bool = match CLIValidationAction::new(opts.subcommand, &config) {
    CLIValidationAction::Validate(request) => do_validate(&request),
    CLIValidationAction::ListReservedWords => {
      let mut words: Vec<&str> = get_reserved_words().iter().copied().collect();
      words.sort();

      for word in words {
        println!("{}", word);
      }
      true
    },
    CLIValidationAction::CheckReservedWord(word) => {
      let is_reserved: bool = is_reserved_word(&word);

      if is_reserved {
        println!("'{}' is {}", word, "reserved".red());
      }
      else {
        println!("'{}' is {}", word, "not reserved".green());
      }

      !is_reserved
    },
    CLIValidationAction::Ask { kind, default_value, require_vendor_namespace } => {
      let answer = prompt_until_valid(
        kind.display_name(),
        default_value.as_deref(),
        |value| validate_as(kind, value, require_vendor_namespace)
      );

      match answer {
        Ok(valid_value) => {
          println!("{}", valid_value);
          true
        },
        Err(io_error) => exit_error_log(io_error.to_string())
      }
    },
    CLIValidationAction::CheckBatch(batch_file_path) => do_check_batch(&batch_file_path)
  };

  if !was_successful {
    std::process::exit(1);
  }
}

fn load_config(given_config_path: Option<&str>) -> Result<ValidatorConfig, String> {
  match given_config_path {
    Some(config_path) => {
      if Path::new(config_path).is_file() {
        return ValidatorConfig::load(config_path);
      }

      logger::warn(format!(
        "Config file '{}' does not exist. Using default validator settings.",
        config_path
      ));
      return Ok(ValidatorConfig::default());
    },
    None => {
      if Path::new(DEFAULT_CONFIG_FILE_NAME).is_file() {
        return ValidatorConfig::load(DEFAULT_CONFIG_FILE_NAME);
      }

      return Ok(ValidatorConfig::default());
    }
  }
}

fn do_validate(request: &ValidationRequest) -> bool {
  return match request.validate() {
    Ok(valid_value) => {
      println!("{}", valid_value);
      true
    },
    Err(err) => {
      logger::error_log(err.to_string());

      if let Some(hint) = err.hint() {
        eprintln!("{}", hint);
      }
      false
    }
  }
}

fn do_check_batch(batch_file_path: &str) -> bool {
  let batch = match load_batch_file(batch_file_path) {
    Ok(batch) => batch,
    Err(err_message) => exit_error_log(err_message)
  };

  let outcomes: Vec<BatchOutcome> = run_batch(&batch);

  for outcome in &outcomes {
    match &outcome.result {
      Ok(valid_value) => println!(
        "{} {}: {}",
        "ok".green(),
        outcome.request.kind,
        valid_value
      ),
      Err(err) => println!(
        "{} {} '{}': {}",
        "failed".red(),
        outcome.request.kind,
        outcome.request.value,
        err
      )
    }
  }

  let failure_count: usize = outcomes.iter().filter(|outcome| !outcome.passed()).count();

  if failure_count > 0 {
    logger::error_log(format!("{} of {} requests failed validation.", failure_count, outcomes.len()));
  }

  return BatchOutcome::all_passed(&outcomes);
}
