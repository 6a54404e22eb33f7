use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::validators::{ValidationError, ValidationRequest};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct BatchFile {
  pub requests: Vec<ValidationRequest>
}

#[derive(Debug)]
pub struct BatchOutcome<'a> {
  pub request: &'a ValidationRequest,
  pub result: Result<String, ValidationError>
}

impl<'a> BatchOutcome<'a> {
  pub fn passed(&self) -> bool {
    self.result.is_ok()
  }

  pub fn all_passed(outcomes: &[BatchOutcome<'a>]) -> bool {
    outcomes.iter().all(BatchOutcome::passed)
  }
}

pub fn parse_batch_str(yaml_str: &str) -> Result<BatchFile, String> {
  return serde_yaml::from_str(yaml_str)
    .map_err(|err| err.to_string());
}

pub fn load_batch_file(batch_file_path: impl AsRef<Path>) -> Result<BatchFile, String> {
  let batch_file_path: &Path = batch_file_path.as_ref();

  let file_contents: String = fs::read_to_string(batch_file_path)
    .map_err(|err| format!(
      "Unable to read batch file '{}': {}",
      batch_file_path.to_string_lossy(),
      err
    ))?;

  return parse_batch_str(&file_contents)
    .map_err(|err_message| format!(
      "When parsing batch file '{}':\n{}",
      batch_file_path.to_string_lossy(),
      err_message
    ));
}

/// Validates every request in order. A failing request does not stop the rest.
pub fn run_batch(batch: &BatchFile) -> Vec<BatchOutcome> {
  return batch.requests
    .iter()
    .map(|request| BatchOutcome {
      request,
      result: request.validate()
    })
    .collect();
}
