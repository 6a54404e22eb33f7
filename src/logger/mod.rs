use std::process::exit;
use colored::Colorize;

pub fn warn(message: impl AsRef<str>) {
  println!(
    "{}: {}",
    "Warning".yellow(),
    message.as_ref()
  );
}

pub fn error_log(error_message: impl AsRef<str>) {
  eprintln!(
    "{}: {}",
    "Error".red(),
    error_message.as_ref()
  );
}

pub fn exit_error_log(error_message: impl AsRef<str>) -> ! {
  error_log(error_message);
  exit(1);
}
