use std::io::{self, stdin, stdout, BufRead, Write};

use colored::Colorize;

use crate::validators::ValidationResult;

fn prompt_text(prompt: &str, default_value: Option<&str>) -> String {
  return match default_value {
    Some(default) => format!("{} [{}]: ", prompt.bright_green(), default.yellow()),
    None => format!("{}: ", prompt.bright_green())
  }
}

// Returns the trimmed answer, or None when it was left empty.
fn read_prompt_line<R: BufRead, W: Write>(
  reader: &mut R,
  writer: &mut W,
  prompt: &str
) -> io::Result<Option<String>> {
  let mut buffer = String::new();

  write!(writer, "{}", prompt)?;
  writer.flush()?;

  if reader.read_line(&mut buffer)? == 0 {
    return Err(io::Error::new(
      io::ErrorKind::UnexpectedEof,
      "Input ended before a valid value was given."
    ));
  }

  return match buffer.trim() {
    "" => Ok(None),
    answer => Ok(Some(answer.to_string()))
  }
}

/// Asks for a value until `validator` accepts it, then returns the validated
/// (normalized) value. An empty answer is replaced by `default_value` when one
/// is given. Rejected answers print the validator's message and ask again.
pub fn prompt_until_valid_from<R, W, F>(
  reader: &mut R,
  writer: &mut W,
  prompt: &str,
  default_value: Option<&str>,
  validator: F
) -> io::Result<String>
  where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> ValidationResult
{
  let full_prompt: String = prompt_text(prompt, default_value);

  loop {
    let answer: String = read_prompt_line(reader, writer, &full_prompt)?
      .unwrap_or_else(|| default_value.unwrap_or("").to_string());

    match validator(&answer) {
      Ok(valid_value) => return Ok(valid_value),
      Err(err) => {
        writeln!(writer, "{} {}", "Error:".red(), err)?;

        if let Some(hint) = err.hint() {
          writeln!(writer, "{}", hint)?;
        }
      }
    }
  }
}

pub fn prompt_until_valid<F>(
  prompt: &str,
  default_value: Option<&str>,
  validator: F
) -> io::Result<String>
  where F: Fn(&str) -> ValidationResult
{
  return prompt_until_valid_from(
    &mut stdin().lock(),
    &mut stdout(),
    prompt,
    default_value,
    validator
  );
}
