use clap::{Args, Parser, Subcommand};

use crate::validators::ValidationKind;

const SKY: &'static str = "Skylar Cupit";

#[derive(Parser)]
#[command(version, author = SKY)]
#[command(about = "Validates the names given to the bundle generator")]
pub struct Opts {
  /// Path to a YAML config file. Defaults to ./bundle-gen.yaml when that file exists.
  #[arg(long, global = true)]
  pub config: Option<String>,

  #[command(subcommand)]
  pub subcommand: SubCommandStruct
}

#[derive(Subcommand)]
pub enum SubCommandStruct {
  /// Validate a bundle namespace (e.g. Acme\BlogBundle)
  Namespace(NamespaceCommand),

  /// Validate a bundle name (e.g. AcmeBlogBundle)
  BundleName(SingleValueCommand),

  /// Validate an entity name (e.g. AcmeBlogBundle:Blog/Post)
  Entity(SingleValueCommand),

  /// Validate a controller name (e.g. AcmeBlogBundle:Post)
  Controller(SingleValueCommand),

  /// Validate and normalize a configuration format (php, xml, yml, annotation)
  Format(SingleValueCommand),

  /// List the reserved words, or check whether a single word is reserved.
  ReservedWords(ReservedWordsCommand),

  /// Interactively ask for a value until a valid one is entered.
  Ask(AskCommand),

  /// Validate every request in a YAML batch file.
  Check(CheckCommand)
}

#[derive(Args)]
pub struct SingleValueCommand {
  #[arg(required = true)]
  pub value: String
}

#[derive(Args)]
pub struct NamespaceCommand {
  /// Namespace to validate. Slashes are converted to backslashes.
  #[arg(required = true)]
  pub namespace: String,

  /// Don't require a vendor namespace (allows "BlogBundle" on its own).
  #[arg(long)]
  pub no_vendor: bool
}

#[derive(Args)]
pub struct ReservedWordsCommand {
  /// Word to check (case-insensitive). Lists every reserved word when omitted.
  pub word: Option<String>
}

#[derive(Args)]
pub struct AskCommand {
  #[arg(value_enum, required = true)]
  pub kind: ValidationKind,

  /// Value used when the answer is left empty.
  #[arg(long, short)]
  pub default: Option<String>,

  /// Don't require a vendor namespace. Only used when asking for a namespace.
  #[arg(long)]
  pub no_vendor: bool
}

#[derive(Args)]
pub struct CheckCommand {
  /// YAML file containing a "requests" list.
  #[arg(required = true)]
  pub batch_file: String
}
