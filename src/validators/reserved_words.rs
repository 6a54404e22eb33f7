use std::collections::HashSet;

// Reserved words of the language the generator emits code for. Namespace
// segments are compared against these case-insensitively.
const RESERVED_WORD_LIST: &[&'static str] = &[
  "abstract",
  "and",
  "array",
  "as",
  "break",
  "callable",
  "case",
  "catch",
  "class",
  "clone",
  "const",
  "continue",
  "declare",
  "default",
  "do",
  "else",
  "elseif",
  "enddeclare",
  "endfor",
  "endforeach",
  "endif",
  "endswitch",
  "endwhile",
  "extends",
  "final",
  "finally",
  "for",
  "foreach",
  "function",
  "global",
  "goto",
  "if",
  "implements",
  "interface",
  "instanceof",
  "insteadof",
  "namespace",
  "new",
  "or",
  "private",
  "protected",
  "public",
  "static",
  "switch",
  "throw",
  "trait",
  "try",
  "use",
  "var",
  "while",
  "xor",
  "yield",
  "__CLASS__",
  "__DIR__",
  "__FILE__",
  "__LINE__",
  "__FUNCTION__",
  "__METHOD__",
  "__NAMESPACE__",
  "__TRAIT__",
  "__halt_compiler",
  "die",
  "echo",
  "empty",
  "exit",
  "eval",
  "include",
  "include_once",
  "isset",
  "list",
  "require",
  "require_once",
  "return",
  "print",
  "unset"
];

lazy_static! {
  static ref RESERVED_WORDS: HashSet<&'static str> = RESERVED_WORD_LIST
    .iter()
    .copied()
    .collect();

  static ref LOWERCASE_RESERVED_WORDS: HashSet<String> = RESERVED_WORD_LIST
    .iter()
    .map(|word| word.to_ascii_lowercase())
    .collect();
}

pub fn get_reserved_words() -> &'static HashSet<&'static str> {
  return &RESERVED_WORDS;
}

// Only ASCII letters are folded, so look-alike characters such as the Kelvin
// sign never match a reserved word.
pub fn is_reserved_word(word: &str) -> bool {
  return LOWERCASE_RESERVED_WORDS.contains(&word.to_ascii_lowercase());
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_reserved_word_table() {
    let words = get_reserved_words();

    assert_eq!(words.len(), RESERVED_WORD_LIST.len());
    assert!(words.contains("__CLASS__"));
    assert!(words.contains("__NAMESPACE__"));
    assert!(!words.contains("__class__"));
    assert!(words.contains("insteadof"));
    assert!(words.contains("__halt_compiler"));
    assert!(!words.contains("bundle"));
  }

  #[test]
  fn test_reserved_words_ignore_case() {
    assert!(is_reserved_word("Abstract"));
    assert!(is_reserved_word("ABSTRACT"));
    assert!(is_reserved_word("__CLASS__"));
    assert!(is_reserved_word("__Namespace__"));
    assert!(is_reserved_word("Require_Once"));
    assert!(!is_reserved_word("Acme"));
    assert!(!is_reserved_word("AppBundle"));
    assert!(!is_reserved_word(""));
  }

  #[test]
  fn test_reserved_words_only_fold_ascii() {
    assert!(is_reserved_word("BREAK"));
    assert!(!is_reserved_word("BREA\u{212A}"));
    assert!(!is_reserved_word("\u{130}F"));
  }
}
