//! Pattern classifier
//!
//! Guesses a time and a space complexity class from surface syntax alone.
//! Matching is lexical over normalized text: keywords inside comments or
//! string literals count the same as real code.
//!
//! The time guess is an ordered list of rules evaluated with early exit
//! (nested loop, single loop, recursion, then the O(1) default). The space
//! guess detects four independent signals and resolves them by priority.

use fancy_regex::Regex as BacktrackingRegex;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::complexity::ComplexityClass;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid pattern"));

static NESTED_LOOP: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"for.*for|while.*while|for.*while|while.*for").expect("valid pattern")
});

static SINGLE_LOOP: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"for\s*\(|while\s*\(|for\s+\w+\s+in|for\s+\w+\s+of").expect("valid pattern")
});

/// An identifier called, then called again later in the text
static SELF_CALL: Lazy<BacktrackingRegex> = Lazy::new(|| {
  BacktrackingRegex::new(r"(\w+)\s*\([^)]*\)[\s\S]*?\1\s*\(").expect("valid pattern")
});

static VARIABLE_ALLOCATION: Lazy<Vec<Regex>> = Lazy::new(|| {
  compile_all(&[
    r"new\s+\w+\[\s*\w+\s*\]",
    r"\w+\[\s*\]\s*=\s*new\s+\w+\[\s*\w+\s*\]",
    r"\w+\s*=\s*new\s+\w+\[\s*\w+\s*\]",
    r"list\s*=\s*\[\]",
    r"array\s*=\s*\[\]",
    r"\w+\s*=\s*\[\s*\]",
  ])
});

static MATRIX_ALLOCATION: Lazy<Vec<Regex>> = Lazy::new(|| {
  compile_all(&[
    r"new\s+\w+\[\s*\w+\s*\]\s*\[\s*\w+\s*\]",
    r"\[\s*\[\s*\]\s*for",
    r"matrix|grid|board",
  ])
});

static DYNAMIC_STRUCTURE: Lazy<Vec<Regex>> = Lazy::new(|| {
  compile_all(&[
    r"vector|arraylist|list|set|map|dictionary|hashtable|stack|queue",
    r"append|push|add|insert|put",
  ])
});

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
  patterns.iter().map(|pattern| Regex::new(pattern).expect("valid pattern")).collect()
}

fn any_match(patterns: &[Regex], text: &str) -> bool {
  patterns.iter().any(|pattern| pattern.is_match(text))
}

/// Time and space guess for one snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
  pub time_complexity: ComplexityClass,
  pub space_complexity: ComplexityClass,
}

/// Source text lowercased with every whitespace run collapsed to one space
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText(String);

impl NormalizedText {
  pub fn new(source: &str) -> Self {
    let lowered = source.to_lowercase();
    Self(WHITESPACE_RUN.replace_all(&lowered, " ").into_owned())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn contains(&self, needle: &str) -> bool {
    self.0.contains(needle)
  }

  fn contains_any(&self, needles: &[&str]) -> bool {
    needles.iter().any(|needle| self.contains(needle))
  }

  fn has_self_call(&self) -> bool {
    SELF_CALL.is_match(&self.0).unwrap_or_else(|err| {
      debug!(error = %err, "self-call pattern gave up, treating as no recursion");
      false
    })
  }
}

/// Rules of the time heuristic, in precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRule {
  NestedLoop,
  SingleLoop,
  Recursion,
}

pub const TIME_RULES: [TimeRule; 3] =
  [TimeRule::NestedLoop, TimeRule::SingleLoop, TimeRule::Recursion];

impl TimeRule {
  /// The class this rule assigns, or `None` when its signal is absent
  pub fn evaluate(self, text: &NormalizedText) -> Option<ComplexityClass> {
    match self {
      TimeRule::NestedLoop => {
        if !NESTED_LOOP.is_match(text.as_str()) {
          return None;
        }
        let loops = text.as_str().matches("for").count() + text.as_str().matches("while").count();
        Some(if loops >= 3 {
          ComplexityClass::Cubic
        } else if loops >= 2 {
          ComplexityClass::Quadratic
        } else {
          ComplexityClass::Constant
        })
      }
      TimeRule::SingleLoop => {
        if !SINGLE_LOOP.is_match(text.as_str()) {
          return None;
        }
        if text.contains_any(&["log", "/= 2", "* 2"]) {
          Some(ComplexityClass::Linearithmic)
        } else {
          Some(ComplexityClass::Linear)
        }
      }
      TimeRule::Recursion => {
        if !text.has_self_call() {
          return None;
        }
        if text.contains_any(&["fibonacci", "fib"]) {
          Some(ComplexityClass::Exponential)
        } else if text.contains("factorial") {
          Some(ComplexityClass::Factorial)
        } else {
          Some(ComplexityClass::Logarithmic)
        }
      }
    }
  }
}

/// Boolean signals feeding the space heuristic
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpaceSignals {
  pub variable_allocation: bool,
  pub matrix_allocation: bool,
  pub recursion: bool,
  pub dynamic_structure: bool,
}

impl SpaceSignals {
  pub fn detect(text: &NormalizedText) -> Self {
    Self {
      variable_allocation: any_match(&VARIABLE_ALLOCATION, text.as_str()),
      matrix_allocation: any_match(&MATRIX_ALLOCATION, text.as_str()),
      recursion: text.has_self_call(),
      dynamic_structure: any_match(&DYNAMIC_STRUCTURE, text.as_str()),
    }
  }
}

/// Rules of the space heuristic, in precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceRule {
  Matrix,
  GrowingCollection,
  Recursion,
}

pub const SPACE_RULES: [SpaceRule; 3] =
  [SpaceRule::Matrix, SpaceRule::GrowingCollection, SpaceRule::Recursion];

impl SpaceRule {
  pub fn evaluate(self, signals: &SpaceSignals, text: &NormalizedText) -> Option<ComplexityClass> {
    match self {
      SpaceRule::Matrix => signals.matrix_allocation.then_some(ComplexityClass::Quadratic),
      SpaceRule::GrowingCollection => (signals.variable_allocation || signals.dynamic_structure)
        .then_some(ComplexityClass::Linear),
      SpaceRule::Recursion => signals.recursion.then(|| {
        if text.contains_any(&["fibonacci", "fib", "factorial"]) {
          ComplexityClass::Linear
        } else {
          ComplexityClass::Logarithmic
        }
      }),
    }
  }
}

pub fn time_complexity(text: &NormalizedText) -> ComplexityClass {
  TIME_RULES
    .iter()
    .find_map(|rule| {
      rule.evaluate(text).inspect(|class| debug!(?rule, %class, "time rule matched"))
    })
    .unwrap_or(ComplexityClass::Constant)
}

pub fn space_complexity(text: &NormalizedText) -> ComplexityClass {
  let signals = SpaceSignals::detect(text);
  debug!(?signals, "space signals");
  SPACE_RULES
    .iter()
    .find_map(|rule| rule.evaluate(&signals, text))
    .unwrap_or(ComplexityClass::Constant)
}

/// Guess time and space complexity of `source`.
///
/// Never fails: text that matches no rule is O(1) on both axes. The language
/// tag is recorded but does not select a different rule set.
pub fn classify(source: &str, language_tag: &str) -> ClassificationResult {
  let text = NormalizedText::new(source);
  let result = ClassificationResult {
    time_complexity: time_complexity(&text),
    space_complexity: space_complexity(&text),
  };
  debug!(
    language = language_tag,
    time = %result.time_complexity,
    space = %result.space_complexity,
    "classified snippet"
  );
  result
}

#[cfg(test)]
mod tests {
  use super::*;

  fn normalized(source: &str) -> NormalizedText {
    NormalizedText::new(source)
  }

  #[test]
  fn test_normalize_lowercases_and_collapses_whitespace() {
    let text = normalized("FOR  i\tIN\n\n  Range(N):");
    assert_eq!(text.as_str(), "for i in range(n):");
    assert_eq!(normalized("").as_str(), "");
    assert_eq!(normalized(" \n\t ").as_str(), " ");
  }

  #[test]
  fn test_nested_loop_rule() {
    let double = normalized("for i in a:\n  for j in b:\n    pass");
    assert_eq!(TimeRule::NestedLoop.evaluate(&double), Some(ComplexityClass::Quadratic));

    let triple = normalized("for (;;) { while (x) { for (;;) {} } }");
    assert_eq!(TimeRule::NestedLoop.evaluate(&triple), Some(ComplexityClass::Cubic));

    let single = normalized("for x in xs: print(x)");
    assert_eq!(TimeRule::NestedLoop.evaluate(&single), None);
  }

  #[test]
  fn test_nested_loop_counts_raw_substrings() {
    // "format" contains "for", which counts as a third loop keyword
    let text = normalized("for i in a:\n  for j in b:\n    format(i, j)");
    assert_eq!(TimeRule::NestedLoop.evaluate(&text), Some(ComplexityClass::Cubic));
  }

  #[test]
  fn test_single_loop_rule() {
    assert_eq!(
      TimeRule::SingleLoop.evaluate(&normalized("while (n > 0) { n--; }")),
      Some(ComplexityClass::Linear)
    );
    assert_eq!(
      TimeRule::SingleLoop.evaluate(&normalized("for x of items { total += x }")),
      Some(ComplexityClass::Linear)
    );
    assert_eq!(
      TimeRule::SingleLoop.evaluate(&normalized("while (n > 1) { n /= 2; }")),
      Some(ComplexityClass::Linearithmic)
    );
    assert_eq!(
      TimeRule::SingleLoop.evaluate(&normalized("for (i = 1; i < n; i = i * 2) {}")),
      Some(ComplexityClass::Linearithmic)
    );
    assert_eq!(
      TimeRule::SingleLoop.evaluate(&normalized("for x in xs: console.log(x)")),
      Some(ComplexityClass::Linearithmic)
    );
    assert_eq!(TimeRule::SingleLoop.evaluate(&normalized("x = 1")), None);
  }

  #[test]
  fn test_recursion_rule() {
    let fib = normalized("int fib(int n) { return fib(n - 1) + fib(n - 2); }");
    assert_eq!(TimeRule::Recursion.evaluate(&fib), Some(ComplexityClass::Exponential));

    let fact = normalized("function factorial(n) { return n * factorial(n - 1); }");
    assert_eq!(TimeRule::Recursion.evaluate(&fact), Some(ComplexityClass::Factorial));

    let search = normalized("def search(lo, hi): return search(lo, mid)");
    assert_eq!(TimeRule::Recursion.evaluate(&search), Some(ComplexityClass::Logarithmic));

    assert_eq!(TimeRule::Recursion.evaluate(&normalized("x = compute(1)")), None);
  }

  #[test]
  fn test_repeated_call_reads_as_recursion() {
    // Two calls to the same function are enough; no definition is needed
    let text = normalized("print(1)\nprint(2)");
    assert_eq!(TimeRule::Recursion.evaluate(&text), Some(ComplexityClass::Logarithmic));
  }

  #[test]
  fn test_space_signals() {
    let signals = SpaceSignals::detect(&normalized("int[] a = new int[n];"));
    assert!(signals.variable_allocation);
    assert!(!signals.matrix_allocation);

    let signals = SpaceSignals::detect(&normalized("int[][] g = new int[n][m];"));
    assert!(signals.matrix_allocation);

    let signals = SpaceSignals::detect(&normalized("grid = [[0] * n for _ in range(n)]"));
    assert!(signals.matrix_allocation);

    let signals = SpaceSignals::detect(&normalized("seen = {}\nseen.insert(x)"));
    assert!(signals.dynamic_structure);

    assert_eq!(SpaceSignals::detect(&normalized("x = 1 + 2")), SpaceSignals::default());
  }

  #[test]
  fn test_space_rule_precedence() {
    let text = normalized("");
    let everything = SpaceSignals {
      variable_allocation: true,
      matrix_allocation: true,
      recursion: true,
      dynamic_structure: true,
    };
    assert_eq!(SpaceRule::Matrix.evaluate(&everything, &text), Some(ComplexityClass::Quadratic));

    let growing = SpaceSignals { dynamic_structure: true, recursion: true, ..Default::default() };
    assert_eq!(SpaceRule::Matrix.evaluate(&growing, &text), None);
    assert_eq!(
      SpaceRule::GrowingCollection.evaluate(&growing, &text),
      Some(ComplexityClass::Linear)
    );

    let recursive = SpaceSignals { recursion: true, ..Default::default() };
    assert_eq!(
      SpaceRule::Recursion.evaluate(&recursive, &text),
      Some(ComplexityClass::Logarithmic)
    );
    assert_eq!(
      SpaceRule::Recursion.evaluate(&recursive, &normalized("factorial")),
      Some(ComplexityClass::Linear)
    );
  }

  #[test]
  fn test_empty_input_is_constant() {
    let result = classify("", "python");
    assert_eq!(result.time_complexity, ComplexityClass::Constant);
    assert_eq!(result.space_complexity, ComplexityClass::Constant);
  }

  #[test]
  fn test_keyword_in_string_literal_still_counts() {
    let result = classify("greet(\"factorial\")\ngreet(\"x\")", "javascript");
    assert_eq!(result.time_complexity, ComplexityClass::Factorial);
  }
}
