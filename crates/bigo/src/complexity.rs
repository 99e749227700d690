//! Complexity classes
//!
//! The eight asymptotic labels the heuristic can produce, ordered best to worst.
//! Rank, description and growth function are per-variant data.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Highest rank a class can have, used to scale bars
pub const MAX_RANK: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComplexityClass {
  #[serde(rename = "O(1)")]
  Constant,
  #[serde(rename = "O(log n)")]
  Logarithmic,
  #[serde(rename = "O(n)")]
  Linear,
  #[serde(rename = "O(n log n)")]
  Linearithmic,
  #[serde(rename = "O(n^2)")]
  Quadratic,
  #[serde(rename = "O(n^3)")]
  Cubic,
  #[serde(rename = "O(2^n)")]
  Exponential,
  #[serde(rename = "O(n!)")]
  Factorial,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized complexity label '{label}'")]
pub struct ParseComplexityError {
  pub label: String,
}

impl ComplexityClass {
  /// Every class, best first
  pub const ALL: [ComplexityClass; 8] = [
    ComplexityClass::Constant,
    ComplexityClass::Logarithmic,
    ComplexityClass::Linear,
    ComplexityClass::Linearithmic,
    ComplexityClass::Quadratic,
    ComplexityClass::Cubic,
    ComplexityClass::Exponential,
    ComplexityClass::Factorial,
  ];

  pub fn label(self) -> &'static str {
    match self {
      ComplexityClass::Constant => "O(1)",
      ComplexityClass::Logarithmic => "O(log n)",
      ComplexityClass::Linear => "O(n)",
      ComplexityClass::Linearithmic => "O(n log n)",
      ComplexityClass::Quadratic => "O(n^2)",
      ComplexityClass::Cubic => "O(n^3)",
      ComplexityClass::Exponential => "O(2^n)",
      ComplexityClass::Factorial => "O(n!)",
    }
  }

  /// Position in the best-to-worst order, 1 through [`MAX_RANK`]
  pub fn rank(self) -> u8 {
    match self {
      ComplexityClass::Constant => 1,
      ComplexityClass::Logarithmic => 2,
      ComplexityClass::Linear => 3,
      ComplexityClass::Linearithmic => 4,
      ComplexityClass::Quadratic => 5,
      ComplexityClass::Cubic => 6,
      ComplexityClass::Exponential => 7,
      ComplexityClass::Factorial => 8,
    }
  }

  pub fn description(self) -> &'static str {
    match self {
      ComplexityClass::Constant => {
        "Constant time/space — best performance, independent of input size."
      }
      ComplexityClass::Logarithmic => {
        "Logarithmic — good performance, input size increases exponentially."
      }
      ComplexityClass::Linear => "Linear — performance grows proportionally with input size.",
      ComplexityClass::Linearithmic => "Linearithmic — common in efficient sorting algorithms.",
      ComplexityClass::Quadratic => "Quadratic — nested loops, inefficient for large input.",
      ComplexityClass::Cubic => "Cubic — triple nested loops, very slow for large input.",
      ComplexityClass::Exponential => {
        "Exponential — increases rapidly, typically recursion-heavy."
      }
      ComplexityClass::Factorial => {
        "Factorial — extremely inefficient, only for very small input sizes."
      }
    }
  }

  /// Reference growth function evaluated at `n`
  pub fn growth(self, n: u32) -> f64 {
    let x = f64::from(n);
    match self {
      ComplexityClass::Constant => 1.0,
      ComplexityClass::Logarithmic => x.log2(),
      ComplexityClass::Linear => x,
      ComplexityClass::Linearithmic => x * x.log2(),
      ComplexityClass::Quadratic => x * x,
      ComplexityClass::Cubic => x * x * x,
      ComplexityClass::Exponential => x.exp2(),
      ComplexityClass::Factorial => factorial(n),
    }
  }
}

fn factorial(n: u32) -> f64 {
  (2..=n).fold(1.0, |product, i| product * f64::from(i))
}

impl fmt::Display for ComplexityClass {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

impl FromStr for ComplexityClass {
  type Err = ParseComplexityError;

  /// Exact label lookup; `O(nlogn)` or `o(1)` are not labels
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    ComplexityClass::ALL
      .into_iter()
      .find(|class| class.label() == s)
      .ok_or_else(|| ParseComplexityError { label: s.to_string() })
  }
}
