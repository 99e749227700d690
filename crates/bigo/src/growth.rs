//! Growth table generator
//!
//! Expands complexity classes into chart data: a description, a rank and the
//! class's reference growth function sampled at a handful of small sizes.

use serde::Serialize;

use crate::complexity::ComplexityClass;

/// Input sizes every growth function is sampled at
pub const SAMPLE_SIZES: [u32; 5] = [1, 5, 10, 15, 20];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
  Time,
  Space,
}

impl Dimension {
  pub fn name(self) -> &'static str {
    match self {
      Dimension::Time => "time",
      Dimension::Space => "space",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrowthSample {
  pub n: u32,
  pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayDetails {
  pub label: String,
  pub description: String,
  pub rank: u8,
}

impl DisplayDetails {
  pub fn of(class: ComplexityClass) -> Self {
    Self {
      label: class.label().to_string(),
      description: class.description().to_string(),
      rank: class.rank(),
    }
  }

  /// Row for a label outside the known set: rank 0, generic description
  pub fn unknown(label: &str, dimension: Dimension) -> Self {
    Self {
      label: label.to_string(),
      description: format!("Unknown {} complexity.", dimension.name()),
      rank: 0,
    }
  }

  pub fn is_known(&self) -> bool {
    self.rank > 0
  }
}

/// Display data for a time/space pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expansion {
  pub time_details: DisplayDetails,
  pub space_details: DisplayDetails,
  pub time_growth: Vec<GrowthSample>,
  pub space_growth: Vec<GrowthSample>,
}

impl Expansion {
  pub fn time_values(&self) -> Vec<f64> {
    self.time_growth.iter().map(|sample| sample.value).collect()
  }

  pub fn space_values(&self) -> Vec<f64> {
    self.space_growth.iter().map(|sample| sample.value).collect()
  }
}

/// Sample a class's growth function; `None` (unrecognized) is zero everywhere
pub fn growth_samples(class: Option<ComplexityClass>) -> Vec<GrowthSample> {
  SAMPLE_SIZES
    .iter()
    .map(|&n| GrowthSample { n, value: class.map_or(0.0, |class| class.growth(n)) })
    .collect()
}

fn expand_one(label: &str, dimension: Dimension) -> (DisplayDetails, Vec<GrowthSample>) {
  match label.parse::<ComplexityClass>() {
    Ok(class) => (DisplayDetails::of(class), growth_samples(Some(class))),
    Err(_) => (DisplayDetails::unknown(label, dimension), growth_samples(None)),
  }
}

pub fn expand(time: ComplexityClass, space: ComplexityClass) -> Expansion {
  Expansion {
    time_details: DisplayDetails::of(time),
    space_details: DisplayDetails::of(space),
    time_growth: growth_samples(Some(time)),
    space_growth: growth_samples(Some(space)),
  }
}

/// Like [`expand`] but over free-form labels, falling back to the unknown row
pub fn expand_labels(time: &str, space: &str) -> Expansion {
  let (time_details, time_growth) = expand_one(time, Dimension::Time);
  let (space_details, space_growth) = expand_one(space, Dimension::Space);
  Expansion { time_details, space_details, time_growth, space_growth }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_expand_quadratic_and_linear() {
    let expansion = expand(ComplexityClass::Quadratic, ComplexityClass::Linear);
    assert_eq!(expansion.time_values(), vec![1.0, 25.0, 100.0, 225.0, 400.0]);
    assert_eq!(expansion.space_values(), vec![1.0, 5.0, 10.0, 15.0, 20.0]);
    assert_eq!(expansion.time_details.rank, 5);
    assert_eq!(expansion.space_details.rank, 3);
    assert_eq!(expansion.time_details.label, "O(n^2)");
    assert_eq!(
      expansion.time_details.description,
      "Quadratic — nested loops, inefficient for large input."
    );
  }

  #[test]
  fn test_samples_are_taken_at_fixed_sizes() {
    let sizes: Vec<u32> =
      growth_samples(Some(ComplexityClass::Cubic)).iter().map(|s| s.n).collect();
    assert_eq!(sizes, SAMPLE_SIZES.to_vec());
  }

  #[test]
  fn test_factorial_is_exact_for_small_n() {
    let expansion = expand(ComplexityClass::Factorial, ComplexityClass::Constant);
    let values = expansion.time_values();
    assert_eq!(values[0], 1.0);
    assert_eq!(values[1], 120.0);
    assert_eq!(values[2], 3_628_800.0);
    assert_eq!(expansion.space_values(), vec![1.0; 5]);
  }

  #[test]
  fn test_exponential_uses_powers_of_two() {
    let values = growth_samples(Some(ComplexityClass::Exponential));
    let values: Vec<f64> = values.iter().map(|s| s.value).collect();
    assert_eq!(values, vec![2.0, 32.0, 1024.0, 32768.0, 1_048_576.0]);
  }

  #[test]
  fn test_unknown_labels_fall_back() {
    let expansion = expand_labels("O(n^4)", "");
    assert_eq!(expansion.time_details.rank, 0);
    assert_eq!(expansion.time_details.label, "O(n^4)");
    assert_eq!(expansion.time_details.description, "Unknown time complexity.");
    assert_eq!(expansion.space_details.description, "Unknown space complexity.");
    assert!(!expansion.time_details.is_known());
    assert_eq!(expansion.time_values(), vec![0.0; 5]);
    assert_eq!(expansion.space_values(), vec![0.0; 5]);
  }

  #[test]
  fn test_near_miss_labels_are_unknown() {
    let expansion = expand_labels("O(nlogn)", "o(1)");
    assert_eq!(expansion.time_details.rank, 0);
    assert_eq!(expansion.time_details.label, "O(nlogn)");
    assert_eq!(expansion.time_details.description, "Unknown time complexity.");
    assert_eq!(expansion.space_details.rank, 0);
    assert_eq!(expansion.space_details.label, "o(1)");
    assert_eq!(expansion.space_values(), vec![0.0; 5]);
  }

  #[test]
  fn test_known_labels_match_typed_expand() {
    assert_eq!(
      expand_labels("O(n log n)", "O(1)"),
      expand(ComplexityClass::Linearithmic, ComplexityClass::Constant)
    );
  }
}
