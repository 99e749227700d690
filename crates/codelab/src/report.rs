//! Complexity report rendering
//!
//! Cards for the time and space guesses, rank bars scaled against the worst
//! rank, and a table of growth samples.

use bigo::{expand, expand_labels, ClassificationResult, DisplayDetails, Expansion, MAX_RANK};
use clap::ValueEnum;
use colored::*;
use serde::Serialize;
use std::fmt::Write;

const BAR_WIDTH: usize = 32;
const TABLE_BAR_WIDTH: usize = 24;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Pretty,
  Compact,
  Json,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub language: Option<String>,
  pub time_complexity: String,
  pub space_complexity: String,
  pub expansion: Expansion,
}

impl Report {
  pub fn from_classification(language: &str, result: ClassificationResult) -> Self {
    Self {
      language: Some(language.to_string()),
      time_complexity: result.time_complexity.to_string(),
      space_complexity: result.space_complexity.to_string(),
      expansion: expand(result.time_complexity, result.space_complexity),
    }
  }

  pub fn from_labels(time: &str, space: &str) -> Self {
    Self {
      language: None,
      time_complexity: time.to_string(),
      space_complexity: space.to_string(),
      expansion: expand_labels(time, space),
    }
  }

  pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
      OutputFormat::Pretty => Ok(render_pretty(self)),
      OutputFormat::Compact => Ok(render_compact(self)),
      OutputFormat::Json => serde_json::to_string_pretty(self),
    }
  }
}

/// Bar whose filled share is `rank / MAX_RANK`
pub fn rank_bar(rank: u8, width: usize) -> String {
  let filled = usize::from(rank.min(MAX_RANK)) * width / usize::from(MAX_RANK);
  format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for `value` relative to `max`, at least one cell for any positive value
fn value_bar(value: f64, max: f64, width: usize) -> String {
  if max <= 0.0 || value <= 0.0 {
    return String::new();
  }
  let cells = ((value / max) * width as f64).round() as usize;
  "▇".repeat(cells.clamp(1, width))
}

pub fn format_value(value: f64) -> String {
  if value.fract() == 0.0 && value.abs() < 1e15 {
    format!("{value:.0}")
  } else if value.abs() >= 1e15 {
    format!("{value:.3e}")
  } else {
    format!("{value:.2}")
  }
}

fn render_compact(report: &Report) -> String {
  let mut line = String::new();
  if let Some(language) = &report.language {
    let _ = write!(line, "language={language} ");
  }
  let _ = write!(line, "time={} space={}", report.time_complexity, report.space_complexity);
  line
}

fn rank_color(rank: u8) -> Color {
  match rank {
    0 => Color::BrightBlack,
    1..=3 => Color::Green,
    4..=5 => Color::Yellow,
    _ => Color::Red,
  }
}

fn render_card(out: &mut String, title: &str, details: &DisplayDetails) {
  let color = rank_color(details.rank);
  let _ = writeln!(out, "{}  {}", title.bold(), details.label.color(color).bold());
  let _ = writeln!(out, "  {}", details.description.italic());
  let _ = writeln!(
    out,
    "  {} {}/{}",
    rank_bar(details.rank, BAR_WIDTH).color(color),
    details.rank,
    MAX_RANK
  );
}

fn render_growth_table(out: &mut String, expansion: &Expansion) {
  let time_max = expansion.time_values().into_iter().fold(0.0, f64::max);

  let _ = writeln!(out, "{}", "Growth samples".bold());
  let _ = writeln!(out, "  {:>4}  {:>14}  {:>14}  {}", "n", "time", "space", "time shape");
  for (time, space) in expansion.time_growth.iter().zip(&expansion.space_growth) {
    let _ = writeln!(
      out,
      "  {:>4}  {:>14}  {:>14}  {}",
      time.n,
      format_value(time.value),
      format_value(space.value),
      value_bar(time.value, time_max, TABLE_BAR_WIDTH).purple()
    );
  }
  if !expansion.time_details.is_known() && !expansion.space_details.is_known() {
    let _ = writeln!(out, "  {}", "(no growth data for unknown labels)".dimmed());
  }
}

fn render_pretty(report: &Report) -> String {
  let mut out = String::new();
  let heading = match &report.language {
    Some(language) => format!("Complexity Analysis ({language})"),
    None => "Complexity Analysis".to_string(),
  };
  let _ = writeln!(out, "{}", heading.purple().bold());
  let _ = writeln!(out, "{}", "=".repeat(60));
  render_card(&mut out, "Time Complexity ", &report.expansion.time_details);
  let _ = writeln!(out);
  render_card(&mut out, "Space Complexity", &report.expansion.space_details);
  let _ = writeln!(out);
  render_growth_table(&mut out, &report.expansion);
  out
}
