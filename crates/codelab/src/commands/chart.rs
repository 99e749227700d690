use anyhow::{Context, Result};

use crate::report::{OutputFormat, Report};

/// Expand free-form labels; unknown ones render with rank 0
pub fn execute(time: &str, space: Option<&str>, format: OutputFormat) -> Result<()> {
  let space = space.unwrap_or(time);
  let rendered =
    Report::from_labels(time, space).render(format).context("failed to render chart")?;
  println!("{rendered}");
  Ok(())
}
