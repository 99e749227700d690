use anyhow::{Context, Result};
use tracing::debug;

use super::SourceInput;
use crate::config::Config;
use crate::report::{OutputFormat, Report};

/// Classify one snippet and build its report
pub fn report_for(source: &str, language_tag: &str) -> Report {
  let result = bigo::classify(source, language_tag);
  Report::from_classification(language_tag, result)
}

pub fn execute(input: &SourceInput, format: OutputFormat, config: &Config) -> Result<()> {
  let source = input.read()?;
  let language = input.language_tag(config);
  debug!(%language, bytes = source.len(), "analyzing source");

  let rendered = report_for(&source, &language).render(format).context("failed to render report")?;
  println!("{rendered}");
  Ok(())
}
