use anyhow::{Context, Result};
use colored::*;

use super::analyze::report_for;
use super::SourceInput;
use crate::config::Config;
use crate::judge::{Executor, JudgeClient, Submission, SubmissionResult};
use crate::language::judge0_language_id;
use crate::report::OutputFormat;

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
  pub input: SourceInput,
  pub stdin: Option<String>,
  pub format: OutputFormat,
}

pub struct RunOutcome {
  pub result: SubmissionResult,
  pub output: String,
}

pub async fn submit(
  executor: &dyn Executor,
  source: &str,
  language_tag: &str,
  stdin: Option<&str>,
) -> Result<RunOutcome> {
  let submission =
    Submission::new(source, judge0_language_id(language_tag)).with_stdin(stdin.unwrap_or_default());
  let result = executor.submit(&submission).await.context("remote execution failed")?;
  let output = result.display_output();
  Ok(RunOutcome { result, output })
}

pub async fn execute(options: &RunOptions, config: &Config) -> Result<()> {
  let source = options.input.read()?;
  let language = options.input.language_tag(config);

  // the analysis is printed even if execution fails afterwards
  let rendered =
    report_for(&source, &language).render(options.format).context("failed to render report")?;
  println!("{rendered}");

  let client = JudgeClient::new(config.judge.clone()).context("cannot submit for execution")?;
  let outcome = submit(&client, &source, &language, options.stdin.as_deref()).await?;

  if options.format == OutputFormat::Pretty {
    println!("{}", "Output".purple().bold());
    println!("{}", "=".repeat(60));
    if let Some(status) = &outcome.result.status {
      println!("{}", format!("[{}]", status.description).dimmed());
    }
  }
  println!("{}", outcome.output.trim_end());
  Ok(())
}
