//! Remote execution client
//!
//! Source is forwarded to a Judge0 CE compatible endpoint (by default the
//! RapidAPI-hosted one) and treated as a black box: submit source and a
//! language id, get back stdout, stderr and a status.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;
use tracing::{debug, info};

pub const DEFAULT_SUBMISSIONS_URL: &str =
  "https://judge0-ce.p.rapidapi.com/submissions?base64_encoded=false&wait=true";
pub const DEFAULT_RAPIDAPI_HOST: &str = "judge0-ce.p.rapidapi.com";

/// Judge0 status id for "Compilation Error"
pub const COMPILATION_ERROR_STATUS: u32 = 6;

#[derive(Error, Debug)]
pub enum JudgeError {
  #[error(
    "RapidAPI key or host is missing; set JUDGE0_RAPIDAPI_KEY and JUDGE0_RAPIDAPI_HOST or the judge section of the config"
  )]
  MissingCredentials,

  #[error("failed to build HTTP client: {0}")]
  Client(#[source] reqwest::Error),

  #[error("request to {url} failed: {source}")]
  Request { url: String, source: reqwest::Error },

  #[error("submission timed out after {secs}s")]
  Timeout { secs: u64 },

  #[error("execution service returned {status}: {body}")]
  Http { status: u16, body: String },

  #[error("could not decode execution service response: {0}")]
  Decode(#[source] reqwest::Error),
}

/// Connection settings for the execution service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgeConfig {
  #[serde(default = "default_url")]
  pub url: String,
  #[serde(default)]
  pub api_key: Option<String>,
  #[serde(default = "default_api_host")]
  pub api_host: Option<String>,
  #[serde(default = "default_timeout_secs")]
  pub timeout_secs: u64,
}

fn default_url() -> String {
  DEFAULT_SUBMISSIONS_URL.to_string()
}
fn default_api_host() -> Option<String> {
  Some(DEFAULT_RAPIDAPI_HOST.to_string())
}
fn default_timeout_secs() -> u64 {
  30
}

impl Default for JudgeConfig {
  fn default() -> Self {
    Self {
      url: default_url(),
      api_key: None,
      api_host: default_api_host(),
      timeout_secs: default_timeout_secs(),
    }
  }
}

impl JudgeConfig {
  /// Key and host, both present and non-blank
  pub fn credentials(&self) -> Result<(&str, &str), JudgeError> {
    let key = self.api_key.as_deref().map(str::trim).filter(|key| !key.is_empty());
    let host = self.api_host.as_deref().map(str::trim).filter(|host| !host.is_empty());
    match (key, host) {
      (Some(key), Some(host)) => Ok((key, host)),
      _ => Err(JudgeError::MissingCredentials),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
  pub source_code: String,
  pub language_id: u32,
  pub stdin: String,
  pub args: Vec<String>,
  pub expected_output: String,
}

impl Submission {
  pub fn new(source_code: impl Into<String>, language_id: u32) -> Self {
    Self {
      source_code: source_code.into(),
      language_id,
      stdin: String::new(),
      args: Vec::new(),
      expected_output: String::new(),
    }
  }

  pub fn with_stdin(mut self, stdin: impl Into<String>) -> Self {
    self.stdin = stdin.into();
    self
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubmissionStatus {
  pub id: u32,
  #[serde(default)]
  pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubmissionResult {
  #[serde(default)]
  pub stdout: Option<String>,
  #[serde(default)]
  pub stderr: Option<String>,
  #[serde(default)]
  pub compile_output: Option<String>,
  #[serde(default)]
  pub status: Option<SubmissionStatus>,
  #[serde(default)]
  pub time: Option<String>,
  #[serde(default)]
  pub memory: Option<u64>,
}

fn non_empty(field: &Option<String>) -> Option<&str> {
  field.as_deref().filter(|text| !text.is_empty())
}

impl SubmissionResult {
  pub fn is_compilation_error(&self) -> bool {
    self.status.as_ref().is_some_and(|status| status.id == COMPILATION_ERROR_STATUS)
  }

  /// The single block of text shown to the user for this result
  pub fn display_output(&self) -> String {
    if self.is_compilation_error() {
      let details = non_empty(&self.compile_output).or(non_empty(&self.stderr)).unwrap_or("");
      return format!("Compilation Error: {details}");
    }
    if let Some(stdout) = non_empty(&self.stdout) {
      return stdout.to_string();
    }
    if let Some(stderr) = non_empty(&self.stderr) {
      return format!("Error: {stderr}");
    }
    "No output returned.".to_string()
  }
}

/// Anything that can run a submission
#[async_trait]
pub trait Executor: Send + Sync {
  async fn submit(&self, submission: &Submission) -> Result<SubmissionResult, JudgeError>;
}

/// HTTP client for a Judge0 compatible service
pub struct JudgeClient {
  client: Client,
  config: JudgeConfig,
}

impl JudgeClient {
  /// Fails before any network traffic when credentials are missing
  pub fn new(config: JudgeConfig) -> Result<Self, JudgeError> {
    config.credentials()?;
    let client = Client::builder().build().map_err(JudgeError::Client)?;
    Ok(Self { client, config })
  }

  async fn post(&self, submission: &Submission) -> Result<SubmissionResult, JudgeError> {
    let (key, host) = self.config.credentials()?;
    let url = &self.config.url;

    let response = self
      .client
      .post(url)
      .header("X-RapidAPI-Key", key)
      .header("X-RapidAPI-Host", host)
      .json(submission)
      .send()
      .await
      .map_err(|source| self.request_error(source))?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      return Err(JudgeError::Http { status: status.as_u16(), body });
    }

    response.json().await.map_err(|source| {
      if source.is_timeout() {
        JudgeError::Timeout { secs: self.config.timeout_secs }
      } else {
        JudgeError::Decode(source)
      }
    })
  }

  fn request_error(&self, source: reqwest::Error) -> JudgeError {
    if source.is_timeout() {
      JudgeError::Timeout { secs: self.config.timeout_secs }
    } else {
      JudgeError::Request { url: self.config.url.clone(), source }
    }
  }
}

#[async_trait]
impl Executor for JudgeClient {
  /// The whole exchange, sending through reading the body, shares one deadline
  async fn submit(&self, submission: &Submission) -> Result<SubmissionResult, JudgeError> {
    let secs = self.config.timeout_secs;
    info!(
      language_id = submission.language_id,
      url = %self.config.url,
      "submitting source for execution"
    );

    let result = timeout(Duration::from_secs(secs), self.post(submission))
      .await
      .map_err(|_| JudgeError::Timeout { secs })??;
    debug!(status = ?result.status, "execution finished");
    Ok(result)
  }
}
