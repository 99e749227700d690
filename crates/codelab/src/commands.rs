//! Command implementations for the codelab CLI

pub mod analyze;
pub mod chart;
pub mod languages;
pub mod run;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use crate::config::Config;
use crate::language::Language;

/// Where source text comes from: a file, or stdin for `None` and `-`
#[derive(Debug, Clone, Default)]
pub struct SourceInput {
  pub path: Option<String>,
  pub language: Option<String>,
}

impl SourceInput {
  fn file_path(&self) -> Option<&Path> {
    self.path.as_deref().filter(|path| *path != "-").map(Path::new)
  }

  pub fn read(&self) -> Result<String> {
    match self.file_path() {
      Some(path) => std::fs::read_to_string(path)
        .with_context(|| format!("failed to read source file {}", path.display())),
      None => {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source).context("failed to read source from stdin")?;
        Ok(source)
      }
    }
  }

  /// Explicit tag first, then the file extension, then the configured default.
  /// Explicit tags are passed through even when they are not a playground language.
  pub fn language_tag(&self, config: &Config) -> String {
    if let Some(tag) = &self.language {
      return tag.trim().to_lowercase();
    }
    self
      .file_path()
      .and_then(Language::from_path)
      .unwrap_or_else(|| config.default_language())
      .tag()
      .to_string()
  }
}
