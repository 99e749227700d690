//! Configuration management for CodeLab
//!
//! Loads the default language and execution service settings from a JSON
//! file. Every field is optional; missing ones take their defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::judge::JudgeConfig;
use crate::language::Language;

/// Project-local config locations, checked in order
pub const LOCAL_CONFIG_PATHS: [&str; 3] = [".codelab.json", "codelab.json", ".codelab/config.json"];

#[derive(Error, Debug)]
pub enum ConfigError {
  #[error("failed to read config {}: {source}", path.display())]
  Read { path: PathBuf, source: std::io::Error },

  #[error("invalid config {}: {source}", path.display())]
  Parse { path: PathBuf, source: serde_json::Error },

  #[error("unknown default language '{0}'")]
  UnknownLanguage(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
  /// Language assumed when neither a flag nor a file extension says otherwise
  #[serde(default = "default_language")]
  pub default_language: String,
  #[serde(default)]
  pub judge: JudgeConfig,
}

fn default_language() -> String {
  Language::Python.tag().to_string()
}

impl Default for Config {
  fn default() -> Self {
    Self { default_language: default_language(), judge: JudgeConfig::default() }
  }
}

impl Config {
  pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
      .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
    let config: Config = serde_json::from_str(&content)
      .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
    config.validate()?;
    Ok(config)
  }

  /// First config found under `dir`, then the user config dir, else defaults
  pub fn load_from_dir(dir: &Path) -> Result<Self> {
    let local = LOCAL_CONFIG_PATHS.iter().map(|relative| dir.join(relative));
    let global = user_config_path();

    for path in local.chain(global) {
      if path.is_file() {
        tracing::debug!(path = %path.display(), "loading config");
        return Self::load_from_file(&path);
      }
    }

    Ok(Config::default())
  }

  pub fn load() -> Result<Self> {
    Self::load_from_dir(Path::new("."))
  }

  pub fn default_language(&self) -> Language {
    Language::from_tag(&self.default_language).unwrap_or(Language::Python)
  }

  fn validate(&self) -> Result<()> {
    match Language::from_tag(&self.default_language) {
      Some(_) => Ok(()),
      None => Err(ConfigError::UnknownLanguage(self.default_language.clone())),
    }
  }
}

/// `<config dir>/codelab/config.json`, when the platform has a config dir
pub fn user_config_path() -> Option<PathBuf> {
  dirs::config_dir().map(|dir| dir.join("codelab").join("config.json"))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::judge::{DEFAULT_RAPIDAPI_HOST, DEFAULT_SUBMISSIONS_URL};
  use std::fs;
  use tempfile::TempDir;

  #[test]
  fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.default_language, "python");
    assert_eq!(config.default_language(), Language::Python);
    assert_eq!(config.judge.url, DEFAULT_SUBMISSIONS_URL);
    assert_eq!(config.judge.api_host.as_deref(), Some(DEFAULT_RAPIDAPI_HOST));
    assert_eq!(config.judge.api_key, None);
    assert_eq!(config.judge.timeout_secs, 30);
  }

  #[test]
  fn test_config_load_partial_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("codelab.json");
    fs::write(&config_path, r#"{ "judge": { "api_key": "secret", "timeout_secs": 5 } }"#).unwrap();

    let config = Config::load_from_file(&config_path).unwrap();
    assert_eq!(config.default_language, "python");
    assert_eq!(config.judge.api_key.as_deref(), Some("secret"));
    assert_eq!(config.judge.timeout_secs, 5);
    assert_eq!(config.judge.url, DEFAULT_SUBMISSIONS_URL);
  }

  #[test]
  fn test_config_load_nonexistent_file() {
    let result = Config::load_from_file(Path::new("definitely-missing-codelab.json"));
    assert!(matches!(result, Err(ConfigError::Read { .. })));
  }

  #[test]
  fn test_config_load_invalid_json() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("codelab.json");
    fs::write(&config_path, "{ invalid json }").unwrap();

    let err = Config::load_from_file(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("codelab.json"));
  }

  #[test]
  fn test_config_rejects_unknown_language() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("codelab.json");
    fs::write(&config_path, r#"{ "default_language": "fortran" }"#).unwrap();

    let err = Config::load_from_file(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownLanguage(ref tag) if tag == "fortran"));
  }

  #[test]
  fn test_load_from_dir_prefers_dotfile() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".codelab.json"), r#"{ "default_language": "java" }"#).unwrap();
    fs::write(temp_dir.path().join("codelab.json"), r#"{ "default_language": "cpp" }"#).unwrap();

    let config = Config::load_from_dir(temp_dir.path()).unwrap();
    assert_eq!(config.default_language(), Language::Java);
  }

  #[test]
  fn test_load_from_nested_dir() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join(".codelab")).unwrap();
    fs::write(
      temp_dir.path().join(".codelab").join("config.json"),
      r#"{ "default_language": "javascript" }"#,
    )
    .unwrap();

    let config = Config::load_from_dir(temp_dir.path()).unwrap();
    assert_eq!(config, Config { default_language: "javascript".to_string(), ..Config::default() });
  }
}
