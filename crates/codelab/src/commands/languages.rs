use anyhow::{anyhow, Result};
use colored::*;

use crate::language::Language;

pub fn list() -> Result<()> {
  let header = format!("{:<12} {:<12} {}", "TAG", "NAME", "JUDGE0 ID");
  println!("{}", header.bold());
  for language in Language::ALL {
    println!("{:<12} {:<12} {}", language.tag(), language.name(), language.judge0_id());
  }
  Ok(())
}

pub fn sample(tag: &str) -> Result<()> {
  let language = Language::from_tag(tag).ok_or_else(|| {
    let known: Vec<&str> = Language::ALL.iter().map(|language| language.tag()).collect();
    anyhow!("unknown language '{tag}' (expected one of: {})", known.join(", "))
  })?;
  println!("{}", language.sample());
  Ok(())
}
