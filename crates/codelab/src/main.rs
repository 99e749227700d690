use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use std::process;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use codelab::commands::{self, run::RunOptions, SourceInput};
use codelab::{Config, OutputFormat};

#[derive(Parser)]
#[command(name = "codelab")]
#[command(about = "CodeLab - guess the complexity of a snippet, chart it, and run it remotely")]
#[command(version)]
struct Cli {
  /// Configuration file path
  #[arg(short, long, global = true)]
  config: Option<String>,

  /// Enable debug logging
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Command,
}

/// Where to read source and how to label it
#[derive(Args)]
struct SourceArgs {
  /// Source file; omit or pass "-" to read stdin
  #[arg(value_name = "PATH")]
  path: Option<String>,

  /// Language tag (python, javascript, java, cpp); guessed from the extension when omitted
  #[arg(short, long)]
  language: Option<String>,
}

impl From<SourceArgs> for SourceInput {
  fn from(args: SourceArgs) -> Self {
    SourceInput { path: args.path, language: args.language }
  }
}

#[derive(Subcommand)]
enum Command {
  /// Guess time and space complexity of a snippet
  Analyze {
    #[command(flatten)]
    source: SourceArgs,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,
  },
  /// Chart complexity labels without analyzing code
  Chart {
    /// Time complexity label, e.g. "O(n log n)"
    time: String,
    /// Space complexity label (defaults to the time label)
    space: Option<String>,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,
  },
  /// List supported languages
  Languages,
  /// Print a language's starter program
  Sample {
    /// Language tag
    language: String,
  },
  /// Analyze a snippet, then run it on the remote execution service
  Run {
    #[command(flatten)]
    source: SourceArgs,
    /// Text passed to the program's stdin
    #[arg(long)]
    stdin: Option<String>,
    /// RapidAPI key for the execution service
    #[arg(long, env = "JUDGE0_RAPIDAPI_KEY", hide_env_values = true)]
    api_key: Option<String>,
    /// RapidAPI host for the execution service
    #[arg(long, env = "JUDGE0_RAPIDAPI_HOST")]
    api_host: Option<String>,
    /// Submissions endpoint
    #[arg(long, env = "JUDGE0_URL")]
    url: Option<String>,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,
  },
}

fn init_tracing(verbose: bool) {
  let default_filter =
    if verbose { "codelab=debug,bigo=debug,info" } else { "codelab=info,bigo=info,warn" };
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
    .with(filter)
    .init();
}

fn load_config(path: Option<&str>) -> Result<Config> {
  match path {
    Some(path) => Config::load_from_file(path).context("failed to load configuration"),
    None => Config::load().context("failed to load configuration"),
  }
}

async fn dispatch(cli: Cli) -> Result<()> {
  match cli.command {
    Command::Analyze { source, format } => {
      let config = load_config(cli.config.as_deref())?;
      commands::analyze::execute(&source.into(), format, &config)
    }
    Command::Chart { time, space, format } => {
      commands::chart::execute(&time, space.as_deref(), format)
    }
    Command::Languages => commands::languages::list(),
    Command::Sample { language } => commands::languages::sample(&language),
    Command::Run { source, stdin, api_key, api_host, url, format } => {
      let mut config = load_config(cli.config.as_deref())?;
      if api_key.is_some() {
        config.judge.api_key = api_key;
      }
      if api_host.is_some() {
        config.judge.api_host = api_host;
      }
      if let Some(url) = url {
        config.judge.url = url;
      }
      let options = RunOptions { input: source.into(), stdin, format };
      commands::run::execute(&options, &config).await
    }
  }
}

#[tokio::main]
async fn main() {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  if let Err(err) = dispatch(cli).await {
    eprintln!("{} {err:#}", "error:".red().bold());
    process::exit(1);
  }
}
