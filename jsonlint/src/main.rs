use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{Parser as ClapParser, ValueEnum};
use confique::Config as _;
use jsonlint_core::Validator;
use tracing::*;

use crate::config::Config;
use crate::report::FileReport;

mod config;
mod fallback;
mod logging;
mod problems;
mod report;

const DEFAULT_CONFIG_PATH: &str = "jsonlint.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Annotated source snippets.
    Human,
    /// A JSON array with one entry per input.
    Json,
}

#[derive(Debug, ClapParser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON documents to check. Use `-` to read from stdin.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Path to a TOML config file. Defaults to `jsonlint.toml` if it exists.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Human)]
    format: Format,

    /// Exit with a failure status if any warning is reported.
    #[arg(long)]
    deny_warnings: bool,
}

fn main() -> ExitCode {
    logging::setup_logging();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e:?}");
            ExitCode::from(2)
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match path {
        Some(path) if !path.exists() => {
            bail!("config file `{}` does not exist", path.display())
        }
        Some(path) => path,
        None => Path::new(DEFAULT_CONFIG_PATH),
    };

    debug!(config = %path.display(), exists = path.exists());

    Config::builder()
        .file(path)
        .load()
        .with_context(|| format!("failed to load config from `{}`", path.display()))
}

fn read_input(input: &Path) -> anyhow::Result<(String, String)> {
    if input == Path::new("-") {
        let mut src = String::new();
        std::io::stdin()
            .read_to_string(&mut src)
            .context("failed to read stdin")?;
        return Ok(("<stdin>".to_string(), src));
    }

    let src = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read file `{}`", input.display()))?;
    Ok((input.display().to_string(), src))
}

/// Returns whether every input passed.
fn run() -> anyhow::Result<bool> {
    let cli = Args::parse();
    debug!(?cli);

    let config = load_config(cli.config.as_deref())?;
    debug!(?config);

    let deny_warnings = cli.deny_warnings || config.deny_warnings;
    let validator = Validator::new().with_max_depth(config.max_depth());

    let mut reports = Vec::with_capacity(cli.inputs.len());
    let mut passed = true;

    for input in &cli.inputs {
        let (path, src) = read_input(input)?;
        let problems = problems::check(&validator, &src, config.fallback_parser);

        let errors = problems.iter().filter(|p| p.is_error()).count();
        let warnings = problems.len() - errors;
        info!(%path, errors, warnings, "checked");

        if errors > 0 || (deny_warnings && warnings > 0) {
            passed = false;
        }

        match cli.format {
            Format::Human => report::print_human(&path, &src, &problems)?,
            Format::Json => reports.push(FileReport { path, problems }),
        }
    }

    if cli.format == Format::Json {
        report::print_json(&reports)?;
    }

    Ok(passed)
}
