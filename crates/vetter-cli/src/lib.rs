//! vetter CLI — validate JSON documents against vetter schemas.
//!
//! ```bash
//! vetter check --schema user.schema.json --data user.json --pretty
//! vetter check -s user.schema.json -d - --flat < user.json
//! vetter normalize user.schema.json --config messages.toml
//! ```
//!
//! Exit status for `check`: 0 when the data is valid, 1 when the result holds
//! errors, 2 when a file could not be read or parsed.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use vetter_engine::{normalize, Engine, EngineConfig, MessageTable, Schema, ValidationResult};

#[derive(Debug, Parser)]
#[command(name = "vetter", version, about = "Validate JSON data against a declarative schema")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a data file against a schema file.
    Check(CheckArgs),
    /// Print a schema with every level's message table filled in.
    Normalize(NormalizeArgs),
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Schema file (JSON).
    #[arg(short, long)]
    pub schema: PathBuf,
    /// Data file (JSON), or `-` for stdin.
    #[arg(short, long)]
    pub data: PathBuf,
    /// Engine config file (TOML).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Pretty-print the JSON result.
    #[arg(long)]
    pub pretty: bool,
    /// Print one `path: error (message)` line per error instead of JSON.
    #[arg(long, conflicts_with = "pretty")]
    pub flat: bool,
}

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Schema file (JSON).
    pub schema: PathBuf,
    /// Engine config file (TOML).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// What a command produced: text for stdout, and whether it counts as success.
#[derive(Debug)]
pub struct Outcome {
    pub output: String,
    pub valid: bool,
}

pub async fn run(cli: Cli) -> Result<Outcome> {
    match cli.command {
        Command::Check(args) => {
            let result = check(&args).await?;
            let output = if args.flat {
                render_flat(&result)
            } else if args.pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            Ok(Outcome {
                output,
                valid: result.is_valid(),
            })
        }
        Command::Normalize(args) => {
            let config = load_config(args.config.as_deref())?;
            let schema = load_schema(&args.schema)?;
            let normalized = normalize_tree(&schema, &config.messages);
            Ok(Outcome {
                output: serde_json::to_string_pretty(&normalized)?,
                valid: true,
            })
        }
    }
}

/// Load the inputs named by `args` and validate.
pub async fn check(args: &CheckArgs) -> Result<ValidationResult> {
    let config = load_config(args.config.as_deref())?;
    let schema = load_schema(&args.schema)?;
    let data = load_data(&args.data)?;

    let engine = Engine::new(config);
    let result = engine.validate(Some(&schema), &data).await;
    tracing::info!(
        schema = %args.schema.display(),
        errors = result.error_count(),
        "checked document"
    );
    Ok(result)
}

pub fn load_schema(path: &Path) -> Result<Schema> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read schema {}", path.display()))?;
    Schema::from_json(&text).with_context(|| format!("invalid schema {}", path.display()))
}

pub fn load_data(path: &Path) -> Result<Value> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read data from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read data {}", path.display()))?
    };
    serde_json::from_str(&text).with_context(|| format!("invalid JSON in {}", path.display()))
}

pub fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => Ok(EngineConfig::load(path)?),
        None => Ok(EngineConfig::default()),
    }
}

/// Normalize every level of a schema, not just the root.
pub fn normalize_tree(schema: &Schema, defaults: &MessageTable) -> Schema {
    let mut normalized = normalize(schema, defaults).into_schema();
    if let Some(fields) = normalized.fields.as_mut() {
        for child in fields.values_mut() {
            *child = normalize_tree(child, defaults);
        }
    }
    normalized
}

/// One line per error; `valid` when there are none.
pub fn render_flat(result: &ValidationResult) -> String {
    let flat = result.flatten();
    if flat.is_empty() {
        return "valid".to_string();
    }
    let mut lines = Vec::new();
    for (path, errors) in &flat {
        let path = if path.is_empty() { "(root)" } else { path.as_str() };
        for error in errors {
            lines.push(format!("{path}: {error}"));
        }
    }
    lines.join("\n")
}
