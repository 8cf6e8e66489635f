//! Decomposer - heuristic problem decomposition for project planning.
//!
//! Reads a problem description and prints its components, critical path,
//! parallelizable work and reasoning trace.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use decomposer::{Config, Context, Decomposer, OutputFormat};

/// Break a problem description into components, dependencies and a critical path
#[derive(Parser)]
#[command(name = "decomposer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Decompose a problem description
    Decompose {
        /// Problem text (use "-" or omit to read from stdin)
        text: Option<String>,

        /// Read the problem text from a file
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Explicit constraint (repeatable)
        #[arg(short, long = "constraint")]
        constraints: Vec<String>,

        /// Context entry as key=value (repeatable)
        #[arg(long = "context")]
        context: Vec<String>,

        /// Output format (text, json); defaults to the configured format
        #[arg(short, long)]
        format: Option<String>,

        /// Omit the reasoning trace from text output
        #[arg(long)]
        no_reasoning: bool,
    },

    /// Show configuration
    Config {
        /// Show config file path
        #[arg(long)]
        path: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose { EnvFilter::new("debug") } else { EnvFilter::new("warn") };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Decompose { text, file, constraints, context, format, no_reasoning } => {
            cmd_decompose(
                text.as_deref(),
                file.as_deref(),
                &constraints,
                &context,
                format.as_deref(),
                no_reasoning,
            )?;
        }
        Commands::Config { path } => {
            cmd_config(path)?;
        }
        Commands::Completions { shell } => {
            cmd_completions(shell);
        }
    }

    Ok(())
}

/// Decompose a problem and print the result.
fn cmd_decompose(
    text: Option<&str>,
    file: Option<&Path>,
    constraints: &[String],
    context: &[String],
    format: Option<&str>,
    no_reasoning: bool,
) -> Result<()> {
    let config = Config::load()?;

    let problem = match (text, file) {
        (_, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read problem file {}", path.display()))?,
        (Some(text), None) if text != "-" => text.to_string(),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("Failed to read problem from stdin")?;
            buf
        }
    };

    let context = parse_context(context)?;
    let format = match format {
        Some(f) => f.parse()?,
        None => config.output.format,
    };

    let decomposer = Decomposer::with_settings(config.analysis.clone());
    let context = (!context.is_empty()).then_some(&context);
    let constraints = (!constraints.is_empty()).then_some(constraints);
    let result = decomposer.decompose(&problem, context, constraints)?;

    match format {
        OutputFormat::Json => println!("{}", result.to_json()?),
        OutputFormat::Text => {
            let mut output = config.output.clone();
            output.show_reasoning &= !no_reasoning;
            print!("{}", result.to_text(&output));
        }
    }

    Ok(())
}

/// Parse `key=value` pairs; values that are valid JSON keep their type.
fn parse_context(entries: &[String]) -> Result<Context> {
    let mut context = Context::new();
    for entry in entries {
        let (key, value) = entry
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("Invalid context entry '{entry}', expected key=value"))?;
        let value = serde_json::from_str(value)
            .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
        context.insert(key.trim().to_string(), value);
    }
    Ok(context)
}

/// Show configuration.
fn cmd_config(show_path: bool) -> Result<()> {
    if show_path {
        if let Some(path) = Config::global_config_path() {
            println!("{}", path.display());
        }
        return Ok(());
    }

    let config = Config::load()?;
    println!("{}", config.to_toml()?);

    Ok(())
}

/// Generate shell completions.
fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "decomposer", &mut io::stdout());
}
