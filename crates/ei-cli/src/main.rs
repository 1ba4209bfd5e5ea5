//! Exact-inference runtime CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use ei_runtime::{EvalConfig, EvalContext, Expr, Outcome, execute};
use std::path::PathBuf;

/// Exit status when a conditioning statement rejected the run.
const EXIT_OBSERVATION_FAILED: i32 = 2;
/// Exit status for every other runtime error.
const EXIT_RUNTIME_ERROR: i32 = 1;

#[derive(Parser)]
#[command(name = "ei")]
#[command(about = "Run probabilistic programs with exact discrete inference")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a program and print its result
    Run {
        /// Program as a JSON expression tree (see demos/)
        #[arg(short, long)]
        input: PathBuf,

        /// Evaluation settings (JSON, e.g. {"seed": 42})
        #[arg(long)]
        config: Option<PathBuf>,

        /// RNG seed for observations. Overrides the config file.
        #[arg(long)]
        seed: Option<u64>,

        /// Print the result as pretty JSON instead of text
        #[arg(long)]
        json: bool,

        /// Output file for the result. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).with_writer(std::io::stderr).init();

    match cli.command {
        Commands::Run { input, config, seed, json, output } => {
            cmd_run(&input, config.as_ref(), seed, json, output.as_ref())
        }
    }
}

fn cmd_run(
    input: &PathBuf,
    config: Option<&PathBuf>,
    seed: Option<u64>,
    json: bool,
    output: Option<&PathBuf>,
) -> Result<()> {
    let mut eval_config = match config {
        Some(path) => EvalConfig::from_json_file(path)?,
        None => EvalConfig::default(),
    };
    if seed.is_some() {
        eval_config.seed = seed;
    }

    tracing::info!(path = %input.display(), "loading program");
    let program = Expr::from_json_file(input)?;
    tracing::info!(nodes = program.size(), seed = ?eval_config.seed, "program loaded");

    let mut ctx = EvalContext::from_config(&eval_config);
    match execute(&program, &mut ctx) {
        Outcome::Value(value) => {
            tracing::info!(kind = %value.kind(), "evaluation complete");
            let text = if json { serde_json::to_string_pretty(&value.summary())? } else { value.to_string() };
            write_output(output, &text)
        }
        outcome @ Outcome::ObservationFailed => {
            eprintln!("{outcome}");
            std::process::exit(EXIT_OBSERVATION_FAILED);
        }
        outcome @ Outcome::Error(_) => {
            eprintln!("{outcome}");
            std::process::exit(EXIT_RUNTIME_ERROR);
        }
    }
}

fn write_output(output: Option<&PathBuf>, text: &str) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, format!("{text}\n"))?;
    } else {
        println!("{text}");
    }
    Ok(())
}
