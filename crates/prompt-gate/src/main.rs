mod cli;
mod config;

use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use secret_scanner::{redact, summarize, RecommendedAction, ScanResult, Scanner};

use crate::cli::Cli;
use crate::config::Config;

/// Read the text to scan from the given file, or from stdin when no file
/// was named.
fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Process exit code for the recommended action, so shell callers can gate
/// on the verdict: 0 proceed, 1 review, 2 redact, 3 block.
fn exit_code(action: RecommendedAction) -> u8 {
    match action {
        RecommendedAction::Proceed => 0,
        RecommendedAction::Review => 1,
        RecommendedAction::Redact => 2,
        RecommendedAction::Block => 3,
    }
}

fn run(cli: &Cli, cfg: &Config) -> Result<(ScanResult, String)> {
    let mut scanner = Scanner::new().context("failed to compile pattern catalogue")?;

    // CLI override wins over the config file setting.
    let requested = cli
        .sensitivity
        .as_deref()
        .unwrap_or(&cfg.scanner.sensitivity);
    if !scanner.set_sensitivity(requested) {
        warn!(
            level = requested,
            fallback = %scanner.sensitivity(),
            "unknown sensitivity level; keeping default"
        );
    }

    let text = read_input(cli.input.as_deref())?;

    info!(
        sensitivity = %scanner.sensitivity(),
        bytes = text.len(),
        "scanning input"
    );

    let result = scanner.scan(&text);

    if !result.findings.is_empty() {
        warn!(
            findings = result.total_issues,
            score = result.score,
            action = ?result.recommendation.action,
            "sensitive data detected"
        );
    }

    Ok((result, text))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let cfg = match config::load(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("prompt-gate: {e:#}");
            return ExitCode::from(4);
        }
    };

    // Logs go to stderr as JSON lines; stdout is reserved for the report.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let (result, text) = match run(&cli, &cfg) {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("prompt-gate: {e:#}");
            return ExitCode::from(4);
        }
    };

    if cli.redact {
        print!("{}", redact(&text, &result.findings));
        return ExitCode::from(0);
    }

    let report = if cli.summary {
        serde_json::to_string_pretty(&summarize(&result))
    } else {
        serde_json::to_string_pretty(&result)
    };

    match report {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("prompt-gate: failed to serialize report: {e}");
            return ExitCode::from(4);
        }
    }

    ExitCode::from(exit_code(result.recommendation.action))
}
