use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "prompt-gate",
    version,
    about = "Scans outbound prompt text for secrets and PII"
)]
pub struct Cli {
    /// File to scan; reads stdin when omitted
    pub input: Option<PathBuf>,

    /// Path to the configuration file
    #[arg(short, long, default_value = "config.yaml")]
    pub config: PathBuf,

    /// Sensitivity level: low, medium, high, or paranoid (overrides config
    /// file setting)
    #[arg(short, long)]
    pub sensitivity: Option<String>,

    /// Print the redacted text instead of the scan report
    #[arg(long)]
    pub redact: bool,

    /// Print the condensed summary instead of the full report
    #[arg(long)]
    pub summary: bool,
}
