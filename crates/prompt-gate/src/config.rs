use serde::Deserialize;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scanner: ScannerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ScannerConfig {
    #[serde(default = "default_sensitivity")]
    pub sensitivity: String,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            sensitivity: default_sensitivity(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default-value functions used by serde
// ---------------------------------------------------------------------------

fn default_sensitivity() -> String {
    "high".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ---------------------------------------------------------------------------
// Loader
// ---------------------------------------------------------------------------

/// Load configuration from a YAML file.
///
/// If the file does not exist a default configuration is returned and a
/// warning is emitted, so prompt-gate can run with sensible defaults when
/// no config file has been written yet.
pub fn load(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        warn!(
            path = %path.display(),
            "configuration file not found; using defaults"
        );
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

    let config: Config = serde_yml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("failed to parse config file {}: {e}", path.display()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let cfg = Config::default();
        assert_eq!(cfg.scanner.sensitivity, "high");
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let cfg: Config = serde_yml::from_str("scanner:\n  sensitivity: paranoid\n").unwrap();
        assert_eq!(cfg.scanner.sensitivity, "paranoid");
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn empty_mapping_uses_all_defaults() {
        let cfg: Config = serde_yml::from_str("{}").unwrap();
        assert_eq!(cfg.scanner.sensitivity, "high");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = load(Path::new("/nonexistent/prompt-gate-config.yaml")).unwrap();
        assert_eq!(cfg.scanner.sensitivity, "high");
    }
}
