use clap::Parser;
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "junit-summary",
    version,
    about = "Process junit test output and display to console"
)]
pub struct Cli {
    /// Filename of junit file to parse
    #[arg(long)]
    pub input: Option<String>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to config file (default: junit-summary.yaml in current dir)
    #[arg(long)]
    pub config: Option<String>,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

pub const DEFAULT_CONFIG_PATH: &str = "junit-summary.yaml";

/// Optional YAML config file: `junit-summary.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Report to summarize when `--input` is not given
    #[serde(default)]
    pub input: Option<String>,
}

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = config_path, error = %e, "ignoring malformed config file");
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

/// Resolve the report path: CLI > config.
pub fn resolve_input<'a>(cli_input: Option<&'a str>, config: &'a AppConfig) -> Option<&'a str> {
    cli_input.or(config.input.as_deref())
}

/// Log filter for a `-v` count, used when `RUST_LOG` is unset.
pub fn default_log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "junit_summary=warn",
        1 => "junit_summary=info",
        _ => "junit_summary=debug",
    }
}
