use clap::Parser;
use junit_summary::cli::commands::cmd_summarize;
use junit_summary::cli::config::{Cli, default_log_filter, load_config, resolve_input};
use junit_summary::report::error::SummaryError;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG overrides the -v level; logs go to stderr so stdout stays the report
    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| default_log_filter(cli.verbose).to_string());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Printed directly so a restrictive RUST_LOG cannot hide the failure
    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), SummaryError> {
    let config = load_config(cli.config.as_deref());
    let input = resolve_input(cli.input.as_deref(), &config).ok_or(SummaryError::MissingInput)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cmd_summarize(input, &mut out)?;
    Ok(())
}
