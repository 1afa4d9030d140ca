use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use shape_resize::config::{ConfigError, ResizeConfig};
use shape_resize::script::{self, Script, ScriptError};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "shape-resize", about = "Replay scripted resize gestures and print the resulting geometry")]
struct Cli {
    /// Path to a JSON replay script.
    script: PathBuf,

    /// Override the history snapshot limit.
    #[arg(long)]
    history_limit: Option<usize>,

    /// Pretty-print the JSON report.
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    match run(Cli::parse()) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "replay failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String, CliError> {
    let mut config = ResizeConfig::from_env()?;
    if let Some(limit) = cli.history_limit {
        config.history_limit = limit.max(1);
    }

    let raw = std::fs::read_to_string(&cli.script).map_err(|source| CliError::Read { path: cli.script.clone(), source })?;
    let parsed = Script::parse(&raw)?;
    tracing::info!(elements = parsed.elements.len(), steps = parsed.steps.len(), "replaying script");

    let report = script::run(&parsed, &config)?;
    let out = if cli.pretty { serde_json::to_string_pretty(&report)? } else { serde_json::to_string(&report)? };
    Ok(out)
}
