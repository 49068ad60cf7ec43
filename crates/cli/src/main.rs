//! gitexec CLI - run one git invocation and report exit code, stdout and stderr

mod logging;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use gitexec_core::config::{RunnerConfig, BINARY_ENV_VAR};
use gitexec_core::port::CommandRunner;
use gitexec_infra_system::ProcessCommandRunner;

use render::OutputFormat;

#[derive(Parser)]
#[command(name = "gitexec")]
#[command(about = "Run git in a directory and capture its exit code, stdout and stderr", long_about = None)]
#[command(version)]
struct Cli {
    /// Working directory for the git process
    #[arg(short = 'C', long = "dir", default_value = ".")]
    dir: PathBuf,

    /// Binary to launch instead of `git`
    #[arg(long, env = BINARY_ENV_VAR)]
    binary: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "raw")]
    format: OutputFormat,

    /// Arguments passed verbatim to git (e.g. `status --short`)
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    logging::init_logging()?;
    debug!(version = gitexec_core::VERSION, "gitexec starting");

    let mut config = RunnerConfig::from_env().context("Invalid runner configuration")?;
    if let Some(binary) = cli.binary {
        config = config.with_binary(binary);
    }
    config.validate().context("Invalid runner configuration")?;

    let runner = ProcessCommandRunner::new(config);
    let args: Vec<&str> = cli.args.iter().map(String::as_str).collect();
    let result = runner.execute(&cli.dir, &args);

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    render::render(
        &result,
        cli.format,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
    .context("Failed to write output")?;

    Ok(ExitCode::from(render::process_exit_code(&result)))
}
