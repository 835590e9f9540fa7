use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser};

use spark_launcher::config::LauncherSettings;
use spark_launcher::dispatch::dispatch;
use spark_launcher::env::EnvSnapshot;
use spark_launcher::logging::init_tracing;
use spark_launcher::platform::Platform;
use spark_launcher::render::{render_batch, render_posix, write_nul_delimited};
use spark_launcher::LaunchError;

/// Prints the runtime command for a class so the calling script can run it.
///
/// On Unix-like hosts the output is the argument list, each followed by a
/// NUL byte. On Windows it is one command line for a batch script.
#[derive(Parser, Debug)]
#[command(name = "spark-launcher", version)]
struct Cli {
    /// Output format and path separator (defaults to the host's).
    #[arg(long, value_enum)]
    platform: Option<Platform>,

    /// Class to launch, followed by its arguments.
    #[arg(
        value_name = "CLASS [ARGS]...",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    command: Vec<String>,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let platform = cli.platform.unwrap_or_else(Platform::host);
    let env = EnvSnapshot::from_process();
    let settings = LauncherSettings::resolve(&env, platform);

    match run(cli.command, &settings, &env) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            if e.downcast_ref::<LaunchError>().is_some_and(LaunchError::is_usage) {
                eprintln!();
                eprintln!("{}", Cli::command().render_usage());
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<String>, settings: &LauncherSettings, env: &EnvSnapshot) -> anyhow::Result<()> {
    let dispatched = dispatch(args, settings, env)?;

    if let Some(message) = &dispatched.recovered {
        eprintln!("Error: {message}");
        eprintln!();
    }

    if dispatched.print_launch_command {
        eprintln!("Spark Command: {}", dispatched.spec.display_line());
        eprintln!("{}", "=".repeat(40));
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match settings.platform {
        Platform::Windows => {
            writeln!(out, "{}", render_batch(&dispatched.spec)).context("failed to write command")?
        }
        Platform::Posix => write_nul_delimited(&render_posix(&dispatched.spec), &mut out)
            .context("failed to write command")?,
    }
    Ok(())
}
