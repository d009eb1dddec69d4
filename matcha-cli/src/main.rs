//! Matcha - add components and dependencies to your project
//!
//! CLI entry point. Commands are linear sequences of filesystem writes and
//! at most one subprocess invocation; any failure is normalized to a
//! user-facing message and a non-zero exit.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod init_cli;
mod package_manager;
mod templates;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "matcha",
    about = "Add components and dependencies to your project",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,
}

#[derive(Parser, Debug)]
enum Command {
    /// Initialize your project and install dependencies
    Init {
        /// The working directory. Defaults to the current directory.
        #[clap(short = 'c', long, default_value = ".")]
        cwd: PathBuf,
    },
}

/// Configure logging from the CLI flag; all log output goes to stderr so
/// stdout stays human-readable progress text only
fn initialize_tracing(log_level: &LogLevel) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level.to_filter_directive()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Termination signals map directly to immediate exit
fn spawn_signal_handlers() {
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            std::process::exit(0);
        }
    });

    #[cfg(unix)]
    tokio::spawn(async {
        use tokio::signal::unix::{signal, SignalKind};
        if let Ok(mut term) = signal(SignalKind::terminate()) {
            term.recv().await;
            std::process::exit(0);
        }
    });
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level);
    spawn_signal_handlers();

    let result = match cli.command {
        Command::Init { cwd } => init_cli::init_command(cwd).await,
    };

    if let Err(error) = result {
        handle_error(error);
    }
}

/// Normalize any failure to a user-facing message and exit non-zero
fn handle_error(error: anyhow::Error) -> ! {
    let message = format!("{error:#}");
    if message.trim().is_empty() {
        eprintln!("Something went wrong. Please try again.");
    } else {
        eprintln!("Error: {message}");
    }
    std::process::exit(1);
}
