use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod render;

use error::ErrorCode;

#[derive(Parser)]
#[command(name = "squircle", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render smoothed-corner rectangle outlines from a YAML config
    Render {
        /// Input configuration file (YAML)
        #[arg(value_name = "CONFIG")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = "output")]
        output: PathBuf,

        /// Write per-shape debug artifacts alongside the SVGs
        #[arg(short, long)]
        debug: bool,

        /// Remove the output directory before writing
        #[arg(long)]
        clean: bool,
    },
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                err.exit();
            }
            eprintln!("{err}");
            return ExitCode::from(ErrorCode::Usage as u8);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Command::Render {
            input,
            output,
            debug,
            clean,
        } => render::run_render(input, output, debug, clean),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(err.code as u8)
        }
    }
}
