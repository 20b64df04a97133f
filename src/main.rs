use std::process::ExitCode;

use clap::Parser;

mod app;
mod cli;

fn main() -> ExitCode {
    // Initialize logging; stdout is reserved for the processed file list
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = cli::Cli::parse();
    let stdout = std::io::stdout();
    let status = app::run(&cli, &mut stdout.lock());

    ExitCode::from(status)
}
