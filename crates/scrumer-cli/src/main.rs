mod cli;
mod context;
mod handlers;
mod output;
mod prompter;
mod shell;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::Session;
use prompter::StdioPrompter;
use scrumer_core::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("SCRUMER_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => AppConfig::load_from(std::path::Path::new(path))?,
        None => AppConfig::load(),
    };
    let mut session = Session::new(&config, Box::new(StdioPrompter::new(cli.yes)));

    match cli.command {
        None => shell::run(&mut session).await?,
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "scrumer", &mut std::io::stdout());
        }
        Some(Commands::Workspace(command)) => {
            match handlers::dispatch(&mut session, command).await {
                Ok(data) => output::output_success(data),
                Err(e) => output::output_error(&e.to_string()),
            }
        }
    }

    Ok(())
}
