mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` directives when set and valid, otherwise warnings only
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Summarize(args) => commands::summarize::run(&args),
        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => commands::config::run_show(),
            Some(ConfigAction::Set {
                max_sentences,
                max_length,
            }) => commands::config::run_set(max_sentences, max_length),
            Some(ConfigAction::Reset) => commands::config::run_reset(),
        },
        Commands::Version => commands::version::run(),
    }
}
