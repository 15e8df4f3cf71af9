mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            file,
            json,
            lenient_dates,
        } => commands::validate::run(&file, json, lenient_dates),
        Commands::Summary { file, json } => commands::summary::run(&file, json),
        Commands::Clean { file, output } => commands::clean::run(&file, &output),
        Commands::Export {
            file,
            output,
            format,
        } => commands::export::run(&file, &output, format),
        Commands::Version => commands::version::run(),
    }
}
