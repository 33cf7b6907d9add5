mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use storefront_core::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("STOREFRONT_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
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

    if let Some(Commands::Completions { shell }) = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "storefront", &mut std::io::stdout());
        return Ok(());
    }

    let Some(file_path) = cli.catalog else {
        output::output_error("a catalog file is required (pass CATALOG or set STOREFRONT_CATALOG)");
    };

    if let Some(Commands::Init(args)) = cli.command {
        if let Err(e) = handlers::init::handle(&file_path, args).await {
            output::output_error(&e.to_string());
        }
        return Ok(());
    }

    let config = AppConfig::load();
    let ctx = match CliContext::load(&file_path, cli.query, config).await {
        Ok(ctx) => ctx,
        Err(e) => output::output_error(&e.to_string()),
    };

    let result = match cli.command {
        None => handlers::browse::handle(ctx).await,
        Some(Commands::List(args)) => handlers::list::handle(&ctx, args).await,
        Some(Commands::Init(_)) | Some(Commands::Completions { .. }) => Ok(()),
    };

    if let Err(e) = result {
        output::output_error(&e.to_string());
    }
    Ok(())
}
