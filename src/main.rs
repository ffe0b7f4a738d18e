use std::sync::Arc;

use clap::Parser;
use receipt_points::adapters::http;
use receipt_points::config::cli::{ScoreArgs, ServeArgs};
use receipt_points::core::service::score_file;
use receipt_points::utils::logger::{self, LogFormat};
use receipt_points::utils::validation::Validate;
use receipt_points::{build_router, Cli, Command, InMemoryReceiptStore, ReceiptService};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Command::Serve(args) => serve(args).await,
        Command::Score(args) => score(args),
    };

    if let Err(e) = outcome {
        tracing::error!("❌ {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
}

async fn serve(args: ServeArgs) -> receipt_points::Result<()> {
    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => {
            // Config could not be read; log with the flags alone.
            let format = if args.json_logs {
                LogFormat::Json
            } else {
                LogFormat::Compact
            };
            logger::init_logger(args.verbose, None, format);
            return Err(e);
        }
    };

    logger::init_logger(config.verbose, config.log_level.as_deref(), config.log_format);
    tracing::info!("Starting receipt-points");
    if let Some(path) = &args.config {
        tracing::debug!("Loaded config from {}", path.display());
    }
    if config.verbose {
        tracing::debug!("Server config: {:?}", config);
    }

    config.validate()?;

    let service = Arc::new(ReceiptService::new(InMemoryReceiptStore::new()));
    http::serve(&config, build_router(service)).await
}

fn score(args: ScoreArgs) -> receipt_points::Result<()> {
    logger::init_logger(false, None, LogFormat::Compact);

    let points = score_file(&args.file)?;
    println!("{}", serde_json::to_string_pretty(&points)?);
    Ok(())
}
