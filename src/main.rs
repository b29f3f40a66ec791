use anyhow::Context;
use clap::{Parser, Subcommand};
use std::sync::Arc;

use filmbot::api::create_router;
use filmbot::config::Config;

#[derive(Parser)]
#[command(name = "filmbot", about = "Film description and catalog link lookup")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the chat adapter over HTTP
    Serve {
        #[arg(long, default_value = "0.0.0.0:3000")]
        addr: String,
    },
    /// Look a single title up and print the reply
    Lookup { title: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber (handles both tracing and log crate)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let service = config.film_service();

    match cli.command {
        Command::Serve { addr } => {
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {addr}"))?;
            if !config.has_bot_token() {
                tracing::warn!("BOT_TOKEN is not set; serving the HTTP adapter only");
            }
            tracing::info!("listening on {addr}");
            axum::serve(listener, create_router(Arc::new(service))).await?;
        }
        Command::Lookup { title } => {
            let summary = service
                .film_info(&title)
                .await
                .with_context(|| format!("Lookup failed for {title:?}"))?;
            println!("{}", summary.poster_ref);
            println!("{}", summary.caption());
        }
    }
    Ok(())
}
