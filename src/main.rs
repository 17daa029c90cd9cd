use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use finance_tracker::{
    config::Config,
    db,
    server::{AppState, run_server},
    services::{QuoteService, TransactionService},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("finance_tracker=info,actix_web=info")),
        )
        .with_target(false)
        .init();

    let config = Config::parse();

    let connection = db::connect(&config.database_url).await?;
    info!(database_url = %config.database_url, "connected to database");

    let quotes = QuoteService::from_config(&config)?;
    let market_symbols = config.market_symbols();
    info!(provider = %quotes.provider(), symbols = ?market_symbols, "quote provider ready");

    let state = AppState::new(
        Arc::new(quotes),
        TransactionService::new(connection),
        market_symbols,
    );

    run_server(state, &config).await
}
