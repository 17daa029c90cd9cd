use clap::Parser;

use crate::models::ApiProvider;

/// Runtime settings, read from flags or the environment (a `.env` file is
/// loaded first).
#[derive(Clone, Debug, Parser)]
#[command(name = "finance-tracker", about = "JSON backend for the finance dashboard")]
pub struct Config {
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://finance.db")]
    pub database_url: String,

    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3001)]
    pub port: u16,

    #[arg(long, env = "QUOTE_PROVIDER", default_value = "yahoo")]
    pub quote_provider: ApiProvider,

    #[arg(long, env = "ALPHA_VANTAGE_API_KEY", hide_env_values = true)]
    pub alpha_vantage_api_key: Option<String>,

    /// Symbols served by `/api/market-data`.
    #[arg(
        long,
        env = "MARKET_SYMBOLS",
        value_delimiter = ',',
        default_value = "BTC-USD,ETH-USD"
    )]
    pub market_symbols: Vec<String>,

    #[arg(long, env = "CORS_ORIGIN", default_value = "http://localhost:8080")]
    pub cors_origin: String,
}

impl Config {
    /// `MARKET_SYMBOLS` entries with surrounding whitespace removed; blank
    /// entries are skipped.
    pub fn market_symbols(&self) -> Vec<String> {
        self.market_symbols
            .iter()
            .map(|symbol| symbol.trim())
            .filter(|symbol| !symbol.is_empty())
            .map(String::from)
            .collect()
    }
}
