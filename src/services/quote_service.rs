use anyhow::{Context, Result};
use async_trait::async_trait;
use futures_util::future::try_join_all;
use reqwest::Client;

use crate::{
    api::{AlphaVantageApi, YahooApi},
    config::Config,
    models::{ApiProvider, Quote},
};

/// Anything able to produce a normalized quote for one symbol. Implementations
/// look the symbol up upper-cased and derive the fallback name from it as given.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn get_quote(&self, symbol: &str) -> Result<Quote>;
}

#[derive(Debug)]
pub enum QuoteService {
    Yahoo(YahooApi),
    AlphaVantage(AlphaVantageApi),
}

impl QuoteService {
    pub fn new(provider: ApiProvider, alpha_vantage_api_key: Option<&str>) -> Result<Self> {
        match provider {
            ApiProvider::Yahoo => Ok(QuoteService::Yahoo(YahooApi::new()?)),
            ApiProvider::AlphaVantage => {
                let api_key = alpha_vantage_api_key.with_context(|| {
                    "ALPHA_VANTAGE_API_KEY must be set when QUOTE_PROVIDER=alphavantage"
                })?;
                Ok(QuoteService::AlphaVantage(AlphaVantageApi::new(
                    Client::new(),
                    api_key.to_string(),
                )))
            }
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.quote_provider,
            config.alpha_vantage_api_key.as_deref(),
        )
    }

    pub fn provider(&self) -> ApiProvider {
        match self {
            QuoteService::Yahoo(_) => ApiProvider::Yahoo,
            QuoteService::AlphaVantage(_) => ApiProvider::AlphaVantage,
        }
    }
}

#[async_trait]
impl QuoteSource for QuoteService {
    async fn get_quote(&self, symbol: &str) -> Result<Quote> {
        match self {
            QuoteService::Yahoo(api) => api.get_quote(symbol).await,
            QuoteService::AlphaVantage(api) => api.get_quote(symbol).await,
        }
    }
}

/// Fetches all symbols concurrently. The first failure fails the batch.
pub async fn get_quotes(source: &dyn QuoteSource, symbols: &[String]) -> Result<Vec<Quote>> {
    try_join_all(symbols.iter().map(|symbol| source.get_quote(symbol))).await
}
