use anyhow::{Context, Result};
use reqwest::Client;
use tracing::warn;

use super::{
    av_dto::{AvGlobalQuoteDto, AvOverviewDto},
    utils::{endpoint_url, make_request, parse_response_object},
};
use crate::models::Quote;

const BASE_URL: &str = "https://www.alphavantage.co";

#[derive(Clone, Debug)]
pub struct AlphaVantageApi {
    client: Client,
    api_key: String,
}

impl AlphaVantageApi {
    pub fn new(client: Client, api_key: String) -> Self {
        Self { client, api_key }
    }

    pub async fn get_global_quote(&self, symbol: &str) -> Result<AvGlobalQuoteDto> {
        let params = [
            ("function", "GLOBAL_QUOTE"),
            ("symbol", symbol),
            ("apikey", self.api_key.as_str()),
        ];
        let url = endpoint_url(BASE_URL, &["query"])?;
        let res = make_request(&self.client, url, &params).await?;

        let global_quote = res
            .get("Global Quote")
            .with_context(|| "Failed to find 'Global Quote' in the response")?;

        parse_response_object::<AvGlobalQuoteDto>(
            global_quote.clone(),
            &format!("No results for symbol {}", symbol),
        )
    }

    pub async fn get_overview(&self, symbol: &str) -> Result<AvOverviewDto> {
        let params = [
            ("function", "OVERVIEW"),
            ("symbol", symbol),
            ("apikey", self.api_key.as_str()),
        ];
        let url = endpoint_url(BASE_URL, &["query"])?;
        let res = make_request(&self.client, url, &params).await?;

        parse_response_object::<AvOverviewDto>(
            res,
            &format!("No overview for symbol {}", symbol),
        )
    }

    /// Looks `symbol` up upper-cased; the name fallback keeps it as given.
    pub async fn get_quote(&self, symbol: &str) -> Result<Quote> {
        let lookup = symbol.to_uppercase();
        let (global_quote, overview) =
            futures_util::join!(self.get_global_quote(&lookup), self.get_overview(&lookup));

        let global_quote = global_quote.with_context(|| format!("Alpha Vantage ({})", symbol))?;
        let overview = match overview {
            Ok(overview) => Some(overview),
            Err(err) => {
                warn!(symbol, error = %err, "no Alpha Vantage overview, using fallbacks");
                None
            }
        };

        global_quote.to_quote(overview.as_ref(), symbol)
    }
}
