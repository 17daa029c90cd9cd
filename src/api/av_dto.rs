use anyhow::{Context, Result};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{
    Quote,
    quote::{fallback_name, format_market_cap},
};

#[derive(Debug, Deserialize, Getters, new)]
pub struct AvGlobalQuoteDto {
    #[serde(rename = "01. symbol")]
    symbol: String,
    #[serde(rename = "05. price")]
    price: String,
    #[serde(rename = "10. change percent")]
    change_percent: String,
}

/// Company overview. Alpha Vantage answers `{}` for symbols it has no
/// fundamentals for, and the literal `"None"` for unknown figures.
#[derive(Debug, Default, Deserialize, Getters, new)]
pub struct AvOverviewDto {
    #[serde(rename = "Name")]
    name: Option<String>,
    #[serde(rename = "MarketCapitalization")]
    market_capitalization: Option<String>,
}

impl AvOverviewDto {
    pub fn market_cap(&self) -> Option<Decimal> {
        self.market_capitalization
            .as_deref()
            .and_then(|cap| cap.parse::<Decimal>().ok())
    }
}

impl AvGlobalQuoteDto {
    pub fn to_quote(
        &self,
        overview: Option<&AvOverviewDto>,
        requested_symbol: &str,
    ) -> Result<Quote> {
        let price = self
            .price
            .parse::<Decimal>()
            .with_context(|| format!("Alpha Vantage ({}): Failed to parse price", self.symbol))?;

        // Already a percentage, e.g. "2.4500%"
        let change = self
            .change_percent
            .trim_end_matches('%')
            .parse::<Decimal>()
            .with_context(|| {
                format!(
                    "Alpha Vantage ({}): Failed to parse change percent",
                    self.symbol
                )
            })?;

        let name = overview
            .and_then(|overview| overview.name.as_deref())
            .filter(|name| !name.is_empty() && *name != "None")
            .map(String::from)
            .unwrap_or_else(|| fallback_name(requested_symbol));

        let market_cap = overview.and_then(AvOverviewDto::market_cap);

        Ok(Quote::new(
            name,
            self.symbol.clone(),
            price,
            change,
            format_market_cap(market_cap),
        ))
    }
}
