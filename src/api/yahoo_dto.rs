use anyhow::{Context, Result};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{
    Quote,
    quote::{fallback_name, format_market_cap, fraction_to_percent},
};

/// Numeric field as returned by `quoteSummary`: either a bare number or a
/// `{ "raw": .., "fmt": .. }` object, which is `{}` when Yahoo has no value.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum YahooNumber {
    Formatted {
        #[serde(default)]
        raw: Option<Decimal>,
    },
    Plain(Decimal),
}

impl YahooNumber {
    pub fn value(&self) -> Option<Decimal> {
        match self {
            YahooNumber::Formatted { raw } => *raw,
            YahooNumber::Plain(value) => Some(*value),
        }
    }
}

fn value_of(number: &Option<YahooNumber>) -> Option<Decimal> {
    number.as_ref().and_then(YahooNumber::value)
}

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteResultDto {
    price: Option<YahooPriceDto>,
    summary_detail: Option<YahooSummaryDetailDto>,
}

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct YahooPriceDto {
    symbol: String,
    long_name: Option<String>,
    regular_market_price: Option<YahooNumber>,
    regular_market_change_percent: Option<YahooNumber>,
}

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct YahooSummaryDetailDto {
    market_cap: Option<YahooNumber>,
}

impl YahooQuoteResultDto {
    /// `requested_symbol` is what the caller asked for; it names the quote
    /// when Yahoo reports no long name.
    pub fn to_quote(&self, requested_symbol: &str) -> Result<Quote> {
        let price = self
            .price
            .as_ref()
            .with_context(|| format!("Missing 'price' module for {}", requested_symbol))?;

        let name = price
            .long_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(String::from)
            .unwrap_or_else(|| fallback_name(requested_symbol));

        let market_price = value_of(&price.regular_market_price)
            .with_context(|| format!("Missing regularMarketPrice for {}", requested_symbol))?;

        let change_fraction = value_of(&price.regular_market_change_percent).with_context(
            || format!("Missing regularMarketChangePercent for {}", requested_symbol),
        )?;

        let market_cap = self
            .summary_detail
            .as_ref()
            .and_then(|detail| value_of(&detail.market_cap));

        Ok(Quote::new(
            name,
            price.symbol.clone(),
            market_price,
            fraction_to_percent(change_fraction),
            format_market_cap(market_cap),
        ))
    }
}
