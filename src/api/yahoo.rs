use anyhow::{Context, Error, Result};
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::{
    utils::{endpoint_url, parse_response_object},
    yahoo_dto::YahooQuoteResultDto,
};
use crate::models::Quote;

const BASE_URL: &str = "https://query2.finance.yahoo.com";
const COOKIE_URL: &str = "https://fc.yahoo.com";
const MODULES: &str = "price,summaryDetail";
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

#[derive(Debug)]
pub struct YahooApi {
    client: Client,
    base_url: String,
    cookie_url: String,
    crumb: RwLock<Option<String>>,
}

impl YahooApi {
    pub fn new() -> Result<Self> {
        Self::with_urls(BASE_URL, COOKIE_URL)
    }

    pub fn with_urls(base_url: &str, cookie_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .build()
            .context("Failed to build Yahoo HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            cookie_url: cookie_url.to_string(),
            crumb: RwLock::new(None),
        })
    }

    pub fn quote_summary_url(&self, symbol: &str) -> Result<Url> {
        endpoint_url(
            &self.base_url,
            &["v10", "finance", "quoteSummary", symbol],
        )
    }

    async fn crumb(&self) -> Result<String> {
        if let Some(crumb) = self.crumb.read().await.as_ref() {
            return Ok(crumb.clone());
        }

        let mut slot = self.crumb.write().await;
        if let Some(crumb) = slot.as_ref() {
            return Ok(crumb.clone());
        }

        let crumb = self.fetch_crumb().await?;
        *slot = Some(crumb.clone());
        Ok(crumb)
    }

    /// Drops the cached crumb unless another request already replaced it.
    async fn invalidate_crumb(&self, stale: &str) {
        let mut slot = self.crumb.write().await;
        if slot.as_deref() == Some(stale) {
            *slot = None;
        }
    }

    /// Yahoo only serves `quoteSummary` to sessions holding its consent
    /// cookie and the matching crumb.
    async fn fetch_crumb(&self) -> Result<String> {
        // Answers 404 but still sets the cookie
        self.client
            .get(&self.cookie_url)
            .send()
            .await
            .context("Failed to obtain Yahoo session cookie")?;

        let url = endpoint_url(&self.base_url, &["v1", "test", "getcrumb"])?;
        let res = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to request Yahoo crumb")?;

        if !res.status().is_success() {
            return Err(Error::msg(format!("Crumb request failed: {}", res.status())));
        }

        let crumb = res.text().await?.trim().to_string();
        if crumb.is_empty() {
            return Err(Error::msg("Yahoo returned an empty crumb"));
        }

        debug!("obtained Yahoo crumb");
        Ok(crumb)
    }

    /// `Ok(None)` when Yahoo rejects the crumb.
    async fn request_quote_summary(&self, symbol: &str, crumb: &str) -> Result<Option<Value>> {
        let url = self.quote_summary_url(symbol)?;
        let res = self
            .client
            .get(url)
            .query(&[("modules", MODULES), ("crumb", crumb)])
            .send()
            .await?;

        match res.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(None),
            status if !status.is_success() => {
                Err(Error::msg(format!("Request failed: {}", status)))
            }
            _ => Ok(Some(res.json::<Value>().await?)),
        }
    }

    pub async fn get_quote_summary(&self, symbol: &str) -> Result<YahooQuoteResultDto> {
        let crumb = self.crumb().await?;
        let res = match self.request_quote_summary(symbol, &crumb).await? {
            Some(res) => res,
            None => {
                warn!(symbol, "Yahoo rejected the session crumb, refreshing");
                self.invalidate_crumb(&crumb).await;
                let crumb = self.crumb().await?;
                self.request_quote_summary(symbol, &crumb)
                    .await?
                    .with_context(|| "Yahoo rejected a freshly issued crumb")?
            }
        };

        let result = res
            .get("quoteSummary")
            .and_then(|summary| summary.get("result"))
            .and_then(|result| result.get(0))
            .with_context(|| format!("No quote summary for symbol {}", symbol))?;

        parse_response_object::<YahooQuoteResultDto>(
            result.clone(),
            &format!("Failed to parse quote summary for {}", symbol),
        )
    }

    /// Looks `symbol` up upper-cased; the name fallback keeps it as given.
    pub async fn get_quote(&self, symbol: &str) -> Result<Quote> {
        self.get_quote_summary(&symbol.to_uppercase())
            .await
            .with_context(|| format!("Yahoo quoteSummary ({})", symbol))?
            .to_quote(symbol)
    }
}
