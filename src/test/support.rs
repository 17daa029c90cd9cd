use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use actix_web::{App, HttpResponse, HttpServer, dev::ServerHandle, web};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

use crate::{db::init::create_transactions, models::Quote, services::QuoteSource};

/// Single connection so every query sees the same in-memory database.
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    create_transactions(&pool).await.unwrap();
    pool
}

pub fn quote(name: &str, symbol: &str, price: Decimal, change: Decimal, market_cap: &str) -> Quote {
    Quote::new(
        name.to_string(),
        symbol.to_string(),
        price,
        change,
        market_cap.to_string(),
    )
}

#[derive(Default)]
pub struct StubQuoteSource {
    quotes: HashMap<String, Quote>,
}

impl StubQuoteSource {
    pub fn with(mut self, quote: Quote) -> Self {
        self.quotes.insert(quote.symbol().clone(), quote);
        self
    }
}

#[async_trait]
impl QuoteSource for StubQuoteSource {
    async fn get_quote(&self, symbol: &str) -> Result<Quote> {
        self.quotes
            .get(&symbol.to_uppercase())
            .cloned()
            .ok_or_else(|| anyhow!("Quote not found: {}", symbol))
    }
}

/// Local stand-in for the Yahoo endpoints. Crumbs are issued as `crumb-1`,
/// `crumb-2`, ... and quote requests carrying a crumb numbered below
/// `accepted_from` are answered with 401.
pub struct YahooStub {
    issued: AtomicUsize,
    accepted_from: usize,
}

impl YahooStub {
    pub fn crumbs_issued(&self) -> usize {
        self.issued.load(Ordering::SeqCst)
    }
}

#[derive(Deserialize)]
struct CrumbQuery {
    crumb: String,
}

async fn stub_getcrumb(stub: web::Data<YahooStub>) -> HttpResponse {
    let number = stub.issued.fetch_add(1, Ordering::SeqCst) + 1;
    HttpResponse::Ok().body(format!("crumb-{}", number))
}

async fn stub_quote_summary(
    stub: web::Data<YahooStub>,
    symbol: web::Path<String>,
    query: web::Query<CrumbQuery>,
) -> HttpResponse {
    let number = query
        .crumb
        .trim_start_matches("crumb-")
        .parse::<usize>()
        .unwrap_or(0);
    if number < stub.accepted_from {
        return HttpResponse::Unauthorized().finish();
    }

    HttpResponse::Ok().json(json!({
        "quoteSummary": {
            "result": [{
                "price": {
                    "symbol": symbol.into_inner(),
                    "regularMarketPrice": { "raw": 150.0 },
                    "regularMarketChangePercent": { "raw": 0.01 }
                },
                "summaryDetail": { "marketCap": {} }
            }],
            "error": null
        }
    }))
}

/// Starts a [`YahooStub`] on an ephemeral port and returns its base URL.
pub fn yahoo_stub(accepted_from: usize) -> (String, Arc<YahooStub>, ServerHandle) {
    let stub = Arc::new(YahooStub {
        issued: AtomicUsize::new(0),
        accepted_from,
    });
    let data = web::Data::from(stub.clone());

    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .route("/v1/test/getcrumb", web::get().to(stub_getcrumb))
            .route(
                "/v10/finance/quoteSummary/{symbol}",
                web::get().to(stub_quote_summary),
            )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();

    let base_url = format!("http://{}", server.addrs()[0]);
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    (base_url, stub, handle)
}
