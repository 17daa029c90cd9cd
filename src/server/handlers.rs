use actix_web::{HttpResponse, Responder, web};
use tracing::{error, info};

use super::{
    dto::{SearchQuery, TransactionRequestDto},
    state::AppState,
};
use crate::{error::ApiError, services::get_quotes};

pub const WELCOME: &str = "Welcome to the Finance Tracker API Backend";

pub const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";

/// Answers CORS preflight for any path; the origin and header lists come from
/// the app-wide default headers.
pub async fn preflight_handler() -> impl Responder {
    HttpResponse::NoContent()
        .insert_header(("Access-Control-Allow-Methods", ALLOWED_METHODS))
        .finish()
}

pub async fn index_handler() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(WELCOME)
}

pub async fn market_data_handler(state: web::Data<AppState>) -> Result<impl Responder, ApiError> {
    let quotes = get_quotes(state.quotes.as_ref(), &state.market_symbols)
        .await
        .map_err(|err| {
            error!(error = ?err, "error fetching default market data");
            ApiError::internal("Failed to fetch market data")
        })?;

    Ok(web::Json(quotes))
}

pub async fn search_handler(
    query: web::Query<SearchQuery>,
    state: web::Data<AppState>,
) -> Result<impl Responder, ApiError> {
    // Surrounding whitespace is dropped, so a blank symbol counts as missing
    let symbol = match query.symbol.as_deref().map(str::trim) {
        Some(symbol) if !symbol.is_empty() => symbol,
        _ => {
            return Err(ApiError::BadRequest(String::from(
                "Symbol query parameter is required",
            )));
        }
    };

    let quote = state
        .quotes
        .get_quote(symbol)
        .await
        .map_err(|err| {
            error!(symbol = %symbol, error = ?err, "error fetching quote");
            ApiError::NotFound(format!("Failed to fetch data for {}", symbol))
        })?;

    Ok(web::Json(quote))
}

pub async fn create_transaction_handler(
    payload: web::Json<TransactionRequestDto>,
    state: web::Data<AppState>,
) -> Result<impl Responder, ApiError> {
    info!(body = ?payload, "received transaction");

    let new_transaction = payload.into_inner().into_new_transaction().inspect_err(|err| {
        info!(reason = %err, "rejected transaction");
    })?;
    info!(category = %new_transaction.category(), "generated category");

    let saved = state
        .transactions
        .create(new_transaction)
        .await
        .map_err(|err| {
            error!(error = ?err, "error saving transaction");
            ApiError::internal_with_details("Failed to save transaction", err.to_string())
        })?;
    info!(transaction = ?saved, "saved transaction");

    Ok(HttpResponse::Created().json(saved))
}

pub async fn list_transactions_handler(
    state: web::Data<AppState>,
) -> Result<impl Responder, ApiError> {
    let transactions = state.transactions.list().await.map_err(|err| {
        error!(error = ?err, "error fetching transactions");
        ApiError::internal("Failed to fetch transactions")
    })?;
    info!(count = transactions.len(), "fetched transactions");

    Ok(web::Json(transactions))
}
