pub mod dto;
pub mod handlers;
pub mod state;

use actix_web::{
    App, Error, HttpServer,
    body::BoxBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    http::Method,
    middleware::DefaultHeaders,
    web,
};
use anyhow::{Context, Result};
use tracing::info;

use crate::{config::Config, error::ApiError};
use handlers::{
    create_transaction_handler, index_handler, list_transactions_handler, market_data_handler,
    preflight_handler, search_handler,
};
pub use state::AppState;

const ALLOWED_HEADERS: &str = "Origin, X-Requested-With, Content-Type, Accept";

pub fn build_app(
    state: AppState,
    cors_origin: String,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<BoxBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into());

    App::new()
        .wrap(
            DefaultHeaders::new()
                .add(("Access-Control-Allow-Origin", cors_origin))
                .add(("Access-Control-Allow-Headers", ALLOWED_HEADERS)),
        )
        .app_data(web::Data::new(state))
        .app_data(json_config)
        // Registered first: the method guard lets every other request fall through
        .route(
            "/{path:.*}",
            web::route()
                .method(Method::OPTIONS)
                .to(preflight_handler),
        )
        .route("/", web::get().to(index_handler))
        .route("/api/market-data", web::get().to(market_data_handler))
        .route("/api/search", web::get().to(search_handler))
        .service(
            web::resource("/transactions")
                .route(web::post().to(create_transaction_handler))
                .route(web::get().to(list_transactions_handler)),
        )
}

pub async fn run_server(state: AppState, config: &Config) -> Result<()> {
    let cors_origin = config.cors_origin.clone();
    let bind = (config.host.clone(), config.port);

    let server = HttpServer::new(move || build_app(state.clone(), cors_origin.clone()))
        .bind(bind.clone())
        .with_context(|| format!("Failed to bind {}:{}", bind.0, bind.1))?;

    info!(host = %bind.0, port = bind.1, "server running");
    server.run().await?;

    Ok(())
}
