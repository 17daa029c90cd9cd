pub mod quote_service;
pub mod transaction_service;

pub use quote_service::{QuoteService, QuoteSource, get_quotes};
pub use transaction_service::TransactionService;
