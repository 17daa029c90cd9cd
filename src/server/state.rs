use std::sync::Arc;

use derive_new::new;

use crate::services::{QuoteSource, TransactionService};

/// Shared by every worker; cloning is cheap.
#[derive(Clone, new)]
pub struct AppState {
    pub quotes: Arc<dyn QuoteSource>,
    pub transactions: TransactionService,
    pub market_symbols: Vec<String>,
}
