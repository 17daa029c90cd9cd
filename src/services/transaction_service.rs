use anyhow::Result;
use sqlx::SqlitePool;
use tracing::debug;

use crate::{
    db::{read::fetch_transactions, write::insert_transaction},
    models::{NewTransaction, Transaction},
};

#[derive(Clone, Debug)]
pub struct TransactionService {
    connection: SqlitePool,
}

impl TransactionService {
    pub fn new(connection: SqlitePool) -> Self {
        Self { connection }
    }

    pub async fn create(&self, transaction: NewTransaction) -> Result<Transaction> {
        let mut tx = self.connection.begin().await?;
        let id = insert_transaction(&transaction, &mut tx).await?;
        tx.commit().await?;

        debug!(id, category = %transaction.category(), "stored transaction");
        Ok(transaction.into_transaction(id))
    }

    pub async fn list(&self) -> Result<Vec<Transaction>> {
        fetch_transactions(&self.connection).await
    }
}
