use anyhow::Result;
use sqlx::{Pool, Sqlite};

use super::utils::parse_transaction;
use crate::models::Transaction;

pub async fn fetch_transactions(connection: &Pool<Sqlite>) -> Result<Vec<Transaction>> {
    let rows = sqlx::query(
        r#"
        SELECT id, amount, transaction_date, description, category
        FROM transactions
        ORDER BY id
        "#,
    )
    .fetch_all(connection)
    .await?;

    rows.into_iter().map(parse_transaction).collect()
}
