use anyhow::{Context, Result};
use rust_decimal::prelude::ToPrimitive;
use sqlx::Sqlite;

use crate::models::NewTransaction;

pub async fn insert_transaction(
    transaction: &NewTransaction,
    tx: &mut sqlx::Transaction<'_, Sqlite>,
) -> Result<i64> {
    let amount = transaction
        .amount()
        .to_f64()
        .with_context(|| format!("Amount {} does not fit a REAL column", transaction.amount()))?;

    let id = sqlx::query(
        r#"
        INSERT INTO transactions
        (amount, transaction_date, description, category)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(amount)
    .bind(transaction.date().timestamp_millis())
    .bind(transaction.description())
    .bind(transaction.category().to_string())
    .execute(&mut **tx)
    .await?
    .last_insert_rowid();

    Ok(id)
}
