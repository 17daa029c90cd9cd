use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::{Decimal, prelude::FromPrimitive};
use sqlx::{Row, sqlite::SqliteRow};

use crate::models::{Category, Transaction};

pub fn parse_i64_from_row(row: &SqliteRow, column: &str) -> Result<i64> {
    row.try_get::<i64, _>(column)
        .with_context(|| format!("Failed to parse i64 from column '{}'", column))
}

pub fn parse_string_from_row(row: &SqliteRow, column: &str) -> Result<String> {
    row.try_get::<String, _>(column)
        .with_context(|| format!("Failed to parse String from column '{}'", column))
}

pub fn parse_f64_from_row(row: &SqliteRow, column: &str) -> Result<f64> {
    let value: f64 = row
        .try_get(column)
        .with_context(|| format!("Failed to parse f64 from column '{}'", column))?;
    Ok(value)
}

pub fn parse_decimal_from_row(row: &SqliteRow, column: &str) -> Result<Decimal> {
    let value = parse_f64_from_row(row, column)?;
    Decimal::from_f64(value)
        .with_context(|| format!("Failed to convert f64 to Decimal for column '{}'", column))
}

pub fn parse_datetime_from_row(row: &SqliteRow, column: &str) -> Result<DateTime<Utc>> {
    let millis = parse_i64_from_row(row, column)?;
    Utc.timestamp_millis_opt(millis).single().with_context(|| {
        format!(
            "Failed to convert timestamp to DateTime for column '{}'",
            column
        )
    })
}

pub fn parse_category_from_row(row: &SqliteRow, column: &str) -> Result<Category> {
    let category = parse_string_from_row(row, column)?;
    Category::from_str(&category)
        .with_context(|| format!("Unknown category '{}' in column '{}'", category, column))
}

pub fn parse_transaction(row: SqliteRow) -> Result<Transaction> {
    let id = parse_i64_from_row(&row, "id")?;
    let amount = parse_decimal_from_row(&row, "amount")?;
    let date = parse_datetime_from_row(&row, "transaction_date")?;
    let description = parse_string_from_row(&row, "description")?;
    let category = parse_category_from_row(&row, "category")?;

    Ok(Transaction::new(id, amount, date, description, category))
}
