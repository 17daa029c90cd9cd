use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use crate::{error::ApiError, models::NewTransaction};

pub const MISSING_FIELDS: &str = "Amount and description are required";

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub symbol: Option<String>,
}

/// Body of `POST /transactions`. `amount` may be a number or a numeric string.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionRequestDto {
    pub amount: Option<Value>,
    pub date: Option<String>,
    pub description: Option<String>,
}

impl TransactionRequestDto {
    pub fn into_new_transaction(self) -> Result<NewTransaction, ApiError> {
        let amount = match self.amount {
            Some(amount) => parse_amount(&amount)?,
            None => None,
        };
        let description = self.description.filter(|description| !description.is_empty());

        let (Some(amount), Some(description)) = (amount, description) else {
            return Err(ApiError::BadRequest(MISSING_FIELDS.to_string()));
        };

        let date = match self.date.as_deref().map(str::trim) {
            Some(date) if !date.is_empty() => Some(parse_date(date)?),
            _ => None,
        };

        Ok(NewTransaction::new(amount, date, description))
    }
}

/// `Ok(None)` for values that count as absent: null, zero, or an empty string.
fn parse_amount(amount: &Value) -> Result<Option<Decimal>, ApiError> {
    let invalid = || ApiError::BadRequest(String::from("Amount must be a number"));

    match amount {
        Value::Null => Ok(None),
        Value::Number(number) => {
            let amount = parse_decimal(&number.to_string()).ok_or_else(invalid)?;
            Ok(Some(amount).filter(|amount| !amount.is_zero()))
        }
        Value::String(text) if text.trim().is_empty() => Ok(None),
        Value::String(text) => parse_decimal(text.trim()).map(Some).ok_or_else(invalid),
        _ => Err(invalid()),
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    text.parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

fn parse_date(date: &str) -> Result<DateTime<Utc>, ApiError> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(date) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| {
            ApiError::BadRequest(format!(
                "Invalid date '{}': expected RFC 3339 or YYYY-MM-DD",
                date
            ))
        })
}
