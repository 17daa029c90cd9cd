use chrono::{DateTime, SubsecRound, Utc};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Category;

#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct Transaction {
    id: i64,
    #[serde(with = "rust_decimal::serde::float")]
    amount: Decimal,
    date: DateTime<Utc>,
    description: String,
    category: Category,
}

/// A transaction that has been validated and categorized but not stored yet.
#[derive(Clone, Debug, Eq, Getters, PartialEq)]
pub struct NewTransaction {
    amount: Decimal,
    date: DateTime<Utc>,
    description: String,
    category: Category,
}

impl NewTransaction {
    pub fn new(amount: Decimal, date: Option<DateTime<Utc>>, description: String) -> Self {
        let category = Category::from_description(&description);
        // Stored with millisecond precision
        let date = date.unwrap_or_else(Utc::now).trunc_subsecs(3);

        Self {
            amount,
            date,
            description,
            category,
        }
    }

    pub fn into_transaction(self, id: i64) -> Transaction {
        Transaction::new(id, self.amount, self.date, self.description, self.category)
    }
}
