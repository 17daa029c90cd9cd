#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use serde_json::json;

    use crate::{
        error::ApiError,
        models::{Category, NewTransaction},
        server::dto::{MISSING_FIELDS, TransactionRequestDto},
        services::TransactionService,
        test::support::memory_pool,
    };

    fn request(body: serde_json::Value) -> TransactionRequestDto {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn new_transaction_is_categorized_and_dated() {
        let before = Utc::now();
        let transaction = NewTransaction::new(dec!(4.5), None, String::from("Morning coffee"));

        assert_eq!(*transaction.category(), Category::Food);
        assert!(*transaction.date() >= before - chrono::Duration::milliseconds(1));
        assert!(*transaction.date() <= Utc::now());
    }

    #[test]
    fn missing_amount_is_rejected() {
        let err = request(json!({ "description": "Gym" }))
            .into_new_transaction()
            .unwrap_err();

        assert!(matches!(err, ApiError::BadRequest(ref msg) if msg == MISSING_FIELDS));
    }

    #[test]
    fn falsy_values_count_as_missing() {
        for body in [
            json!({ "amount": 0, "description": "Gym" }),
            json!({ "amount": null, "description": "Gym" }),
            json!({ "amount": "", "description": "Gym" }),
            json!({ "amount": 10, "description": "" }),
            json!({ "amount": 10 }),
        ] {
            let err = request(body).into_new_transaction().unwrap_err();
            assert!(matches!(err, ApiError::BadRequest(ref msg) if msg == MISSING_FIELDS));
        }
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let transaction = request(json!({ "amount": "12.50", "description": "Rent due" }))
            .into_new_transaction()
            .unwrap();

        assert_eq!(*transaction.amount(), dec!(12.50));
        assert_eq!(*transaction.category(), Category::Housing);
    }

    #[test]
    fn non_numeric_amount_is_rejected() {
        let err = request(json!({ "amount": "lots", "description": "Gym" }))
            .into_new_transaction()
            .unwrap_err();

        assert!(matches!(err, ApiError::BadRequest(ref msg) if msg != MISSING_FIELDS));
    }

    #[test]
    fn dates_are_parsed() {
        let day_only = request(json!({
            "amount": 2500,
            "date": "2024-03-01",
            "description": "Salary payment"
        }))
        .into_new_transaction()
        .unwrap();
        assert_eq!(
            *day_only.date(),
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
        );

        let timestamp = request(json!({
            "amount": 2500,
            "date": "2024-03-01T09:30:00+01:00",
            "description": "Salary payment"
        }))
        .into_new_transaction()
        .unwrap();
        assert_eq!(
            *timestamp.date(),
            Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap()
        );

        let invalid = request(json!({
            "amount": 2500,
            "date": "first of march",
            "description": "Salary payment"
        }))
        .into_new_transaction();
        assert!(matches!(invalid, Err(ApiError::BadRequest(_))));
    }

    #[tokio::test]
    async fn stored_transactions_are_listed_in_order() {
        let service = TransactionService::new(memory_pool().await);
        let date = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();

        let rent = service
            .create(NewTransaction::new(
                dec!(1200),
                Some(date),
                String::from("Rent due"),
            ))
            .await
            .unwrap();
        let gym = service
            .create(NewTransaction::new(dec!(35.5), None, String::from("Gym")))
            .await
            .unwrap();

        assert!(gym.id() > rent.id());

        let transactions = service.list().await.unwrap();

        assert_eq!(transactions, vec![rent.clone(), gym]);
        assert_eq!(*rent.category(), Category::Housing);
        assert_eq!(*rent.date(), date);
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let service = TransactionService::new(memory_pool().await);
        assert!(service.list().await.unwrap().is_empty());
    }
}
