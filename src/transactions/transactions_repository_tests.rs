#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal_macros::dec;

    use crate::constants::TRANSACTIONS_STORAGE_KEY;
    use crate::errors::Error;
    use crate::storage::{KvStore, MemoryKvStore};
    use crate::transactions::transactions_model::{
        NewTransaction, TransactionType, TransactionUpdate,
    };
    use crate::transactions::transactions_repository::TransactionRepository;
    use crate::transactions::transactions_traits::TransactionRepositoryTrait;

    fn repository() -> (Arc<MemoryKvStore>, TransactionRepository) {
        let store = Arc::new(MemoryKvStore::new());
        let repository = TransactionRepository::new(store.clone());
        (store, repository)
    }

    fn lunch() -> NewTransaction {
        NewTransaction {
            amount: dec!(12.50),
            date: "2025-06-01".to_string(),
            description: "Lunch".to_string(),
            transaction_type: TransactionType::Expense,
            category: "Food & Dining".to_string(),
        }
    }

    #[test]
    fn list_is_empty_when_nothing_stored() {
        let (_store, repository) = repository();
        assert!(repository.list().is_empty());
    }

    #[test]
    fn add_assigns_id_and_timestamp_and_persists() {
        let (_store, repository) = repository();

        let created = repository.add(lunch()).unwrap();
        assert!(!created.id.is_empty());
        assert_eq!(created.amount, dec!(12.50));
        assert_eq!(created.description, "Lunch");

        assert_eq!(repository.list(), vec![created]);
    }

    #[test]
    fn added_records_get_distinct_ids() {
        let (_store, repository) = repository();

        let first = repository.add(lunch()).unwrap();
        let second = repository.add(lunch()).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repository.list().len(), 2);
    }

    #[test]
    fn list_swallows_malformed_stored_state() {
        let (store, repository) = repository();

        store.set(TRANSACTIONS_STORAGE_KEY, "not json");
        assert!(repository.list().is_empty());

        // The next write replaces the corrupt blob.
        repository.add(lunch()).unwrap();
        assert_eq!(repository.list().len(), 1);
    }

    #[test]
    fn update_merges_only_provided_fields() {
        let (_store, repository) = repository();
        let created = repository.add(lunch()).unwrap();

        let updated = repository
            .update(
                &created.id,
                TransactionUpdate {
                    amount: Some(dec!(15)),
                    ..Default::default()
                },
            )
            .unwrap()
            .expect("record exists");

        assert_eq!(updated.amount, dec!(15));
        assert_eq!(updated.description, "Lunch");
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(repository.list(), vec![updated]);
    }

    #[test]
    fn update_unknown_id_returns_none_and_writes_nothing() {
        let (store, repository) = repository();
        repository.add(lunch()).unwrap();
        let before = store.get(TRANSACTIONS_STORAGE_KEY);

        let result = repository
            .update(
                "missing",
                TransactionUpdate {
                    amount: Some(dec!(1)),
                    ..Default::default()
                },
            )
            .unwrap();

        assert!(result.is_none());
        assert_eq!(store.get(TRANSACTIONS_STORAGE_KEY), before);
    }

    #[test]
    fn delete_reports_whether_a_record_was_removed() {
        let (_store, repository) = repository();
        let created = repository.add(lunch()).unwrap();

        assert!(repository.delete(&created.id));
        assert!(!repository.delete(&created.id));
        assert!(repository.list().is_empty());
    }

    #[test]
    fn add_rejects_invalid_input_without_writing() {
        let (_store, repository) = repository();

        let mut zero_amount = lunch();
        zero_amount.amount = dec!(0);
        assert!(matches!(
            repository.add(zero_amount),
            Err(Error::Validation(_))
        ));

        let mut blank_description = lunch();
        blank_description.description = "   ".to_string();
        assert!(matches!(
            repository.add(blank_description),
            Err(Error::Validation(_))
        ));

        let mut bad_date = lunch();
        bad_date.date = "June 1st".to_string();
        assert!(matches!(repository.add(bad_date), Err(Error::Validation(_))));

        let mut unpadded_date = lunch();
        unpadded_date.date = "2025-6-1".to_string();
        assert!(matches!(
            repository.add(unpadded_date),
            Err(Error::Validation(_))
        ));

        assert!(repository.list().is_empty());
    }

    #[test]
    fn update_rejects_an_invalid_merge_result() {
        let (_store, repository) = repository();
        let created = repository.add(lunch()).unwrap();

        let result = repository.update(
            &created.id,
            TransactionUpdate {
                amount: Some(dec!(-5)),
                ..Default::default()
            },
        );

        assert!(matches!(result, Err(Error::Validation(_))));
        assert_eq!(repository.list()[0].amount, dec!(12.50));
    }

    #[test]
    fn stored_blob_is_a_camel_case_json_array() {
        let (store, repository) = repository();
        repository.add(lunch()).unwrap();

        let raw = store.get(TRANSACTIONS_STORAGE_KEY).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();

        let entry = &parsed[0];
        assert_eq!(entry["type"], "expense");
        assert_eq!(entry["amount"], 12.5);
        assert_eq!(entry["category"], "Food & Dining");
        assert!(entry["createdAt"].is_string());
    }
}
