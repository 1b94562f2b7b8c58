#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal_macros::dec;

    use crate::budgets::budgets_model::{BudgetUpdate, NewBudget};
    use crate::budgets::budgets_repository::BudgetRepository;
    use crate::budgets::budgets_traits::BudgetRepositoryTrait;
    use crate::errors::Error;
    use crate::storage::MemoryKvStore;

    fn repository() -> BudgetRepository {
        BudgetRepository::new(Arc::new(MemoryKvStore::new()))
    }

    fn budget(category: &str, amount: rust_decimal::Decimal, month: &str) -> NewBudget {
        NewBudget {
            category: category.to_string(),
            amount,
            month: month.to_string(),
        }
    }

    #[test]
    fn add_replaces_budget_for_same_category_and_month() {
        let repository = repository();

        let first = repository
            .add(budget("Food & Dining", dec!(100), "2025-06"))
            .unwrap();
        let second = repository
            .add(budget("Food & Dining", dec!(120), "2025-06"))
            .unwrap();

        let budgets = repository.list();
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets[0].id, second.id);
        assert_eq!(budgets[0].amount, dec!(120));
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn add_keeps_budgets_for_other_pairs() {
        let repository = repository();

        repository
            .add(budget("Food & Dining", dec!(100), "2025-06"))
            .unwrap();
        repository
            .add(budget("Food & Dining", dec!(100), "2025-07"))
            .unwrap();
        repository
            .add(budget("Transportation", dec!(60), "2025-06"))
            .unwrap();

        assert_eq!(repository.list().len(), 3);
    }

    #[test]
    fn update_merges_fields() {
        let repository = repository();
        let created = repository
            .add(budget("Food & Dining", dec!(100), "2025-06"))
            .unwrap();

        let updated = repository
            .update(
                &created.id,
                BudgetUpdate {
                    amount: Some(dec!(150)),
                    ..Default::default()
                },
            )
            .unwrap()
            .expect("record exists");

        assert_eq!(updated.amount, dec!(150));
        assert_eq!(updated.category, "Food & Dining");
        assert_eq!(updated.month, "2025-06");
        assert_eq!(repository.list(), vec![updated]);
    }

    #[test]
    fn update_displaces_the_budget_it_collides_with() {
        let repository = repository();
        repository
            .add(budget("Food & Dining", dec!(100), "2025-06"))
            .unwrap();
        let moved = repository
            .add(budget("Transportation", dec!(60), "2025-06"))
            .unwrap();

        repository
            .update(
                &moved.id,
                BudgetUpdate {
                    category: Some("Food & Dining".to_string()),
                    ..Default::default()
                },
            )
            .unwrap()
            .expect("record exists");

        let budgets = repository.list();
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets[0].id, moved.id);
        assert_eq!(budgets[0].category, "Food & Dining");
    }

    #[test]
    fn update_unknown_id_returns_none() {
        let repository = repository();
        assert!(repository
            .update("missing", BudgetUpdate::default())
            .unwrap()
            .is_none());
    }

    #[test]
    fn delete_reports_whether_a_record_was_removed() {
        let repository = repository();
        let created = repository
            .add(budget("Food & Dining", dec!(100), "2025-06"))
            .unwrap();

        assert!(repository.delete(&created.id));
        assert!(!repository.delete(&created.id));
        assert!(repository.list().is_empty());
    }

    #[test]
    fn add_rejects_invalid_input() {
        let repository = repository();

        assert!(matches!(
            repository.add(budget("Food & Dining", dec!(0), "2025-06")),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            repository.add(budget("", dec!(100), "2025-06")),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            repository.add(budget("Food & Dining", dec!(100), "2025-6")),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            repository.add(budget("Food & Dining", dec!(100), "June 2025")),
            Err(Error::Validation(_))
        ));

        assert!(repository.list().is_empty());
    }
}
