use std::sync::Arc;

use chrono::Utc;
use log::warn;
use uuid::Uuid;

use super::budgets_model::{Budget, BudgetUpdate, NewBudget};
use super::budgets_traits::BudgetRepositoryTrait;
use crate::constants::BUDGETS_STORAGE_KEY;
use crate::errors::Result;
use crate::storage::KvStore;

pub struct BudgetRepository {
    store: Arc<dyn KvStore>,
}

impl BudgetRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        BudgetRepository { store }
    }

    fn load(&self) -> Vec<Budget> {
        let raw = match self.store.get(BUDGETS_STORAGE_KEY) {
            Some(raw) => raw,
            None => return Vec::new(),
        };

        match serde_json::from_str(&raw) {
            Ok(budgets) => budgets,
            Err(e) => {
                warn!("Discarding malformed budget list: {}", e);
                Vec::new()
            }
        }
    }

    fn persist(&self, budgets: &[Budget]) {
        match serde_json::to_string(budgets) {
            Ok(raw) => self.store.set(BUDGETS_STORAGE_KEY, &raw),
            Err(e) => warn!("Failed to serialize budget list: {}", e),
        }
    }
}

impl BudgetRepositoryTrait for BudgetRepository {
    fn list(&self) -> Vec<Budget> {
        self.load()
    }

    fn add(&self, new_budget: NewBudget) -> Result<Budget> {
        new_budget.validate()?;

        let budget = Budget {
            id: Uuid::new_v4().to_string(),
            category: new_budget.category,
            amount: new_budget.amount,
            month: new_budget.month,
            created_at: Utc::now(),
        };

        let mut budgets = self.load();
        // One budget per (category, month): replace, never append a second.
        budgets.retain(|b| !(b.category == budget.category && b.month == budget.month));
        budgets.push(budget.clone());
        self.persist(&budgets);

        Ok(budget)
    }

    fn update(&self, id: &str, update: BudgetUpdate) -> Result<Option<Budget>> {
        let mut budgets = self.load();
        let position = match budgets.iter().position(|b| b.id == id) {
            Some(position) => position,
            None => return Ok(None),
        };

        let mut updated = budgets[position].clone();
        if let Some(category) = update.category {
            updated.category = category;
        }
        if let Some(amount) = update.amount {
            updated.amount = amount;
        }
        if let Some(month) = update.month {
            updated.month = month;
        }
        updated.validate()?;

        budgets[position] = updated.clone();
        // A merge may land on another budget's (category, month); that other
        // budget gives way.
        budgets.retain(|b| {
            b.id == updated.id || !(b.category == updated.category && b.month == updated.month)
        });
        self.persist(&budgets);

        Ok(Some(updated))
    }

    fn delete(&self, id: &str) -> bool {
        let mut budgets = self.load();
        let original_len = budgets.len();
        budgets.retain(|b| b.id != id);

        if budgets.len() == original_len {
            return false;
        }

        self.persist(&budgets);
        true
    }
}
