use std::sync::Arc;

use chrono::Utc;
use log::warn;
use uuid::Uuid;

use super::transactions_model::{NewTransaction, Transaction, TransactionUpdate};
use super::transactions_traits::TransactionRepositoryTrait;
use crate::constants::TRANSACTIONS_STORAGE_KEY;
use crate::errors::Result;
use crate::storage::KvStore;

pub struct TransactionRepository {
    store: Arc<dyn KvStore>,
}

impl TransactionRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        TransactionRepository { store }
    }

    fn load(&self) -> Vec<Transaction> {
        let raw = match self.store.get(TRANSACTIONS_STORAGE_KEY) {
            Some(raw) => raw,
            None => return Vec::new(),
        };

        match serde_json::from_str(&raw) {
            Ok(transactions) => transactions,
            Err(e) => {
                warn!("Discarding malformed transaction list: {}", e);
                Vec::new()
            }
        }
    }

    fn persist(&self, transactions: &[Transaction]) {
        match serde_json::to_string(transactions) {
            Ok(raw) => self.store.set(TRANSACTIONS_STORAGE_KEY, &raw),
            Err(e) => warn!("Failed to serialize transaction list: {}", e),
        }
    }
}

impl TransactionRepositoryTrait for TransactionRepository {
    fn list(&self) -> Vec<Transaction> {
        self.load()
    }

    fn add(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        new_transaction.validate()?;

        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            amount: new_transaction.amount,
            date: new_transaction.date,
            description: new_transaction.description,
            transaction_type: new_transaction.transaction_type,
            category: new_transaction.category,
            created_at: Utc::now(),
        };

        let mut transactions = self.load();
        transactions.push(transaction.clone());
        self.persist(&transactions);

        Ok(transaction)
    }

    fn update(&self, id: &str, update: TransactionUpdate) -> Result<Option<Transaction>> {
        let mut transactions = self.load();
        let position = match transactions.iter().position(|t| t.id == id) {
            Some(position) => position,
            None => return Ok(None),
        };

        let mut updated = transactions[position].clone();
        if let Some(amount) = update.amount {
            updated.amount = amount;
        }
        if let Some(date) = update.date {
            updated.date = date;
        }
        if let Some(description) = update.description {
            updated.description = description;
        }
        if let Some(transaction_type) = update.transaction_type {
            updated.transaction_type = transaction_type;
        }
        if let Some(category) = update.category {
            updated.category = category;
        }
        updated.validate()?;

        transactions[position] = updated.clone();
        self.persist(&transactions);

        Ok(Some(updated))
    }

    fn delete(&self, id: &str) -> bool {
        let mut transactions = self.load();
        let original_len = transactions.len();
        transactions.retain(|t| t.id != id);

        if transactions.len() == original_len {
            return false;
        }

        self.persist(&transactions);
        true
    }
}
