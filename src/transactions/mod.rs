pub mod transactions_model;
pub mod transactions_repository;
pub mod transactions_traits;

#[cfg(test)]
mod transactions_repository_tests;

pub use transactions_model::{
    NewTransaction, Transaction, TransactionType, TransactionUpdate, EXPENSE_CATEGORIES,
    INCOME_CATEGORIES,
};
pub use transactions_repository::TransactionRepository;
pub use transactions_traits::TransactionRepositoryTrait;
