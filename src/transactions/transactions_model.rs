use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Expense categories offered by the entry form.
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Food & Dining",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Healthcare",
    "Education",
    "Travel",
    "Groceries",
    "Rent/Mortgage",
    "Insurance",
    "Other",
];

/// Income categories offered by the entry form.
pub const INCOME_CATEGORIES: &[&str] = &[
    "Salary",
    "Freelance",
    "Investment",
    "Business",
    "Gift",
    "Bonus",
    "Other",
];

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

/// A single recorded income or expense event.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub amount: Decimal,
    /// Calendar date as "YYYY-MM-DD". Kept as text: stored blobs may carry
    /// dates this crate did not write, and aggregation skips the
    /// unparseable ones instead of rejecting the whole list.
    pub date: String,
    pub description: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub amount: Decimal,
    pub date: String,
    pub description: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub category: String,
}

/// Partial update; `Some` fields overwrite the stored record.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
    pub amount: Option<Decimal>,
    pub date: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub transaction_type: Option<TransactionType>,
    pub category: Option<String>,
}

impl NewTransaction {
    /// Checks the same rules the entry form enforces.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        validate_fields(self.amount, &self.date, &self.description, &self.category)
    }
}

impl Transaction {
    pub(crate) fn validate(&self) -> std::result::Result<(), ValidationError> {
        validate_fields(self.amount, &self.date, &self.description, &self.category)
    }
}

fn validate_fields(
    amount: Decimal,
    date: &str,
    description: &str,
    category: &str,
) -> std::result::Result<(), ValidationError> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount);
    }
    validate_date(date)?;
    if description.trim().is_empty() {
        return Err(ValidationError::MissingField("description".to_string()));
    }
    if category.trim().is_empty() {
        return Err(ValidationError::MissingField("category".to_string()));
    }
    Ok(())
}

pub(crate) fn validate_date(date: &str) -> std::result::Result<(), ValidationError> {
    // The length check rejects unpadded dates the parser would accept; month
    // prefix matching relies on the padded form.
    if date.len() != 10 || NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        return Err(ValidationError::InvalidDate(date.to_string()));
    }
    Ok(())
}
