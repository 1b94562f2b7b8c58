use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// A planned spending cap for one category in one calendar month.
///
/// At most one budget exists per `(category, month)` pair; the repository
/// enforces this on every write.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub category: String,
    pub amount: Decimal,
    /// Calendar month as "YYYY-MM".
    pub month: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    pub category: String,
    pub amount: Decimal,
    pub month: String,
}

/// Partial update; `Some` fields overwrite the stored record.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUpdate {
    pub category: Option<String>,
    pub amount: Option<Decimal>,
    pub month: Option<String>,
}

impl NewBudget {
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        validate_fields(&self.category, self.amount, &self.month)
    }
}

impl Budget {
    pub(crate) fn validate(&self) -> std::result::Result<(), ValidationError> {
        validate_fields(&self.category, self.amount, &self.month)
    }
}

fn validate_fields(
    category: &str,
    amount: Decimal,
    month: &str,
) -> std::result::Result<(), ValidationError> {
    if category.trim().is_empty() {
        return Err(ValidationError::MissingField("category".to_string()));
    }
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount);
    }
    validate_month(month)
}

pub(crate) fn validate_month(month: &str) -> std::result::Result<(), ValidationError> {
    // Months validate by parsing their first day; the length check rejects
    // unpadded forms the parser would accept.
    let first_day = format!("{}-01", month);
    if month.len() != 7 || NaiveDate::parse_from_str(&first_day, "%Y-%m-%d").is_err() {
        return Err(ValidationError::InvalidMonth(month.to_string()));
    }
    Ok(())
}
