use rust_decimal::Decimal;
use serde::Serialize;

/// Total expenses for one calendar month.
#[derive(Serialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyExpense {
    /// Display label, e.g. "Jun 2025".
    pub month: String,
    pub amount: Decimal,
}

/// One category's share of total expenses.
#[derive(Serialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CategoryExpense {
    pub category: String,
    pub amount: Decimal,
    /// Share of total expenses, 0-100. Zero when there are no expenses.
    pub percentage: Decimal,
    pub color: String,
}

#[derive(Serialize, PartialEq, Eq, Debug, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetStatus {
    Under,
    OnTrack,
    Over,
}

/// Actual vs. planned spend for one budgeted category in one month.
#[derive(Serialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BudgetComparison {
    pub category: String,
    pub budgeted: Decimal,
    pub actual: Decimal,
    /// `actual / budgeted * 100`; zero when the budgeted amount is zero.
    pub percentage: Decimal,
    pub status: BudgetStatus,
}

#[derive(Serialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SpendingInsights {
    pub current_month_expenses: Decimal,
    pub last_month_expenses: Decimal,
    /// Month-over-month change in percent; zero when last month had no
    /// expenses.
    pub monthly_change: Decimal,
    pub top_category: String,
    pub top_category_amount: Decimal,
    pub average_daily_spending: Decimal,
}

/// The dashboard's stat tiles in one read.
#[derive(Serialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
    pub transaction_count: usize,
    pub top_category: String,
    pub top_category_amount: Decimal,
    pub budget_count: usize,
}
