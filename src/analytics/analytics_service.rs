use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Utc};
use log::warn;
use num_traits::Zero;
use rust_decimal::Decimal;

use super::analytics_constants::{CHART_COLORS, MONTHLY_SERIES_LIMIT};
use super::analytics_model::{
    BudgetComparison, BudgetStatus, CategoryExpense, DashboardSummary, MonthlyExpense,
    SpendingInsights,
};
use crate::budgets::budgets_traits::BudgetRepositoryTrait;
use crate::transactions::transactions_model::{Transaction, TransactionType};
use crate::transactions::transactions_traits::TransactionRepositoryTrait;

// Define the trait for the analytics service
pub trait AnalyticsServiceTrait: Send + Sync {
    /// Expense totals per calendar month, oldest first, capped at the most
    /// recent twelve months.
    fn get_monthly_expenses(&self) -> Vec<MonthlyExpense>;

    /// Expense totals per category with their share of total expenses and a
    /// chart color, largest first.
    fn get_category_expenses(&self) -> Vec<CategoryExpense>;

    /// Actual vs. budgeted spend for every budget in the given month
    /// (current month when `None`), largest budget first.
    fn get_budget_comparison(&self, month: Option<&str>) -> Vec<BudgetComparison>;

    fn get_total_expenses(&self) -> Decimal;

    fn get_total_income(&self) -> Decimal;

    /// Month-over-month spending movement, top category and daily average.
    fn get_spending_insights(&self) -> SpendingInsights;

    /// Totals, balance and record counts for the dashboard's stat tiles.
    fn get_dashboard_summary(&self) -> DashboardSummary;
}

pub struct AnalyticsService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
}

impl AnalyticsService {
    pub fn new(
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
    ) -> Self {
        AnalyticsService {
            transaction_repository,
            budget_repository,
        }
    }
}

// Implement the trait for AnalyticsService
impl AnalyticsServiceTrait for AnalyticsService {
    fn get_monthly_expenses(&self) -> Vec<MonthlyExpense> {
        let mut by_month: BTreeMap<String, Decimal> = BTreeMap::new();

        for transaction in self.transaction_repository.list() {
            if transaction.transaction_type != TransactionType::Expense {
                continue;
            }
            let date = match NaiveDate::parse_from_str(&transaction.date, "%Y-%m-%d") {
                Ok(date) => date,
                Err(_) => {
                    warn!(
                        "Skipping transaction {} with invalid date {}",
                        transaction.id, transaction.date
                    );
                    continue;
                }
            };
            *by_month
                .entry(month_key(date))
                .or_insert_with(Decimal::zero) += transaction.amount;
        }

        // The BTreeMap already holds months ascending; keep the tail.
        let keep_from = by_month.len().saturating_sub(MONTHLY_SERIES_LIMIT);
        by_month
            .into_iter()
            .skip(keep_from)
            .map(|(key, amount)| MonthlyExpense {
                month: month_label(&key),
                amount,
            })
            .collect()
    }

    fn get_category_expenses(&self) -> Vec<CategoryExpense> {
        let transactions = self.transaction_repository.list();
        let (order, totals) = expense_totals_by_category(&transactions);
        let total: Decimal = totals.values().copied().sum();

        let mut breakdown: Vec<CategoryExpense> = order
            .into_iter()
            .enumerate()
            .map(|(index, category)| {
                let amount = totals[&category];
                let percentage = if total > Decimal::zero() {
                    amount / total * Decimal::from(100)
                } else {
                    Decimal::zero()
                };
                CategoryExpense {
                    category,
                    amount,
                    percentage,
                    color: CHART_COLORS[index % CHART_COLORS.len()].to_string(),
                }
            })
            .collect();

        breakdown.sort_by(|a, b| b.amount.cmp(&a.amount));
        breakdown
    }

    fn get_budget_comparison(&self, month: Option<&str>) -> Vec<BudgetComparison> {
        let target_month = month
            .map(str::to_string)
            .unwrap_or_else(|| month_key(Utc::now().date_naive()));
        self.budget_comparison_for(&target_month)
    }

    fn get_total_expenses(&self) -> Decimal {
        self.sum_by_type(TransactionType::Expense)
    }

    fn get_total_income(&self) -> Decimal {
        self.sum_by_type(TransactionType::Income)
    }

    fn get_spending_insights(&self) -> SpendingInsights {
        self.spending_insights_as_of(Utc::now().date_naive())
    }

    fn get_dashboard_summary(&self) -> DashboardSummary {
        let total_income = self.get_total_income();
        let total_expenses = self.get_total_expenses();
        let (top_category, top_category_amount) =
            top_category_entry(self.get_category_expenses());

        DashboardSummary {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
            transaction_count: self.transaction_repository.list().len(),
            top_category,
            top_category_amount,
            budget_count: self.budget_repository.list().len(),
        }
    }
}

impl AnalyticsService {
    pub(crate) fn budget_comparison_for(&self, target_month: &str) -> Vec<BudgetComparison> {
        let budgets: Vec<_> = self
            .budget_repository
            .list()
            .into_iter()
            .filter(|b| b.month == target_month)
            .collect();

        let mut actual_by_category: HashMap<String, Decimal> = HashMap::new();
        for transaction in self.transaction_repository.list() {
            if transaction.transaction_type != TransactionType::Expense
                || !transaction.date.starts_with(target_month)
                || transaction.category.is_empty()
            {
                continue;
            }
            *actual_by_category
                .entry(transaction.category.clone())
                .or_insert_with(Decimal::zero) += transaction.amount;
        }

        let mut comparisons: Vec<BudgetComparison> = budgets
            .into_iter()
            .map(|budget| {
                let actual = actual_by_category
                    .get(&budget.category)
                    .copied()
                    .unwrap_or_else(Decimal::zero);
                let percentage = if budget.amount > Decimal::zero() {
                    actual / budget.amount * Decimal::from(100)
                } else {
                    Decimal::zero()
                };
                let status = if percentage > Decimal::from(100) {
                    BudgetStatus::Over
                } else if percentage >= Decimal::from(80) {
                    BudgetStatus::OnTrack
                } else {
                    BudgetStatus::Under
                };

                BudgetComparison {
                    category: budget.category,
                    budgeted: budget.amount,
                    actual,
                    percentage,
                    status,
                }
            })
            .collect();

        comparisons.sort_by(|a, b| b.budgeted.cmp(&a.budgeted));
        comparisons
    }

    pub(crate) fn spending_insights_as_of(&self, today: NaiveDate) -> SpendingInsights {
        let transactions = self.transaction_repository.list();
        let current_month = month_key(today);
        let last_month = previous_month_key(today);

        let month_total = |month: &str| -> Decimal {
            transactions
                .iter()
                .filter(|t| {
                    t.transaction_type == TransactionType::Expense && t.date.starts_with(month)
                })
                .map(|t| t.amount)
                .sum()
        };

        let current_month_expenses = month_total(&current_month);
        let last_month_expenses = month_total(&last_month);

        let monthly_change = if last_month_expenses > Decimal::zero() {
            (current_month_expenses - last_month_expenses) / last_month_expenses
                * Decimal::from(100)
        } else {
            Decimal::zero()
        };

        let average_daily_spending = current_month_expenses / Decimal::from(today.day());

        let (top_category, top_category_amount) =
            top_category_entry(self.get_category_expenses());

        SpendingInsights {
            current_month_expenses,
            last_month_expenses,
            monthly_change,
            top_category,
            top_category_amount,
            average_daily_spending,
        }
    }

    fn sum_by_type(&self, transaction_type: TransactionType) -> Decimal {
        self.transaction_repository
            .list()
            .iter()
            .filter(|t| t.transaction_type == transaction_type)
            .map(|t| t.amount)
            .sum()
    }
}

/// Sums expense amounts per category, keeping the order categories were
/// first seen in; that order keys the chart color assignment.
fn expense_totals_by_category(
    transactions: &[Transaction],
) -> (Vec<String>, HashMap<String, Decimal>) {
    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, Decimal> = HashMap::new();

    for transaction in transactions {
        if transaction.transaction_type != TransactionType::Expense
            || transaction.category.is_empty()
        {
            continue;
        }
        if !totals.contains_key(&transaction.category) {
            order.push(transaction.category.clone());
        }
        *totals
            .entry(transaction.category.clone())
            .or_insert_with(Decimal::zero) += transaction.amount;
    }

    (order, totals)
}

fn top_category_entry(breakdown: Vec<CategoryExpense>) -> (String, Decimal) {
    match breakdown.into_iter().next() {
        Some(entry) => (entry.category, entry.amount),
        None => ("None".to_string(), Decimal::zero()),
    }
}

fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

fn previous_month_key(today: NaiveDate) -> String {
    let (year, month) = if today.month() == 1 {
        (today.year() - 1, 12)
    } else {
        (today.year(), today.month() - 1)
    };
    format!("{:04}-{:02}", year, month)
}

fn month_label(key: &str) -> String {
    // `key` is "YYYY-MM"; fall back to the raw key if it ever is not.
    match NaiveDate::parse_from_str(&format!("{}-01", key), "%Y-%m-%d") {
        Ok(date) => date.format("%b %Y").to_string(),
        Err(_) => key.to_string(),
    }
}
