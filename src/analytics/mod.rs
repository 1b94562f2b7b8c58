//! Spending analytics over the current transaction and budget lists.
//!
//! Every operation is a pure read over repository state: nothing is cached,
//! results are recomputed on each call, and failures degrade to empty or
//! zero-valued results rather than errors. Records whose dates cannot be
//! parsed are skipped, not surfaced.
//!
//! Months are grouped and sorted on an internal `YYYY-MM` key; the
//! human-readable `"Mon YYYY"` label is derived only for display, so sort
//! order never depends on parsing a formatted label back.

pub mod analytics_constants;
pub mod analytics_model;
pub mod analytics_service;


pub use analytics_constants::{CHART_COLORS, MONTHLY_SERIES_LIMIT};
pub use analytics_model::{
    BudgetComparison, BudgetStatus, CategoryExpense, DashboardSummary, MonthlyExpense,
    SpendingInsights,
};
pub use analytics_service::{AnalyticsService, AnalyticsServiceTrait};
