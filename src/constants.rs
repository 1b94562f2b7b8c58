/// Storage key for the persisted transaction list
pub const TRANSACTIONS_STORAGE_KEY: &str = "finance-visualizer-transactions";

/// Storage key for the persisted budget list
pub const BUDGETS_STORAGE_KEY: &str = "finance-visualizer-budgets";
