/// Colors cycled across category slices, keyed by first-appearance order.
pub const CHART_COLORS: [&str; 15] = [
    "#3b82f6", "#ef4444", "#10b981", "#f59e0b", "#8b5cf6", "#06b6d4", "#f97316", "#84cc16",
    "#ec4899", "#6366f1", "#14b8a6", "#f43f5e", "#8b5cf6", "#06b6d4", "#f59e0b",
];

/// The monthly expense series keeps this many most recent months.
pub const MONTHLY_SERIES_LIMIT: usize = 12;
