pub mod analytics;
pub mod budgets;
pub mod constants;
pub mod errors;
pub mod storage;
pub mod transactions;

pub use errors::{Error, Result};

pub use analytics::*;
pub use storage::*;
