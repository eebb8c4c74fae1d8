pub mod enriched;
pub mod rewards;
pub mod transaction;

pub use enriched::EnrichedTransaction;
pub use rewards::{MonthlyRewardRecord, TotalRewardRecord};
pub use transaction::Transaction;
