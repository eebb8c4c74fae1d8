use chrono::NaiveDate;
use serde::Serialize;

/// Reward points for one customer in one calendar month.
///
/// `month_number` is 1-indexed (calendar convention); the `(0, 0)`
/// year/month pair is the sentinel group for unparseable purchase dates,
/// with no `month_date`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRewardRecord {
    pub customer_id: String,
    pub customer_name: String,
    pub monthly_reward_points: u32,
    /// First day of the month shown in the dashboard's month column; see
    /// `get_monthly_rewards` for how it relates to the purchase month.
    pub month_date: Option<NaiveDate>,
    pub month_number: u32,
    pub year: i32,
}

/// All-time reward points for one customer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalRewardRecord {
    pub customer_id: String,
    pub customer_name: String,
    pub total_reward_points: u32,
}
