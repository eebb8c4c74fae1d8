use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::dates::parse_date;
use crate::models::{EnrichedTransaction, MonthlyRewardRecord, TotalRewardRecord};

/// Composite grouping key for monthly aggregation. A struct key cannot
/// collide across customer/year/month combinations the way a concatenated
/// string key could.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MonthKey {
    customer_id: String,
    year: i32,
    month: u32,
}

/// Aggregate reward points per customer per calendar month.
///
/// One output record per distinct (customer, year, month) group, with the
/// customer name taken from the group's first transaction. Output is sorted
/// ascending by year then month; the sort is stable, so groups sharing both
/// keys keep the order in which they were first seen.
///
/// Transactions whose purchase date does not parse collapse into a
/// per-customer sentinel group with year and month 0 and no month date.
pub fn get_monthly_rewards(transactions: &[EnrichedTransaction]) -> Vec<MonthlyRewardRecord> {
    let mut index: HashMap<MonthKey, usize> = HashMap::new();
    let mut groups: Vec<MonthlyRewardRecord> = Vec::new();

    for tx in transactions {
        let (year, month) = match parse_date(&tx.transaction.purchase_date) {
            Some(date) => (date.year(), date.month()),
            None => (0, 0),
        };
        let key = MonthKey {
            customer_id: tx.transaction.customer_id.clone(),
            year,
            month,
        };

        let idx = match index.get(&key) {
            Some(&idx) => idx,
            None => {
                groups.push(MonthlyRewardRecord {
                    customer_id: tx.transaction.customer_id.clone(),
                    customer_name: tx.transaction.customer_name.clone(),
                    monthly_reward_points: 0,
                    month_date: first_of_following_month(year, month),
                    month_number: month,
                    year,
                });
                index.insert(key, groups.len() - 1);
                groups.len() - 1
            }
        };
        groups[idx].monthly_reward_points += tx.reward_points;
    }

    groups.sort_by_key(|g| (g.year, g.month_number));
    groups
}

/// The dashboard's month column points at the first day of the month
/// *after* the purchase month; December rolls into January of the next
/// year. The sentinel month 0 has no date.
fn first_of_following_month(year: i32, month: u32) -> Option<NaiveDate> {
    match month {
        0 => None,
        12 => NaiveDate::from_ymd_opt(year + 1, 1, 1),
        _ => NaiveDate::from_ymd_opt(year, month + 1, 1),
    }
}

/// Aggregate all-time reward points per customer.
///
/// One output record per distinct customer id, in order of first
/// occurrence; no sort is applied.
pub fn get_total_rewards(transactions: &[EnrichedTransaction]) -> Vec<TotalRewardRecord> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut totals: Vec<TotalRewardRecord> = Vec::new();

    for tx in transactions {
        let idx = match index.get(&tx.transaction.customer_id) {
            Some(&idx) => idx,
            None => {
                totals.push(TotalRewardRecord {
                    customer_id: tx.transaction.customer_id.clone(),
                    customer_name: tx.transaction.customer_name.clone(),
                    total_reward_points: 0,
                });
                index.insert(tx.transaction.customer_id.clone(), totals.len() - 1);
                totals.len() - 1
            }
        };
        totals[idx].total_reward_points += tx.reward_points;
    }

    totals
}
