pub mod aggregate;
pub mod dates;
pub mod error;
pub mod filter;
pub mod models;
pub mod points;
pub mod sort;

use std::io::{Read, Write};

use error::Result;
use models::Transaction;

pub use aggregate::{get_monthly_rewards, get_total_rewards};
pub use filter::{filter_by_date_range, DatedRecord};
pub use points::{calculate_reward_points, compute_reward_points_for_transactions};
pub use sort::sort_by_date;

/// Column name of the purchase date field in source records.
pub const PURCHASE_DATE_FIELD: &str = "purchaseDate";

/// Load transactions from a JSON reader.
///
/// The document is expected to be an array of transaction objects. A
/// non-array document yields an empty list, and array elements that do not
/// deserialize as transactions are skipped; neither case is an error. Only
/// a document that is not valid JSON at all fails.
pub fn read_transactions<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let document: serde_json::Value = serde_json::from_reader(reader)?;

    let items = match document.as_array() {
        Some(items) => items,
        None => return Ok(Vec::new()),
    };

    let mut transactions = Vec::with_capacity(items.len());
    for item in items {
        match serde_json::from_value::<Transaction>(item.clone()) {
            Ok(tx) => transactions.push(tx),
            Err(_) => {
                // Silently skip malformed records
            }
        }
    }

    Ok(transactions)
}

/// Compute the dashboard views from a JSON transaction list and write them
/// to `writer` as titled CSV sections: Monthly Rewards, Total Rewards, and
/// the date-sorted Transactions ledger.
///
/// When at least one date bound is given the transactions are filtered on
/// their purchase date before any rewards are computed; with no bounds the
/// list passes through unfiltered.
pub fn process_transactions<R: Read, W: Write>(
    reader: R,
    mut writer: W,
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> Result<()> {
    let transactions = read_transactions(reader)?;

    let transactions = if start_date.is_some() || end_date.is_some() {
        filter_by_date_range(&transactions, start_date, end_date, PURCHASE_DATE_FIELD)
    } else {
        transactions
    };

    let enriched = compute_reward_points_for_transactions(&transactions);
    let monthly = get_monthly_rewards(&enriched);
    let totals = get_total_rewards(&enriched);
    let ledger = sort_by_date(&enriched);

    write_section(&mut writer, "Monthly Rewards", &monthly)?;
    write_section(&mut writer, "Total Rewards", &totals)?;
    write_section(&mut writer, "Transactions", &ledger)?;

    Ok(())
}

/// Write one `# <title>` heading followed by a headered CSV table.
fn write_section<W, T>(writer: &mut W, title: &str, rows: &[T]) -> Result<()>
where
    W: Write,
    T: serde::Serialize,
{
    writeln!(writer, "# {title}")?;

    let mut csv_writer = csv::Writer::from_writer(&mut *writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    drop(csv_writer);

    writeln!(writer)?;
    Ok(())
}
