use crate::dates::parse_date;
use crate::filter::DatedRecord;

/// Sort transactions by purchase date, oldest first, without mutating the
/// input.
///
/// The sort is stable: records with equal dates keep their input order.
/// Unparseable dates compare as a unit below every parseable date, so they
/// end up grouped at the front; that placement is an implementation choice,
/// not a contract.
pub fn sort_by_date<T>(transactions: &[T]) -> Vec<T>
where
    T: DatedRecord + Clone,
{
    let mut sorted = transactions.to_vec();
    sorted.sort_by_key(|tx| parse_date(tx.purchase_date()));
    sorted
}
