use crate::dates::parse_timestamp;
use crate::models::{EnrichedTransaction, Transaction};

/// Access to the date fields a record can be searched on.
///
/// The range filter and date sorter work over any record type implementing
/// this trait, so the same code serves raw and enriched transactions.
pub trait DatedRecord {
    /// Raw value of the record's purchase date.
    fn purchase_date(&self) -> &str;

    /// Raw value of a date field addressed by its column name; `None` when
    /// the record carries no such field.
    fn date_field(&self, field: &str) -> Option<&str> {
        (field == crate::PURCHASE_DATE_FIELD).then(|| self.purchase_date())
    }
}

impl DatedRecord for Transaction {
    fn purchase_date(&self) -> &str {
        &self.purchase_date
    }
}

impl DatedRecord for EnrichedTransaction {
    fn purchase_date(&self) -> &str {
        &self.transaction.purchase_date
    }
}

/// Filter records to those whose named date field falls within the
/// optional, inclusive start/end bounds.
///
/// Records whose field is missing, empty, or unparseable are excluded. An
/// absent or unparseable bound leaves that side of the range open; with
/// both sides open every record with a usable date passes. An empty field
/// name is a configuration error and yields an empty result rather than a
/// panic. Returns a fresh vector; the input is untouched.
pub fn filter_by_date_range<T>(
    data: &[T],
    start_date: Option<&str>,
    end_date: Option<&str>,
    field_name: &str,
) -> Vec<T>
where
    T: DatedRecord + Clone,
{
    if field_name.is_empty() {
        return Vec::new();
    }

    let start = start_date.and_then(parse_timestamp);
    let end = end_date.and_then(parse_timestamp);

    data.iter()
        .filter(|item| {
            let raw = match item.date_field(field_name) {
                Some(raw) => raw,
                None => return false,
            };
            let at = match parse_timestamp(raw) {
                Some(at) => at,
                None => return false,
            };

            match (start, end) {
                (Some(start), Some(end)) => start <= at && at <= end,
                (Some(start), None) => at >= start,
                (None, Some(end)) => at <= end,
                (None, None) => true,
            }
        })
        .cloned()
        .collect()
}
