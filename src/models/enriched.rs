use serde::{Serialize, Serializer};

use super::transaction::Transaction;

/// Transaction augmented with its computed reward points.
///
/// Built once by the enricher and treated as read-only by every downstream
/// consumer (aggregation, sorting, report output).
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedTransaction {
    pub transaction: Transaction,
    pub reward_points: u32,
}

impl EnrichedTransaction {
    pub fn new(transaction: Transaction, reward_points: u32) -> Self {
        Self {
            transaction,
            reward_points,
        }
    }
}

// Custom serialization to flatten the record into a single ledger row,
// keeping the dashboard's column order
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LedgerRow<'a> {
    transaction_id: u64,
    customer_id: &'a str,
    customer_name: &'a str,
    purchase_date: &'a str,
    product_purchased: &'a str,
    price: Option<f64>,
    reward_points: u32,
}

impl Serialize for EnrichedTransaction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let row = LedgerRow {
            transaction_id: self.transaction.transaction_id,
            customer_id: &self.transaction.customer_id,
            customer_name: &self.transaction.customer_name,
            purchase_date: &self.transaction.purchase_date,
            product_purchased: &self.transaction.product_purchased,
            price: self.transaction.price,
            reward_points: self.reward_points,
        };
        row.serialize(serializer)
    }
}
