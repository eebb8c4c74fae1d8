use rewards_engine::models::{EnrichedTransaction, Transaction};
use serde_json::json;

/// Helper to create a transaction with all fields
pub fn make_transaction(
    transaction_id: u64,
    customer_id: &str,
    customer_name: &str,
    purchase_date: &str,
    price: Option<f64>,
) -> Transaction {
    Transaction {
        transaction_id,
        customer_id: customer_id.to_string(),
        customer_name: customer_name.to_string(),
        purchase_date: purchase_date.to_string(),
        product_purchased: String::new(),
        price,
    }
}

/// Helper to create an enriched transaction with explicit reward points
pub fn make_enriched(
    customer_id: &str,
    customer_name: &str,
    purchase_date: &str,
    reward_points: u32,
) -> EnrichedTransaction {
    EnrichedTransaction::new(
        make_transaction(0, customer_id, customer_name, purchase_date, None),
        reward_points,
    )
}

/// Build a JSON transaction array from (id, customer, name, date, product,
/// price) tuples; a `None` price omits the field entirely
pub fn transactions_json(rows: &[(u64, &str, &str, &str, &str, Option<f64>)]) -> String {
    let items: Vec<serde_json::Value> = rows
        .iter()
        .map(|(id, customer_id, customer_name, date, product, price)| {
            let mut item = json!({
                "transactionId": id,
                "customerId": customer_id,
                "customerName": customer_name,
                "purchaseDate": date,
                "productPurchased": product,
            });
            if let Some(price) = price {
                item["price"] = json!(price);
            }
            item
        })
        .collect();

    serde_json::Value::Array(items).to_string()
}

/// Run the full report over a JSON string and return the output
pub fn run_report(json: &str, start_date: Option<&str>, end_date: Option<&str>) -> String {
    let mut output = Vec::new();
    rewards_engine::process_transactions(json.as_bytes(), &mut output, start_date, end_date)
        .unwrap();
    String::from_utf8(output).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_transaction() {
        let tx = make_transaction(7, "C1", "John", "2024-01-10", Some(120.0));
        assert_eq!(tx.transaction_id, 7);
        assert_eq!(tx.customer_id, "C1");
        assert_eq!(tx.customer_name, "John");
        assert_eq!(tx.purchase_date, "2024-01-10");
        assert_eq!(tx.price, Some(120.0));
    }

    #[test]
    fn test_make_enriched() {
        let enriched = make_enriched("C1", "John", "2024-01-10", 90);
        assert_eq!(enriched.transaction.customer_id, "C1");
        assert_eq!(enriched.reward_points, 90);
    }

    #[test]
    fn test_transactions_json_omits_missing_price() {
        let json = transactions_json(&[
            (1, "C1", "John", "2024-01-10", "Laptop", Some(120.0)),
            (2, "C2", "Jane", "2024-01-15", "Mouse", None),
        ]);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["price"], serde_json::json!(120.0));
        assert!(value[1].get("price").is_none());
    }

    #[test]
    fn test_run_report_emits_all_sections() {
        let json = transactions_json(&[(1, "C1", "John", "2024-01-10", "Laptop", Some(120.0))]);
        let output = run_report(&json, None, None);

        assert!(output.contains("# Monthly Rewards"));
        assert!(output.contains("# Total Rewards"));
        assert!(output.contains("# Transactions"));
    }
}
