use crate::models::{EnrichedTransaction, Transaction};

/// Calculate reward points for a single purchase price.
///
/// Tiers:
/// - up to $50: no points
/// - $50 to $100: 1 point per whole dollar over $50
/// - over $100: 50 points plus 2 points per whole dollar over $100
///
/// Fractions are floored inside the active tier's offset, so $100.75 earns
/// 50 points and $120.99 earns 90. Non-finite or negative prices count as
/// zero spend, never an error.
pub fn calculate_reward_points(price: f64) -> u32 {
    if !price.is_finite() || price < 0.0 {
        return 0;
    }

    if price <= 50.0 {
        0
    } else if price <= 100.0 {
        (price - 50.0).floor() as u32
    } else {
        // Arithmetic stays in f64 so the final cast saturates instead of
        // overflowing on absurd prices
        ((price - 100.0).floor() * 2.0 + 50.0) as u32
    }
}

/// Attach computed reward points to every transaction.
///
/// Output preserves input order, one record per transaction; a missing
/// price earns zero points. The input is only borrowed.
pub fn compute_reward_points_for_transactions(
    transactions: &[Transaction],
) -> Vec<EnrichedTransaction> {
    transactions
        .iter()
        .map(|tx| {
            let points = calculate_reward_points(tx.price.unwrap_or(0.0));
            EnrichedTransaction::new(tx.clone(), points)
        })
        .collect()
}
