use serde::{Deserialize, Serialize};

/// Purchase transaction record as received from the data source.
///
/// Field names follow the source JSON (camelCase). Every field is optional
/// in the input; missing values fall back to defaults so that a partially
/// populated record still flows through the pipeline.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default)]
    pub transaction_id: u64,
    #[serde(default)]
    pub customer_id: String,
    #[serde(default)]
    pub customer_name: String,
    /// Date-like string, parsed lazily by the filter/sort/grouping stages.
    #[serde(default)]
    pub purchase_date: String,
    #[serde(default)]
    pub product_purchased: String,
    /// Absent or non-numeric prices deserialize to `None` and count as zero
    /// spend for reward purposes.
    #[serde(default, deserialize_with = "deserialize_lenient_price")]
    pub price: Option<f64>,
}

/// Custom deserializer that accepts a number, a numeric string, or nothing
/// at all for the price field. Non-numeric values become `None` instead of
/// failing the whole record.
fn deserialize_lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct PriceVisitor;

    impl<'de> serde::de::Visitor<'de> for PriceVisitor {
        type Value = Option<f64>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a number, a numeric string, or null")
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(v))
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(v as f64))
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(v as f64))
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(v.trim().parse::<f64>().ok())
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_some<D2>(self, deserializer: D2) -> Result<Self::Value, D2::Error>
        where
            D2: serde::Deserializer<'de>,
        {
            deserializer.deserialize_any(PriceVisitor)
        }
    }

    deserializer.deserialize_any(PriceVisitor)
}
