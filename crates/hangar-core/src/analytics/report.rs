use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Statistics as aggregated by the server. Durations are milliseconds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsReport {
    pub total_orders: u64,
    pub completed_orders: u64,
    #[serde(deserialize_with = "number_or_text")]
    pub completion_rate: String,
    pub overdue_orders: u64,
    pub avg_completion_time: f64,
    pub orders_by_status: BTreeMap<String, u64>,
    pub orders_by_priority: BTreeMap<String, u64>,
    pub stage_averages: BTreeMap<String, f64>,
    /// Keyed by `YYYY-MM-DD`
    pub orders_by_date: BTreeMap<String, u64>,
    pub total_items: u64,
    #[serde(deserialize_with = "number_or_text")]
    pub avg_items_per_order: String,
}

// The server formats some ratios with toFixed() and sends them as strings.
fn number_or_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}
