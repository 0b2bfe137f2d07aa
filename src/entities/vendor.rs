use serde::{Deserialize, Serialize};

/// Per-vendor aggregates. Vendors without trips carry `null` averages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct VendorStats {
    pub name: String,
    pub trip_count: i64,
    pub avg_duration: Option<f64>,
    pub total_passengers: Option<i64>,
}
