use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::entities::Pagination;

/// A trip joined with its vendor and location, as read from the store.
#[derive(Clone, Debug, sqlx::FromRow)]
pub struct TripRow {
    pub id: String,
    pub vendor_id: i64,
    pub location_id: i64,
    pub pickup_date: NaiveDateTime,
    pub trip_duration: f64,
    pub passenger_count: i64,
    pub vendor_name: String,
    pub pickup_longitude: f64,
    pub pickup_latitude: f64,
    pub dropoff_longitude: f64,
    pub dropoff_latitude: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TripRecord {
    pub id: String,
    pub vendor_id: i64,
    pub location_id: i64,
    #[serde(with = "stored_datetime")]
    pub pickup_date: NaiveDateTime,
    pub trip_duration: f64,
    pub passenger_count: i64,
    pub vendor_name: String,
    pub pickup_longitude: f64,
    pub pickup_latitude: f64,
    pub dropoff_longitude: f64,
    pub dropoff_latitude: f64,
    pub status: Status,
}

impl From<TripRow> for TripRecord {
    fn from(row: TripRow) -> Self {
        Self {
            status: Status::from_duration(row.trip_duration),
            id: row.id,
            vendor_id: row.vendor_id,
            location_id: row.location_id,
            pickup_date: row.pickup_date,
            trip_duration: row.trip_duration,
            passenger_count: row.passenger_count,
            vendor_name: row.vendor_name,
            pickup_longitude: row.pickup_longitude,
            pickup_latitude: row.pickup_latitude,
            dropoff_longitude: row.dropoff_longitude,
            dropoff_latitude: row.dropoff_latitude,
        }
    }
}

/// Pickup timestamps in the store's `YYYY-MM-DD HH:MM:SS` text layout.
mod stored_datetime {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(
        value: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Presentation label derived from the trip duration on every read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Completed,
    Cancelled,
    Pending,
}

impl Status {
    pub fn from_duration(duration: f64) -> Self {
        if duration > 30.0 {
            Self::Completed
        } else if duration < 5.0 {
            Self::Cancelled
        } else {
            Self::Pending
        }
    }
}

/// Conjunctive listing filters. `None` adds no predicate.
#[derive(Clone, Debug, Default)]
pub struct TripFilter {
    pub vendor_id: Option<i64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub search: Option<String>,
}

impl TripFilter {
    pub fn new(
        vendor_id: Option<i64>,
        start_date: Option<String>,
        end_date: Option<String>,
        search: Option<String>,
    ) -> Self {
        Self {
            vendor_id,
            start_date: start_date.filter(|s| !s.is_empty()),
            end_date: end_date.filter(|s| !s.is_empty()),
            search: search.filter(|s| !s.is_empty()),
        }
    }

    /// Pattern bound against trip id and vendor name.
    pub fn search_pattern(&self) -> Option<String> {
        self.search.as_ref().map(|s| format!("%{}%", s))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TripPage {
    pub trips: Vec<TripRecord>,
    pub pagination: Pagination,
}
