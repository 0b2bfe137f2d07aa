use serde::{Deserialize, Serialize};

/// Flat per-trip amount behind `estimated_revenue`; not a fare model.
pub const REVENUE_PER_TRIP: i64 = 15;

/// Inclusive pickup-date range. Only applied when both ends are present.
#[derive(Clone, Debug, Default)]
pub struct DateRange {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl DateRange {
    pub fn new(start_date: Option<String>, end_date: Option<String>) -> Self {
        Self {
            start_date: start_date.filter(|s| !s.is_empty()),
            end_date: end_date.filter(|s| !s.is_empty()),
        }
    }

    pub fn bounds(&self) -> Option<(&str, &str)> {
        match (&self.start_date, &self.end_date) {
            (Some(start), Some(end)) => Some((start.as_str(), end.as_str())),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub total_trips: i64,
    pub total_passengers: i64,
    pub avg_duration: f64,
    pub estimated_revenue: i64,
}

impl Metrics {
    pub fn new(total_trips: i64, total_passengers: Option<i64>, avg_duration: Option<f64>) -> Self {
        Self {
            total_trips,
            total_passengers: total_passengers.unwrap_or(0),
            avg_duration: round_tenths(avg_duration.unwrap_or(0.0)),
            estimated_revenue: total_trips * REVENUE_PER_TRIP,
        }
    }
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
