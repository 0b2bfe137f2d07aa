use chrono::{Duration, Months, NaiveDate};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Trend bucket granularity.
///
/// Weekly keys follow SQLite's `%W`: weeks start on Monday and days before a
/// year's first Monday fall in week `00`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    /// `None` means daily; unrecognized names fall through to monthly.
    pub fn parse(name: Option<&str>) -> Self {
        match name {
            None | Some("daily") => Self::Daily,
            Some("weekly") => Self::Weekly,
            Some(_) => Self::Monthly,
        }
    }

    /// Store expression producing the bucket key for `pickup_date`.
    pub fn bucket_expr(&self) -> &'static str {
        match self {
            Self::Daily => "DATE(pickup_date)",
            Self::Weekly => "strftime('%Y-%W', pickup_date)",
            Self::Monthly => "strftime('%Y-%m', pickup_date)",
        }
    }

    pub fn key_name(&self) -> &'static str {
        match self {
            Self::Daily => "date",
            Self::Weekly => "week",
            Self::Monthly => "month",
        }
    }

    /// Earliest pickup date inside the trailing window ending `today`.
    pub fn window_start(&self, today: NaiveDate) -> NaiveDate {
        match self {
            Self::Daily => today - Duration::days(7),
            Self::Weekly => today - Duration::weeks(8),
            Self::Monthly => today
                .checked_sub_months(Months::new(12))
                .unwrap_or(NaiveDate::MIN),
        }
    }
}

/// Trip count for one non-empty bucket, keyed by the period's name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrendPoint {
    pub period: Period,
    pub bucket: String,
    pub trips: i64,
}

impl Serialize for TrendPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(self.period.key_name(), &self.bucket)?;
        map.serialize_entry("trips", &self.trips)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_defaults_and_fallthrough() {
        assert_eq!(Period::parse(None), Period::Daily);
        assert_eq!(Period::parse(Some("daily")), Period::Daily);
        assert_eq!(Period::parse(Some("weekly")), Period::Weekly);
        assert_eq!(Period::parse(Some("monthly")), Period::Monthly);
        assert_eq!(Period::parse(Some("hourly")), Period::Monthly);
        assert_eq!(Period::parse(Some("")), Period::Monthly);
    }

    #[test]
    fn windows() {
        let today = date(2024, 3, 15);

        assert_eq!(Period::Daily.window_start(today), date(2024, 3, 8));
        assert_eq!(Period::Weekly.window_start(today), date(2024, 1, 19));
        assert_eq!(Period::Monthly.window_start(today), date(2023, 3, 15));
    }

    #[test]
    fn monthly_window_clamps_leap_day() {
        assert_eq!(
            Period::Monthly.window_start(date(2024, 2, 29)),
            date(2023, 2, 28)
        );
    }

    #[test]
    fn week_keys_match_monday_numbering() {
        // 2024-01-01 is a Monday, 2023-01-01 a Sunday.
        assert_eq!(date(2024, 1, 1).format("%Y-%W").to_string(), "2024-01");
        assert_eq!(date(2023, 1, 1).format("%Y-%W").to_string(), "2023-00");
    }

    #[test]
    fn serializes_with_period_key() {
        let point = TrendPoint {
            period: Period::Weekly,
            bucket: "2024-03".into(),
            trips: 4,
        };

        assert_eq!(
            serde_json::to_value(&point).unwrap(),
            json!({ "week": "2024-03", "trips": 4 })
        );
    }
}
