use super::Database;

use sqlx::QueryBuilder;

use crate::entities::{DateRange, TripFilter};

/// Joins shared by the trip listing and its count, so `total` only counts
/// rows that can be listed.
pub const TRIP_JOINS: &str = "
    FROM
        trip t
        JOIN vendor v ON t.vendor_id = v.id
        JOIN location l ON t.location_id = l.id
    WHERE 1 = 1";

pub fn push_trip_filters(query: &mut QueryBuilder<'_, Database>, filter: &TripFilter) {
    if let Some(vendor_id) = filter.vendor_id {
        query.push(" AND t.vendor_id = ").push_bind(vendor_id);
    }

    if let Some(start_date) = &filter.start_date {
        query.push(" AND t.pickup_date >= ").push_bind(start_date.clone());
    }

    if let Some(end_date) = &filter.end_date {
        query.push(" AND t.pickup_date <= ").push_bind(end_date.clone());
    }

    if let Some(pattern) = filter.search_pattern() {
        query
            .push(" AND (CAST(t.id AS TEXT) LIKE ")
            .push_bind(pattern.clone())
            .push(" OR v.name LIKE ")
            .push_bind(pattern)
            .push(")");
    }
}

pub fn push_date_range(query: &mut QueryBuilder<'_, Database>, range: &DateRange) {
    if let Some((start, end)) = range.bounds() {
        query
            .push(" WHERE t.pickup_date BETWEEN ")
            .push_bind(start.to_owned())
            .push(" AND ")
            .push_bind(end.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::Execute;

    fn sql_of(query: &mut QueryBuilder<'_, Database>) -> String {
        query.build().sql().to_owned()
    }

    fn build(filter: &TripFilter) -> String {
        let mut query = QueryBuilder::<Database>::new("SELECT COUNT(*)");
        query.push(TRIP_JOINS);
        push_trip_filters(&mut query, filter);
        sql_of(&mut query)
    }

    #[test]
    fn no_filters_add_no_predicates() {
        let sql = build(&TripFilter::default());

        assert!(sql.trim_end().ends_with("WHERE 1 = 1"));
        assert!(!sql.contains('?'));
    }

    #[test]
    fn every_value_is_bound() {
        let filter = TripFilter::new(
            Some(2),
            Some("2024-01-01".into()),
            Some("2024-01-31".into()),
            Some("x' OR 1=1 --".into()),
        );
        let sql = build(&filter);

        assert_eq!(sql.matches('?').count(), 5);
        assert!(!sql.contains("OR 1=1"));
        assert!(!sql.contains("2024-01-01"));
    }

    #[test]
    fn partial_range_is_skipped() {
        let mut query = QueryBuilder::<Database>::new("SELECT COUNT(*) FROM trip t");
        push_date_range(&mut query, &DateRange::new(Some("2024-01-01".into()), None));

        assert_eq!(sql_of(&mut query), "SELECT COUNT(*) FROM trip t");
    }

    #[test]
    fn full_range_binds_both_ends() {
        let mut query = QueryBuilder::<Database>::new("SELECT COUNT(*) FROM trip t");
        push_date_range(
            &mut query,
            &DateRange::new(Some("2024-01-01".into()), Some("2024-01-31".into())),
        );

        assert_eq!(
            sql_of(&mut query),
            "SELECT COUNT(*) FROM trip t WHERE t.pickup_date BETWEEN ? AND ?"
        );
    }
}
