use super::helpers::push_date_range;
use super::{Database, Engine};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use sqlx::{QueryBuilder, Row};

use crate::{
    api::AnalyticsAPI,
    entities::{DateRange, Metrics, Period, TrendPoint, VendorStats},
    error::Error,
};

#[async_trait]
impl AnalyticsAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn metrics(&self, range: DateRange) -> Result<Metrics, Error> {
        let mut conn = self.pool.acquire().await?;

        let mut query = QueryBuilder::<Database>::new(
            "
            SELECT
                COUNT(*) AS total_trips,
                SUM(t.passenger_count) AS total_passengers,
                AVG(t.trip_duration) AS avg_duration
            FROM
                trip t",
        );
        push_date_range(&mut query, &range);

        let row = query.build().fetch_one(&mut *conn).await?;

        Ok(Metrics::new(
            row.try_get("total_trips")?,
            row.try_get("total_passengers")?,
            row.try_get("avg_duration")?,
        ))
    }

    #[tracing::instrument(skip(self))]
    async fn trends(&self, period: Period) -> Result<Vec<TrendPoint>, Error> {
        let mut conn = self.pool.acquire().await?;

        let today = Utc::now().date_naive();
        let from = period.window_start(today);
        let until = today + Duration::days(1);

        let query = format!(
            "
            SELECT
                {bucket} AS bucket,
                COUNT(*) AS trips
            FROM
                trip
            WHERE
                pickup_date >= ?
                AND pickup_date < ?
            GROUP BY
                bucket
            HAVING
                bucket IS NOT NULL
            ORDER BY
                bucket ASC
            ",
            bucket = period.bucket_expr()
        );

        let rows = sqlx::query(&query)
            .bind(from.format("%Y-%m-%d").to_string())
            .bind(until.format("%Y-%m-%d").to_string())
            .fetch_all(&mut *conn)
            .await?;

        tracing::debug!(?from, ?until, "fetched {} trend buckets", rows.len());

        rows.iter()
            .map(|row| -> Result<TrendPoint, Error> {
                Ok(TrendPoint {
                    period,
                    bucket: row.try_get("bucket")?,
                    trips: row.try_get("trips")?,
                })
            })
            .collect()
    }

    #[tracing::instrument(skip(self))]
    async fn vendor_stats(&self) -> Result<Vec<VendorStats>, Error> {
        let mut conn = self.pool.acquire().await?;

        let query = "
            SELECT
                v.name AS name,
                COUNT(t.id) AS trip_count,
                AVG(t.trip_duration) AS avg_duration,
                SUM(t.passenger_count) AS total_passengers
            FROM
                vendor v
                LEFT JOIN trip t ON v.id = t.vendor_id
            GROUP BY
                v.id, v.name
            ORDER BY
                trip_count DESC,
                v.id ASC
        ";

        let vendors = sqlx::query_as::<_, VendorStats>(query)
            .fetch_all(&mut *conn)
            .await?;

        Ok(vendors)
    }
}
