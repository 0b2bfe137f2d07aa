use super::helpers::{push_trip_filters, TRIP_JOINS};
use super::{Database, Engine};

use async_trait::async_trait;
use sqlx::{QueryBuilder, Row};

use crate::{
    api::TripAPI,
    entities::{PageRequest, TripFilter, TripPage, TripRecord, TripRow},
    error::Error,
};

const TRIP_COLUMNS: &str = "
    SELECT
        CAST(t.id AS TEXT) AS id,
        t.vendor_id,
        t.location_id,
        t.pickup_date,
        CAST(t.trip_duration AS REAL) AS trip_duration,
        t.passenger_count,
        v.name AS vendor_name,
        CAST(l.pickup_longitude AS REAL) AS pickup_longitude,
        CAST(l.pickup_latitude AS REAL) AS pickup_latitude,
        CAST(l.dropoff_longitude AS REAL) AS dropoff_longitude,
        CAST(l.dropoff_latitude AS REAL) AS dropoff_latitude";

#[async_trait]
impl TripAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn list_trips(&self, filter: TripFilter, page: PageRequest) -> Result<TripPage, Error> {
        let mut conn = self.pool.acquire().await?;

        let mut query = QueryBuilder::<Database>::new(TRIP_COLUMNS);
        query.push(TRIP_JOINS);
        push_trip_filters(&mut query, &filter);
        query
            .push(" ORDER BY t.pickup_date DESC, t.id LIMIT ")
            .push_bind(page.limit)
            .push(" OFFSET ")
            .push_bind(page.offset());

        let rows = query
            .build_query_as::<TripRow>()
            .fetch_all(&mut *conn)
            .await?;

        tracing::debug!("fetched {} trips", rows.len());

        let mut count = QueryBuilder::<Database>::new("SELECT COUNT(*) AS total");
        count.push(TRIP_JOINS);
        push_trip_filters(&mut count, &filter);

        let total: i64 = count.build().fetch_one(&mut *conn).await?.try_get("total")?;

        Ok(TripPage {
            trips: rows.into_iter().map(TripRecord::from).collect(),
            pagination: page.paginate(total),
        })
    }
}
