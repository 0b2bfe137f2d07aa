use axum::extract::rejection::QueryRejection;
use axum::extract::{Extension, Json, Query};
use serde::Deserialize;

use crate::api::DynAPI;
use crate::entities::{PageRequest, TripFilter, TripPage};
use crate::error::{invalid_input_error, Error};

#[derive(Debug, Deserialize)]
pub struct ListParams {
    page: Option<i64>,
    limit: Option<i64>,
    vendor_id: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    search: Option<String>,
}

pub async fn list(
    Extension(api): Extension<DynAPI>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<TripPage>, Error> {
    let Query(params) = params?;

    let filter = TripFilter::new(
        parse_vendor_id(params.vendor_id)?,
        params.start_date,
        params.end_date,
        params.search,
    );
    let page = PageRequest::new(params.page, params.limit);

    let trips = api.list_trips(filter, page).await?;

    Ok(trips.into())
}

/// An empty `vendor_id` means no vendor filter; anything else must be numeric.
fn parse_vendor_id(raw: Option<String>) -> Result<Option<i64>, Error> {
    raw.filter(|s| !s.is_empty())
        .map(|s| s.parse::<i64>())
        .transpose()
        .map_err(|err| invalid_input_error(format!("invalid vendor_id: {}", err)))
}
