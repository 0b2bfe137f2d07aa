use axum::extract::rejection::QueryRejection;
use axum::extract::{Extension, Json, Query};
use serde::Deserialize;

use crate::api::DynAPI;
use crate::entities::{DateRange, Metrics};
use crate::error::Error;

#[derive(Debug, Deserialize)]
pub struct SummaryParams {
    start_date: Option<String>,
    end_date: Option<String>,
}

pub async fn summary(
    Extension(api): Extension<DynAPI>,
    params: Result<Query<SummaryParams>, QueryRejection>,
) -> Result<Json<Metrics>, Error> {
    let Query(params) = params?;

    let metrics = api
        .metrics(DateRange::new(params.start_date, params.end_date))
        .await?;

    Ok(metrics.into())
}
