use axum::extract::rejection::QueryRejection;
use axum::extract::{Extension, Json, Query};
use serde::Deserialize;

use crate::api::DynAPI;
use crate::entities::{Period, TrendPoint, VendorStats};
use crate::error::Error;

#[derive(Debug, Deserialize)]
pub struct TrendParams {
    period: Option<String>,
}

pub async fn trends(
    Extension(api): Extension<DynAPI>,
    params: Result<Query<TrendParams>, QueryRejection>,
) -> Result<Json<Vec<TrendPoint>>, Error> {
    let Query(params) = params?;

    let trends = api.trends(Period::parse(params.period.as_deref())).await?;

    Ok(trends.into())
}

pub async fn vendors(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<VendorStats>>, Error> {
    let vendors = api.vendor_stats().await?;

    Ok(vendors.into())
}
