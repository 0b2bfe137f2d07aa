use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{
    DateRange, Metrics, PageRequest, Period, TrendPoint, TripFilter, TripPage, VendorStats,
};
use crate::error::Error;

#[async_trait]
pub trait TripAPI {
    async fn list_trips(&self, filter: TripFilter, page: PageRequest) -> Result<TripPage, Error>;
}

#[async_trait]
pub trait AnalyticsAPI {
    async fn metrics(&self, range: DateRange) -> Result<Metrics, Error>;
    async fn trends(&self, period: Period) -> Result<Vec<TrendPoint>, Error>;
    async fn vendor_stats(&self) -> Result<Vec<VendorStats>, Error>;
}

pub trait API: TripAPI + AnalyticsAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
