mod metrics;
mod page;
mod trend;
mod trip;
mod vendor;

pub use metrics::{DateRange, Metrics, REVENUE_PER_TRIP};
pub use page::{PageRequest, Pagination, MAX_PAGE_SIZE};
pub use trend::{Period, TrendPoint};
pub use trip::{Status, TripFilter, TripPage, TripRecord, TripRow};
pub use vendor::VendorStats;
