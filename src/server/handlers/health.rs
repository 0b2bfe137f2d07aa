use axum::extract::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize)]
pub struct Health {
    status: &'static str,
    timestamp: DateTime<Utc>,
}

/// Liveness only; never touches the store.
pub async fn check() -> Json<Health> {
    Json(Health {
        status: "healthy",
        timestamp: Utc::now(),
    })
}
