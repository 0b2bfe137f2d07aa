mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{extract::Extension, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::{DynAPI, API};
use crate::server::handlers::{analytics, health, metrics, trips};

pub fn router(api: DynAPI) -> Router {
    Router::new()
        .route("/api/trips", get(trips::list))
        .route("/api/metrics", get(metrics::summary))
        .route("/api/analytics/trends", get(analytics::trends))
        .route("/api/analytics/vendors", get(analytics::vendors))
        .route("/api/health", get(health::check))
        .layer(Extension(api))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) -> anyhow::Result<()> {
    let api = Arc::new(api) as DynAPI;

    let app = router(api);

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
