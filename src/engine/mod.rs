mod analytics_api;
mod helpers;
mod trip_api;

use sqlx::{Pool, Sqlite};

use crate::api::API;

type Database = Sqlite;

/// Read-only query engine over the trip dataset. Every operation acquires
/// its own pooled connection and releases it before returning.
pub struct Engine {
    pool: Pool<Database>,
}

impl Engine {
    pub fn new(pool: Pool<Database>) -> Self {
        Self { pool }
    }
}

impl API for Engine {}
