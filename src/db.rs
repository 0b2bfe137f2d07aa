use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

/// Opens a read-only pool over an existing dataset file. The schema is
/// owned by the loader; nothing is created here.
pub async fn connect(db_uri: &str, max_connections: u32) -> Result<Pool<Sqlite>, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(db_uri)?
        .read_only(true)
        .create_if_missing(false);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}
