use axum::extract::rejection::QueryRejection;
use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::fmt::{self, Display};

/// Any failure while coercing parameters, building or running a query, or
/// shaping its rows. Always rendered as a 500 carrying the message.
#[derive(Debug)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        database_error(err)
    }
}

impl From<QueryRejection> for Error {
    fn from(err: QueryRejection) -> Self {
        invalid_input_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!(code = self.code, "request failed: {}", self.message);

        let body = Json(json!({
            "error": self.message,
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

pub fn invalid_input_error<T: Display>(err: T) -> Error {
    Error {
        code: 101,
        message: err.to_string(),
    }
}

pub fn database_error<T: Display>(err: T) -> Error {
    Error {
        code: 2,
        message: err.to_string(),
    }
}
