use axum::{
    http::{header, HeaderName, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use visitor_core::error::Result;

const CORS_HEADERS: [(HeaderName, &str); 3] = [
    (header::CONTENT_TYPE, "application/json"),
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
];

const PREFLIGHT_HEADERS: [(HeaderName, &str); 3] = [
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
    (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS"),
];

#[derive(Debug, Serialize)]
struct VisitsBody {
    visits: i64,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// 200 `{"visits": n}` or 500 `{"error": "..."}`, CORS headers on both.
pub fn visits_response(result: Result<i64>) -> Response {
    match result {
        Ok(visits) => (StatusCode::OK, CORS_HEADERS, Json(VisitsBody { visits })).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            CORS_HEADERS,
            Json(ErrorBody {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}

/// 204 without a body, shared by OPTIONS and HEAD.
pub fn preflight_response() -> Response {
    (StatusCode::NO_CONTENT, PREFLIGHT_HEADERS).into_response()
}
