use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use litecatalog_catalog::Currency;
use litecatalog_core::DomainError;

pub fn json_error(status: StatusCode, code: &str, message: &str) -> Response {
    (
        status,
        Json(serde_json::json!({ "error": code, "message": message })),
    )
        .into_response()
}

pub fn domain_error_to_response(err: DomainError) -> Response {
    match err {
        DomainError::Validation(msg) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", &msg)
        }
        DomainError::Duplicate(msg) => json_error(StatusCode::CONFLICT, "duplicate_key", &msg),
        DomainError::NotFound => {
            json_error(StatusCode::NOT_FOUND, "not_found", "resource not found")
        }
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", &msg),
        DomainError::Unexpected(msg) => {
            tracing::error!(error = %msg, "unexpected domain failure");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "internal error",
            )
        }
    }
}

pub fn parse_currency(raw: &str) -> Result<Currency, Response> {
    raw.parse()
        .map_err(|e: DomainError| domain_error_to_response(e))
}
