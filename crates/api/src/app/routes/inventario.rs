use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use litecatalog_report::ReportOutcome;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/empresa/:nit/pdf", get(empresa_pdf))
}

/// Without `?email=` the rendered PDF comes back as a download; with it,
/// sending is initiated and the response is an acknowledgment only.
pub async fn empresa_pdf(
    Extension(services): Extension<Arc<AppServices>>,
    Path(nit): Path<String>,
    Query(query): Query<dto::InventarioQuery>,
) -> axum::response::Response {
    let email = query
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty());

    match services.inventory.generate(&nit, email) {
        Ok(ReportOutcome::Document { filename, bytes }) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "application/pdf".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{filename}\""),
                ),
            ],
            bytes,
        )
            .into_response(),
        Ok(ReportOutcome::Dispatched(ack)) => (StatusCode::OK, Json(ack)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
