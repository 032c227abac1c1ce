use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_producto).get(list_productos))
        .route("/:codigo", get(get_producto).delete(delete_producto))
        .route("/:codigo/precios", post(add_precio))
}

#[derive(Debug, Deserialize, Default)]
pub struct ListQuery {
    pub empresa_nit: Option<String>,
}

pub async fn create_producto(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Json(body): Json<dto::ProductoRequest>,
) -> axum::response::Response {
    if let Err(resp) = crate::authz::require_admin(&principal) {
        return resp;
    }

    if !dto::codigo_has_expected_shape(&body.codigo) {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "codigo must be letters, a dash, then digits (e.g. PROD-001)",
        );
    }

    match services.products.create(
        &body.codigo,
        &body.nombre,
        &body.empresa_nit,
        body.caracteristicas,
    ) {
        Ok(product) => {
            (StatusCode::CREATED, Json(dto::producto_to_json(&product))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_productos(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<ListQuery>,
) -> axum::response::Response {
    match services.products.list(query.empresa_nit.as_deref()) {
        Ok(products) => {
            let items = products
                .iter()
                .map(dto::producto_to_json)
                .collect::<Vec<_>>();
            (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_producto(
    Extension(services): Extension<Arc<AppServices>>,
    Path(codigo): Path<String>,
) -> axum::response::Response {
    match services.products.get(&codigo) {
        Ok(Some(product)) => (StatusCode::OK, Json(dto::producto_to_json(&product))).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "producto not found"),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_producto(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(codigo): Path<String>,
) -> axum::response::Response {
    if let Err(resp) = crate::authz::require_admin(&principal) {
        return resp;
    }

    match services.products.delete(&codigo) {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "producto not found"),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn add_precio(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(codigo): Path<String>,
    Json(body): Json<dto::PrecioRequest>,
) -> axum::response::Response {
    if let Err(resp) = crate::authz::require_admin(&principal) {
        return resp;
    }

    let currency = match errors::parse_currency(&body.moneda) {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    match services.products.add_price(&codigo, currency, body.valor) {
        Ok(product) => (StatusCode::OK, Json(dto::producto_to_json(&product))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
