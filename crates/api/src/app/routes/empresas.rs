use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_empresa).get(list_empresas))
        .route(
            "/:nit",
            get(get_empresa).put(update_empresa).delete(delete_empresa),
        )
        .route("/:nit/productos", get(list_empresa_productos))
}

pub async fn create_empresa(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Json(body): Json<dto::EmpresaRequest>,
) -> axum::response::Response {
    if let Err(resp) = crate::authz::require_admin(&principal) {
        return resp;
    }

    match services
        .companies
        .create(&body.nit, &body.nombre, &body.direccion, &body.telefono)
    {
        Ok(company) => {
            (StatusCode::CREATED, Json(dto::empresa_to_json(&company))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_empresas(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.companies.list() {
        Ok(companies) => {
            let items = companies
                .iter()
                .map(dto::empresa_to_json)
                .collect::<Vec<_>>();
            (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_empresa(
    Extension(services): Extension<Arc<AppServices>>,
    Path(nit): Path<String>,
) -> axum::response::Response {
    match services.companies.get(&nit) {
        Ok(Some(company)) => (StatusCode::OK, Json(dto::empresa_to_json(&company))).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "empresa not found"),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_empresa(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(nit): Path<String>,
    Json(body): Json<dto::UpdateEmpresaRequest>,
) -> axum::response::Response {
    if let Err(resp) = crate::authz::require_admin(&principal) {
        return resp;
    }

    let update = litecatalog_application::CompanyUpdate {
        name: body.nombre,
        address: body.direccion,
        phone: body.telefono,
    };

    match services.companies.update(&nit, update) {
        Ok(company) => (StatusCode::OK, Json(dto::empresa_to_json(&company))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_empresa(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(nit): Path<String>,
) -> axum::response::Response {
    if let Err(resp) = crate::authz::require_admin(&principal) {
        return resp;
    }

    match services.companies.delete(&nit) {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "empresa not found"),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_empresa_productos(
    Extension(services): Extension<Arc<AppServices>>,
    Path(nit): Path<String>,
) -> axum::response::Response {
    match services.companies.get(&nit) {
        Ok(Some(_)) => {}
        Ok(None) => {
            return errors::json_error(StatusCode::NOT_FOUND, "not_found", "empresa not found")
        }
        Err(e) => return errors::domain_error_to_response(e),
    }

    match services.products.list(Some(&nit)) {
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
