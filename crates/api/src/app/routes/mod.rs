use axum::{routing::get, Router};

pub mod empresas;
pub mod inventario;
pub mod productos;
pub mod system;

/// Router for all authenticated endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .nest("/api/empresas", empresas::router())
        .nest("/api/productos", productos::router())
        .nest("/api/inventario", inventario::router())
}
