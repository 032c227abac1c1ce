use axum::http::StatusCode;
use axum::response::Response;

use litecatalog_auth::{require_role, Role};

use crate::app::errors::json_error;
use crate::context::PrincipalContext;

/// Gate for catalog mutations. Reads are open to any authenticated role.
pub fn require_admin(principal: &PrincipalContext) -> Result<(), Response> {
    require_role(principal.roles(), Role::Admin)
        .map_err(|e| json_error(StatusCode::FORBIDDEN, "forbidden", &e.to_string()))
}
