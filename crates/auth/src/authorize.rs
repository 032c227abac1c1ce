//! Role checks at the request boundary.

use thiserror::Error;

use crate::Role;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("role {0} required")]
    MissingRole(Role),
}

/// Require that `granted` contains `required`.
///
/// The operation→role mapping itself is deployment policy and lives with the
/// HTTP layer; this is only the mechanism.
pub fn require_role(granted: &[Role], required: Role) -> Result<(), AuthzError> {
    if granted.contains(&required) {
        Ok(())
    } else {
        Err(AuthzError::MissingRole(required))
    }
}
