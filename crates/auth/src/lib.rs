//! `litecatalog-auth` — authentication/authorization boundary.
//!
//! Token *issuance* lives with an external identity provider; this crate
//! only models claims, validates presented tokens, and checks roles.

pub mod authorize;
pub mod claims;
pub mod principal;
pub mod roles;

pub use authorize::{AuthzError, require_role};
pub use claims::{Hs256JwtValidator, JwtClaims, JwtValidator, TokenError};
pub use principal::PrincipalId;
pub use roles::Role;
