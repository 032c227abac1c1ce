//! `litecatalog-application` — use cases orchestrating validation and
//! repository calls.
//!
//! This is the only layer where cross-entity business rules live (existence
//! checks, uniqueness). Entities validate their own fields; storage enforces
//! its constraints underneath.

pub mod company;
pub mod product;

pub use company::{CompanyUpdate, CompanyUseCases};
pub use product::ProductUseCases;
