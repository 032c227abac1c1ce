//! `litecatalog-catalog` — catalog domain: companies, products, prices.
//!
//! Entities validate their own fields; cross-entity rules (uniqueness,
//! company existence) belong to the application layer, and referential
//! protection on delete belongs to the storage adapter.

pub mod company;
pub mod product;
pub mod repository;

pub use company::Company;
pub use product::{Currency, Price, Product};
pub use repository::{CompanyRepository, ProductRepository};
