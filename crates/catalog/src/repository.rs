//! Repository ports for the catalog aggregates.
//!
//! Abstract persistence contracts only — no business logic. Implementations
//! must guarantee the unique-key constraints (company nit, product code) and
//! the company→product referential protection described on the entities.

use litecatalog_core::DomainResult;

use crate::{Company, Product};

/// Persistence port for [`Company`].
pub trait CompanyRepository: Send + Sync {
    /// Insert-only: fails with `DomainError::Duplicate` if the nit is already
    /// taken. The check-and-insert must be atomic, so two racing creates on
    /// the same nit see exactly one success.
    fn create(&self, company: Company) -> DomainResult<Company>;

    /// Insert or update, returning the stored entity (post read-back, so
    /// storage-side normalization is visible to callers).
    fn save(&self, company: Company) -> DomainResult<Company>;

    fn find_by_nit(&self, nit: &str) -> DomainResult<Option<Company>>;

    /// All companies, in storage-defined order.
    fn list_all(&self) -> DomainResult<Vec<Company>>;

    /// Returns whether a row was removed (`false` = not found).
    ///
    /// Must fail with `DomainError::Conflict` while products still reference
    /// the company (referential protection).
    fn delete(&self, nit: &str) -> DomainResult<bool>;

    fn exists(&self, nit: &str) -> DomainResult<bool>;
}

/// Persistence port for [`Product`].
pub trait ProductRepository: Send + Sync {
    /// Insert-only: fails with `DomainError::Duplicate` if the code is
    /// already taken. Atomic, like [`CompanyRepository::create`].
    fn create(&self, product: Product) -> DomainResult<Product>;

    /// Insert or update the product **including its full price collection**.
    /// Price rows must be replaced atomically so no stale price for a
    /// removed/replaced currency survives.
    fn save(&self, product: Product) -> DomainResult<Product>;

    fn find_by_code(&self, code: &str) -> DomainResult<Option<Product>>;

    fn list_all(&self) -> DomainResult<Vec<Product>>;

    fn list_by_company(&self, company_nit: &str) -> DomainResult<Vec<Product>>;

    /// Returns whether a row was removed (`false` = not found).
    fn delete(&self, code: &str) -> DomainResult<bool>;

    fn exists(&self, code: &str) -> DomainResult<bool>;
}
