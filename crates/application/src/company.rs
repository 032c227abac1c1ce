use std::sync::Arc;

use litecatalog_catalog::{Company, CompanyRepository};
use litecatalog_core::{DomainError, DomainResult};

/// Partial update: fields left as `None` keep their current value.
#[derive(Debug, Clone, Default)]
pub struct CompanyUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

/// Company lifecycle use cases.
#[derive(Clone)]
pub struct CompanyUseCases {
    repo: Arc<dyn CompanyRepository>,
}

impl CompanyUseCases {
    pub fn new(repo: Arc<dyn CompanyRepository>) -> Self {
        Self { repo }
    }

    /// Create a company, failing with `Duplicate` if the nit is taken.
    ///
    /// Uniqueness is the storage constraint's job (`create` is insert-only
    /// and atomic), so there is no check-then-insert window here.
    pub fn create(
        &self,
        nit: &str,
        name: &str,
        address: &str,
        phone: &str,
    ) -> DomainResult<Company> {
        let company = Company::new(nit, name, address, phone)?;
        let company = self.repo.create(company)?;
        tracing::info!(nit = %company.nit(), "company created");
        Ok(company)
    }

    /// Absence is not an error here; callers decide what a missing company
    /// means for them.
    pub fn get(&self, nit: &str) -> DomainResult<Option<Company>> {
        self.repo.find_by_nit(nit)
    }

    pub fn list(&self) -> DomainResult<Vec<Company>> {
        self.repo.list_all()
    }

    /// Apply only the supplied fields through the entity's re-validating
    /// mutators, then persist.
    pub fn update(&self, nit: &str, update: CompanyUpdate) -> DomainResult<Company> {
        let mut company = self
            .repo
            .find_by_nit(nit)?
            .ok_or(DomainError::NotFound)?;

        if let Some(name) = update.name {
            company.update_name(name)?;
        }
        if let Some(address) = update.address {
            company.update_address(address)?;
        }
        if let Some(phone) = update.phone {
            company.update_phone(phone)?;
        }

        self.repo.save(company)
    }

    /// Returns whether a row was removed. Referential protection (products
    /// still owned by the company) surfaces as `Conflict` from storage.
    pub fn delete(&self, nit: &str) -> DomainResult<bool> {
        let removed = self.repo.delete(nit)?;
        if removed {
            tracing::info!(nit, "company deleted");
        }
        Ok(removed)
    }
}
