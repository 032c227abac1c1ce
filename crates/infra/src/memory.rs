//! In-memory catalog storage.
//!
//! Both stores share one state behind a single `RwLock`: company deletion
//! must be able to see products (referential protection), and a single
//! writer lock gives the same atomicity a relational transaction would for
//! the whole-product save (prices replaced wholesale, never merged).

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use litecatalog_catalog::{Company, CompanyRepository, Product, ProductRepository};
use litecatalog_core::{DomainError, DomainResult};

#[derive(Debug, Default)]
struct CatalogState {
    companies: BTreeMap<String, Company>,
    products: BTreeMap<String, Product>,
}

type Shared = Arc<RwLock<CatalogState>>;

/// Factory for a linked pair of in-memory stores.
pub struct MemoryCatalog;

impl MemoryCatalog {
    pub fn new() -> (MemoryCompanyStore, MemoryProductStore) {
        let state: Shared = Arc::new(RwLock::new(CatalogState::default()));
        (
            MemoryCompanyStore {
                state: Arc::clone(&state),
            },
            MemoryProductStore { state },
        )
    }
}

#[derive(Clone)]
pub struct MemoryCompanyStore {
    state: Shared,
}

impl CompanyRepository for MemoryCompanyStore {
    fn create(&self, company: Company) -> DomainResult<Company> {
        // Check-and-insert under one write lock: racing creates on the same
        // nit see exactly one success.
        let mut state = write(&self.state)?;
        if state.companies.contains_key(company.nit()) {
            return Err(DomainError::duplicate(format!(
                "a company with nit {} already exists",
                company.nit()
            )));
        }
        state
            .companies
            .insert(company.nit().to_string(), company.clone());
        Ok(company)
    }

    fn save(&self, company: Company) -> DomainResult<Company> {
        let mut state = write(&self.state)?;
        state
            .companies
            .insert(company.nit().to_string(), company.clone());
        Ok(company)
    }

    fn find_by_nit(&self, nit: &str) -> DomainResult<Option<Company>> {
        Ok(read(&self.state)?.companies.get(nit).cloned())
    }

    fn list_all(&self) -> DomainResult<Vec<Company>> {
        Ok(read(&self.state)?.companies.values().cloned().collect())
    }

    fn delete(&self, nit: &str) -> DomainResult<bool> {
        let mut state = write(&self.state)?;
        if !state.companies.contains_key(nit) {
            return Ok(false);
        }
        if state.products.values().any(|p| p.company_nit() == nit) {
            return Err(DomainError::conflict(format!(
                "company {nit} still owns products"
            )));
        }
        Ok(state.companies.remove(nit).is_some())
    }

    fn exists(&self, nit: &str) -> DomainResult<bool> {
        Ok(read(&self.state)?.companies.contains_key(nit))
    }
}

#[derive(Clone)]
pub struct MemoryProductStore {
    state: Shared,
}

impl ProductRepository for MemoryProductStore {
    fn create(&self, product: Product) -> DomainResult<Product> {
        let mut state = write(&self.state)?;
        if state.products.contains_key(product.code()) {
            return Err(DomainError::duplicate(format!(
                "a product with code {} already exists",
                product.code()
            )));
        }
        state
            .products
            .insert(product.code().to_string(), product.clone());
        Ok(product)
    }

    fn save(&self, product: Product) -> DomainResult<Product> {
        // Storing the entity wholesale replaces the full price collection;
        // no stale price row can survive.
        let mut state = write(&self.state)?;
        state
            .products
            .insert(product.code().to_string(), product.clone());
        Ok(product)
    }

    fn find_by_code(&self, code: &str) -> DomainResult<Option<Product>> {
        Ok(read(&self.state)?.products.get(code).cloned())
    }

    fn list_all(&self) -> DomainResult<Vec<Product>> {
        Ok(read(&self.state)?.products.values().cloned().collect())
    }

    fn list_by_company(&self, company_nit: &str) -> DomainResult<Vec<Product>> {
        Ok(read(&self.state)?
            .products
            .values()
            .filter(|p| p.company_nit() == company_nit)
            .cloned()
            .collect())
    }

    fn delete(&self, code: &str) -> DomainResult<bool> {
        Ok(write(&self.state)?.products.remove(code).is_some())
    }

    fn exists(&self, code: &str) -> DomainResult<bool> {
        Ok(read(&self.state)?.products.contains_key(code))
    }
}

fn read(state: &Shared) -> DomainResult<std::sync::RwLockReadGuard<'_, CatalogState>> {
    state
        .read()
        .map_err(|_| DomainError::unexpected("catalog store lock poisoned"))
}

fn write(state: &Shared) -> DomainResult<std::sync::RwLockWriteGuard<'_, CatalogState>> {
    state
        .write()
        .map_err(|_| DomainError::unexpected("catalog store lock poisoned"))
}
