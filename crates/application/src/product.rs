use std::sync::Arc;

use rust_decimal::Decimal;

use litecatalog_catalog::{CompanyRepository, Currency, Price, Product, ProductRepository};
use litecatalog_core::{DomainError, DomainResult};

/// Product lifecycle use cases.
///
/// Holds both repositories: creating a product checks that the owning
/// company exists.
#[derive(Clone)]
pub struct ProductUseCases {
    products: Arc<dyn ProductRepository>,
    companies: Arc<dyn CompanyRepository>,
}

impl ProductUseCases {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        companies: Arc<dyn CompanyRepository>,
    ) -> Self {
        Self {
            products,
            companies,
        }
    }

    /// Create a product with an empty price list.
    ///
    /// Fails with `Duplicate` if the code is taken and with `Validation`
    /// ("no such company") if the owning company does not resolve.
    pub fn create(
        &self,
        code: &str,
        name: &str,
        company_nit: &str,
        features: Option<String>,
    ) -> DomainResult<Product> {
        if !self.companies.exists(company_nit)? {
            return Err(DomainError::validation(format!(
                "no such company: {company_nit}"
            )));
        }

        let product = Product::new(code, name, company_nit, features)?;
        let product = self.products.create(product)?;
        tracing::info!(code = %product.code(), owner = %product.company_nit(), "product created");
        Ok(product)
    }

    pub fn get(&self, code: &str) -> DomainResult<Option<Product>> {
        self.products.find_by_code(code)
    }

    /// All products, or only those owned by `company_nit` when supplied.
    pub fn list(&self, company_nit: Option<&str>) -> DomainResult<Vec<Product>> {
        match company_nit {
            Some(nit) => self.products.list_by_company(nit),
            None => self.products.list_all(),
        }
    }

    /// Upsert a price by currency and persist the whole product, so the
    /// stored price collection always mirrors the entity exactly.
    pub fn add_price(
        &self,
        code: &str,
        currency: Currency,
        amount: Decimal,
    ) -> DomainResult<Product> {
        let mut product = self
            .products
            .find_by_code(code)?
            .ok_or(DomainError::NotFound)?;

        let price = Price::new(currency, amount)?;
        product.upsert_price(price);

        self.products.save(product)
    }

    pub fn delete(&self, code: &str) -> DomainResult<bool> {
        self.products.delete(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use litecatalog_catalog::Company;
    use litecatalog_infra::memory::MemoryCatalog;

    struct Fixture {
        products: ProductUseCases,
        companies: Arc<dyn CompanyRepository>,
    }

    fn fixture() -> Fixture {
        let (companies, products) = MemoryCatalog::new();
        let companies: Arc<dyn CompanyRepository> = Arc::new(companies);
        let products: Arc<dyn ProductRepository> = Arc::new(products);
        Fixture {
            products: ProductUseCases::new(products, Arc::clone(&companies)),
            companies,
        }
    }

    fn seed_company(companies: &Arc<dyn CompanyRepository>) {
        companies
            .save(Company::new("900123456", "Acme", "Calle 1", "3000000000").unwrap())
            .unwrap();
    }

    #[test]
    fn create_requires_an_existing_company() {
        let fx = fixture();
        let err = fx
            .products
            .create("PROD-001", "Widget", "999999999", None)
            .unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("no such company")),
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn create_rejects_duplicate_code() {
        let fx = fixture();
        seed_company(&fx.companies);
        fx.products
            .create("PROD-001", "Widget", "900123456", None)
            .unwrap();
        let err = fx
            .products
            .create("PROD-001", "Other", "900123456", None)
            .unwrap_err();
        assert!(matches!(err, DomainError::Duplicate(_)));
    }

    #[test]
    fn create_returns_product_with_empty_price_list() {
        let fx = fixture();
        seed_company(&fx.companies);
        let product = fx
            .products
            .create("PROD-001", "Widget", "900123456", Some("blue".to_string()))
            .unwrap();
        assert!(product.prices().is_empty());
        assert_eq!(product.features(), "blue");
    }

    #[test]
    fn list_filters_by_owner_when_requested() {
        let fx = fixture();
        seed_company(&fx.companies);
        fx.companies
            .save(Company::new("800000001", "Beta", "Calle 9", "3111111111").unwrap())
            .unwrap();

        fx.products
            .create("PROD-001", "Widget", "900123456", None)
            .unwrap();
        fx.products
            .create("PROD-002", "Gadget", "800000001", None)
            .unwrap();

        assert_eq!(fx.products.list(None).unwrap().len(), 2);
        let owned = fx.products.list(Some("900123456")).unwrap();
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].code(), "PROD-001");
    }

    #[test]
    fn add_price_is_last_write_wins_per_currency() {
        let fx = fixture();
        seed_company(&fx.companies);
        fx.products
            .create("PROD-001", "Widget", "900123456", None)
            .unwrap();

        fx.products
            .add_price("PROD-001", Currency::Usd, "19.99".parse().unwrap())
            .unwrap();
        fx.products
            .add_price("PROD-001", Currency::Usd, "24.99".parse().unwrap())
            .unwrap();

        let stored = fx.products.get("PROD-001").unwrap().unwrap();
        assert_eq!(stored.prices().len(), 1);
        assert_eq!(
            stored.price_for(Currency::Usd).unwrap().amount().to_string(),
            "24.99"
        );
    }

    #[test]
    fn add_price_fails_for_unknown_product() {
        let fx = fixture();
        let err = fx
            .products
            .add_price("missing", Currency::Usd, "19.99".parse().unwrap())
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn add_price_rejects_invalid_amounts_without_persisting() {
        let fx = fixture();
        seed_company(&fx.companies);
        fx.products
            .create("PROD-001", "Widget", "900123456", None)
            .unwrap();

        let err = fx
            .products
            .add_price("PROD-001", Currency::Usd, "-1.00".parse().unwrap())
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let stored = fx.products.get("PROD-001").unwrap().unwrap();
        assert!(stored.prices().is_empty());
    }

    #[test]
    fn delete_reports_whether_a_row_was_removed() {
        let fx = fixture();
        seed_company(&fx.companies);
        fx.products
            .create("PROD-001", "Widget", "900123456", None)
            .unwrap();
        assert!(fx.products.delete("PROD-001").unwrap());
        assert!(!fx.products.delete("PROD-001").unwrap());
    }

    #[test]
    fn company_with_products_cannot_be_deleted() {
        let fx = fixture();
        seed_company(&fx.companies);
        fx.products
            .create("PROD-001", "Widget", "900123456", None)
            .unwrap();

        let err = fx.companies.delete("900123456").unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        fx.products.delete("PROD-001").unwrap();
        assert!(fx.companies.delete("900123456").unwrap());
    }
}
