use serde::{Deserialize, Serialize};

use litecatalog_core::{DomainError, DomainResult, Entity};

/// Aggregate root: a tenant company ("empresa"), identified by its tax id
/// (nit).
///
/// # Invariants
/// - All four fields are non-blank after trimming, at all times.
/// - `nit` ≤ 20 chars, `name` and `address` ≤ 255 chars, `phone` ≤ 30 chars.
///
/// Construction and every mutator re-run the corresponding field's
/// validation, so an instance can never hold an invalid field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    nit: String,
    name: String,
    address: String,
    phone: String,
}

impl Company {
    pub fn new(
        nit: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> DomainResult<Self> {
        let nit = nit.into();
        let name = name.into();
        let address = address.into();
        let phone = phone.into();

        validate_nit(&nit)?;
        validate_name(&name)?;
        validate_address(&address)?;
        validate_phone(&phone)?;

        Ok(Self {
            nit,
            name,
            address,
            phone,
        })
    }

    pub fn nit(&self) -> &str {
        &self.nit
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn update_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    pub fn update_address(&mut self, address: impl Into<String>) -> DomainResult<()> {
        let address = address.into();
        validate_address(&address)?;
        self.address = address;
        Ok(())
    }

    pub fn update_phone(&mut self, phone: impl Into<String>) -> DomainResult<()> {
        let phone = phone.into();
        validate_phone(&phone)?;
        self.phone = phone;
        Ok(())
    }
}

impl Entity for Company {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.nit
    }
}

/// Equality by identity (`nit`) alone.
impl PartialEq for Company {
    fn eq(&self, other: &Self) -> bool {
        self.nit == other.nit
    }
}

impl Eq for Company {}

impl core::hash::Hash for Company {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.nit.hash(state);
    }
}

fn validate_nit(nit: &str) -> DomainResult<()> {
    if nit.trim().is_empty() {
        return Err(DomainError::validation("nit is required"));
    }
    if nit.chars().count() > 20 {
        return Err(DomainError::validation("nit must not exceed 20 characters"));
    }
    Ok(())
}

fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("company name is required"));
    }
    if name.chars().count() > 255 {
        return Err(DomainError::validation(
            "company name must not exceed 255 characters",
        ));
    }
    Ok(())
}

fn validate_address(address: &str) -> DomainResult<()> {
    if address.trim().is_empty() {
        return Err(DomainError::validation("address is required"));
    }
    if address.chars().count() > 255 {
        return Err(DomainError::validation(
            "address must not exceed 255 characters",
        ));
    }
    Ok(())
}

fn validate_phone(phone: &str) -> DomainResult<()> {
    if phone.trim().is_empty() {
        return Err(DomainError::validation("phone is required"));
    }
    if phone.chars().count() > 30 {
        return Err(DomainError::validation(
            "phone must not exceed 30 characters",
        ));
    }
    Ok(())
}
