use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use litecatalog_core::{DomainError, DomainResult, Entity, ValueObject};

/// Closed set of currencies a product price can be denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Cop,
    Usd,
    Eur,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Cop, Currency::Usd, Currency::Eur];

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Cop => "COP",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    /// Human-readable display name.
    pub fn description(&self) -> &'static str {
        match self {
            Currency::Cop => "Peso colombiano",
            Currency::Usd => "Dólar",
            Currency::Eur => "Euro",
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "COP" => Ok(Currency::Cop),
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            other => Err(DomainError::validation(format!(
                "unknown currency: {other}"
            ))),
        }
    }
}

/// Largest representable amount: 12 integer digits, scale 2.
fn max_amount() -> Decimal {
    Decimal::new(99_999_999_999_999, 2)
}

/// Value object: a currency-denominated price attached to a product.
///
/// Immutable once constructed; amounts are normalized to scale 2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    currency: Currency,
    amount: Decimal,
}

impl Price {
    pub fn new(currency: Currency, amount: Decimal) -> DomainResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::validation("price must not be negative"));
        }
        if amount > max_amount() {
            return Err(DomainError::validation(
                "price exceeds the maximum allowed value",
            ));
        }
        if amount.scale() > 2 {
            return Err(DomainError::validation(
                "price must have at most 2 decimal places",
            ));
        }
        let mut amount = amount;
        amount.rescale(2);
        Ok(Self { currency, amount })
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Produce a new price in `currency`, `amount × rate`, rounded to scale 2.
    /// The source price is left untouched.
    pub fn convert_to(&self, currency: Currency, rate: Decimal) -> DomainResult<Price> {
        Price::new(currency, (self.amount * rate).round_dp(2))
    }
}

impl ValueObject for Price {}

/// Aggregate root: a catalog product owned by exactly one company.
///
/// # Invariants
/// - `code` ≤ 50 chars and `name` ≤ 255 chars, both non-blank.
/// - `company_nit` is non-blank; whether it resolves to an existing company
///   is checked by the use case, not here.
/// - `prices` holds at most one entry per currency; adding a price for a
///   currency already present replaces the old entry (last write wins).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    code: String,
    name: String,
    company_nit: String,
    #[serde(default)]
    features: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    prices: Vec<Price>,
}

impl Product {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        company_nit: impl Into<String>,
        features: Option<String>,
    ) -> DomainResult<Self> {
        let code = code.into();
        let name = name.into();
        let company_nit = company_nit.into();

        validate_code(&code)?;
        validate_name(&name)?;
        validate_company_nit(&company_nit)?;

        Ok(Self {
            code,
            name,
            company_nit,
            features: features.unwrap_or_default(),
            description: String::new(),
            prices: Vec::new(),
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn company_nit(&self) -> &str {
        &self.company_nit
    }

    pub fn features(&self) -> &str {
        &self.features
    }

    /// Free text filled by storage round-trip only; no exposed mutator.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn prices(&self) -> &[Price] {
        &self.prices
    }

    /// Upsert by currency: any existing price in the same currency is
    /// replaced, never duplicated.
    pub fn upsert_price(&mut self, price: Price) {
        self.prices.retain(|p| p.currency() != price.currency());
        self.prices.push(price);
    }

    pub fn price_for(&self, currency: Currency) -> Option<&Price> {
        self.prices.iter().find(|p| p.currency() == currency)
    }

    pub fn remove_price(&mut self, currency: Currency) {
        self.prices.retain(|p| p.currency() != currency);
    }

    pub fn update_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    pub fn update_features(&mut self, features: impl Into<String>) {
        self.features = features.into();
    }
}

impl Entity for Product {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.code
    }
}

/// Equality by identity (`code`) alone.
impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Product {}

impl core::hash::Hash for Product {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

fn validate_code(code: &str) -> DomainResult<()> {
    if code.trim().is_empty() {
        return Err(DomainError::validation("product code is required"));
    }
    if code.chars().count() > 50 {
        return Err(DomainError::validation(
            "product code must not exceed 50 characters",
        ));
    }
    Ok(())
}

fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("product name is required"));
    }
    if name.chars().count() > 255 {
        return Err(DomainError::validation(
            "product name must not exceed 255 characters",
        ));
    }
    Ok(())
}

fn validate_company_nit(nit: &str) -> DomainResult<()> {
    if nit.trim().is_empty() {
        return Err(DomainError::validation("company nit is required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn usd(amount: &str) -> Price {
        Price::new(Currency::Usd, amount.parse().unwrap()).unwrap()
    }

    #[test]
    fn price_rejects_negative_amounts() {
        let err = Price::new(Currency::Cop, Decimal::new(-1, 2)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn price_accepts_zero_and_maximum() {
        Price::new(Currency::Cop, Decimal::ZERO).unwrap();
        Price::new(Currency::Cop, "999999999999.99".parse().unwrap()).unwrap();
        assert!(Price::new(Currency::Cop, "1000000000000.00".parse().unwrap()).is_err());
    }

    #[test]
    fn price_normalizes_to_scale_2() {
        let price = Price::new(Currency::Usd, Decimal::new(20, 0)).unwrap();
        assert_eq!(price.amount().to_string(), "20.00");
        assert!(Price::new(Currency::Usd, "19.999".parse().unwrap()).is_err());
    }

    #[test]
    fn convert_to_produces_new_price_without_mutating_source() {
        let source = usd("10.00");
        let converted = source
            .convert_to(Currency::Cop, Decimal::new(4000, 0))
            .unwrap();
        assert_eq!(converted.currency(), Currency::Cop);
        assert_eq!(converted.amount().to_string(), "40000.00");
        assert_eq!(source.amount().to_string(), "10.00");
    }

    #[test]
    fn currency_round_trips_and_describes() {
        for currency in Currency::ALL {
            assert_eq!(currency.as_str().parse::<Currency>().unwrap(), currency);
        }
        assert_eq!(Currency::Cop.description(), "Peso colombiano");
        assert!("GBP".parse::<Currency>().is_err());
    }

    #[test]
    fn new_product_starts_with_empty_prices_and_description() {
        let product = Product::new("PROD-001", "Widget", "900123456", None).unwrap();
        assert!(product.prices().is_empty());
        assert_eq!(product.features(), "");
        assert_eq!(product.description(), "");
    }

    #[test]
    fn new_product_rejects_invalid_fields() {
        assert!(Product::new("", "Widget", "900123456", None).is_err());
        assert!(Product::new("c".repeat(51), "Widget", "900123456", None).is_err());
        assert!(Product::new("PROD-001", "  ", "900123456", None).is_err());
        assert!(Product::new("PROD-001", "Widget", "", None).is_err());
    }

    #[test]
    fn upsert_price_replaces_same_currency() {
        let mut product = Product::new("PROD-001", "Widget", "900123456", None).unwrap();
        product.upsert_price(usd("19.99"));
        product.upsert_price(usd("24.99"));

        assert_eq!(product.prices().len(), 1);
        assert_eq!(
            product.price_for(Currency::Usd).unwrap().amount().to_string(),
            "24.99"
        );
    }

    #[test]
    fn upsert_price_keeps_other_currencies() {
        let mut product = Product::new("PROD-001", "Widget", "900123456", None).unwrap();
        product.upsert_price(usd("19.99"));
        product.upsert_price(Price::new(Currency::Eur, "18.50".parse().unwrap()).unwrap());
        product.upsert_price(usd("24.99"));

        assert_eq!(product.prices().len(), 2);
        assert!(product.price_for(Currency::Eur).is_some());
    }

    #[test]
    fn remove_price_drops_only_that_currency() {
        let mut product = Product::new("PROD-001", "Widget", "900123456", None).unwrap();
        product.upsert_price(usd("19.99"));
        product.upsert_price(Price::new(Currency::Cop, "80000".parse().unwrap()).unwrap());

        product.remove_price(Currency::Usd);
        assert!(product.price_for(Currency::Usd).is_none());
        assert!(product.price_for(Currency::Cop).is_some());
    }

    #[test]
    fn mutators_revalidate() {
        let mut product = Product::new("PROD-001", "Widget", "900123456", None).unwrap();

        assert!(product.update_name("  ").is_err());
        assert!(product.update_name("n".repeat(256)).is_err());
        assert_eq!(product.name(), "Widget");

        product.update_name("Widget v2").unwrap();
        assert_eq!(product.name(), "Widget v2");

        // Features are free text; clearing them is allowed.
        product.update_features("Acero inoxidable");
        assert_eq!(product.features(), "Acero inoxidable");
        product.update_features("");
        assert_eq!(product.features(), "");
    }

    proptest! {
        #[test]
        fn product_accepts_fields_within_bounds(
            code in "[A-Z]{1,10}-[0-9]{1,5}",
            name in "[a-zA-Z0-9 ]{1,255}",
        ) {
            prop_assume!(!name.trim().is_empty());
            prop_assert!(Product::new(code, name, "900123456", None).is_ok());
        }

        #[test]
        fn product_rejects_overlong_codes(pad in 51usize..200) {
            let code = "c".repeat(pad);
            prop_assert!(Product::new(code, "Widget", "900123456", None).is_err());
        }

        #[test]
        fn price_never_holds_out_of_range_amounts(cents in 0i64..=i64::MAX / 2) {
            let amount = Decimal::new(cents, 2);
            match Price::new(Currency::Usd, amount) {
                Ok(price) => prop_assert!(price.amount() <= super::max_amount()),
                Err(DomainError::Validation(_)) => prop_assert!(amount > super::max_amount()),
                Err(other) => prop_assert!(false, "unexpected error: {other:?}"),
            }
        }
    }
}
