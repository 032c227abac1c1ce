//! Wire types. Field names follow the public JSON contract (Spanish),
//! entities keep English names internally.

use rust_decimal::Decimal;
use serde::Deserialize;

use litecatalog_catalog::{Company, Product};

#[derive(Debug, Deserialize)]
pub struct EmpresaRequest {
    pub nit: String,
    pub nombre: String,
    pub direccion: String,
    pub telefono: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct UpdateEmpresaRequest {
    pub nombre: Option<String>,
    pub direccion: Option<String>,
    pub telefono: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProductoRequest {
    pub codigo: String,
    pub nombre: String,
    pub empresa_nit: String,
    pub caracteristicas: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PrecioRequest {
    pub moneda: String,
    pub valor: Decimal,
}

#[derive(Debug, Deserialize, Default)]
pub struct InventarioQuery {
    pub email: Option<String>,
}

/// `PROD-001` shape: an alphabetic prefix, a dash, a numeric suffix.
/// This is a boundary convention only; the entity accepts any non-blank
/// code so other front ends can use their own schemes.
pub fn codigo_has_expected_shape(code: &str) -> bool {
    match code.split_once('-') {
        Some((prefix, digits)) => {
            !prefix.is_empty()
                && prefix.chars().all(|c| c.is_ascii_alphabetic())
                && !digits.is_empty()
                && digits.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

pub fn empresa_to_json(company: &Company) -> serde_json::Value {
    serde_json::json!({
        "nit": company.nit(),
        "nombre": company.name(),
        "direccion": company.address(),
        "telefono": company.phone(),
    })
}

pub fn producto_to_json(product: &Product) -> serde_json::Value {
    let precios: Vec<serde_json::Value> = product
        .prices()
        .iter()
        .map(|p| {
            serde_json::json!({
                "moneda": p.currency().as_str(),
                "valor": p.amount().to_string(),
            })
        })
        .collect();

    serde_json::json!({
        "codigo": product.code(),
        "nombre": product.name(),
        "empresa_nit": product.company_nit(),
        "caracteristicas": product.features(),
        "descripcion": product.description(),
        "precios": precios,
    })
}
