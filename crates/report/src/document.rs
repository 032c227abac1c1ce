//! Structured report document handed to the rendering collaborator.

use litecatalog_catalog::{Company, Product};
use rust_decimal::Decimal;

/// A rendered-format-agnostic document: title, key-value block, and either
/// a table with a summary line or a placeholder notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    pub title: String,
    pub fields: Vec<(String, String)>,
    pub body: ReportBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportBody {
    Table { table: ReportTable, summary: String },
    Notice(String),
}

/// Cells may contain embedded newlines (one price per line).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Assemble the inventory document for one company.
pub fn inventory_document(
    company: &Company,
    products: &[Product],
    generated_at: &str,
) -> ReportDocument {
    let fields = vec![
        ("Empresa".to_string(), company.name().to_string()),
        ("NIT".to_string(), company.nit().to_string()),
        ("Dirección".to_string(), company.address().to_string()),
        ("Teléfono".to_string(), company.phone().to_string()),
        (
            "Fecha de generación".to_string(),
            generated_at.to_string(),
        ),
    ];

    let body = if products.is_empty() {
        ReportBody::Notice("No hay productos registrados para esta empresa.".to_string())
    } else {
        let rows = products
            .iter()
            .map(|product| {
                let prices = if product.prices().is_empty() {
                    "Sin precios".to_string()
                } else {
                    product
                        .prices()
                        .iter()
                        .map(|p| format!("{}: {}", p.currency(), format_amount(p.amount())))
                        .collect::<Vec<_>>()
                        .join("\n")
                };

                vec![
                    product.code().to_string(),
                    product.name().to_string(),
                    truncate_features(product.features()),
                    prices,
                ]
            })
            .collect();

        ReportBody::Table {
            table: ReportTable {
                headers: ["Código", "Nombre", "Características", "Precios"]
                    .map(String::from)
                    .to_vec(),
                rows,
            },
            summary: format!("Total de productos: {}", products.len()),
        }
    };

    ReportDocument {
        title: "Vista de Inventario".to_string(),
        fields,
        body,
    }
}

/// Format an amount with `.` as thousands separator and `,` as decimals
/// (es-CO convention), always two decimal places.
pub fn format_amount(amount: Decimal) -> String {
    let text = amount.round_dp(2).to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }

    format!("{grouped},{frac_part:0<2}")
}

/// Truncate features to 50 characters with an ellipsis; empty becomes "N/A".
pub fn truncate_features(features: &str) -> String {
    if features.is_empty() {
        return "N/A".to_string();
    }
    if features.chars().count() > 50 {
        let head: String = features.chars().take(47).collect();
        format!("{head}...")
    } else {
        features.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use litecatalog_catalog::{Currency, Price};

    fn company() -> Company {
        Company::new("900123456", "Acme", "Calle 1", "3000000000").unwrap()
    }

    #[test]
    fn format_amount_swaps_separators() {
        assert_eq!(format_amount("1234567.89".parse().unwrap()), "1.234.567,89");
        assert_eq!(format_amount("80000".parse().unwrap()), "80.000,00");
        assert_eq!(format_amount("19.99".parse().unwrap()), "19,99");
        assert_eq!(format_amount("0".parse().unwrap()), "0,00");
        assert_eq!(
            format_amount("999999999999.99".parse().unwrap()),
            "999.999.999.999,99"
        );
    }

    #[test]
    fn truncate_features_caps_at_50_chars() {
        assert_eq!(truncate_features(""), "N/A");
        assert_eq!(truncate_features("corta"), "corta");

        let long = "x".repeat(60);
        let truncated = truncate_features(&long);
        assert_eq!(truncated.chars().count(), 50);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn empty_inventory_gets_a_notice_and_no_table() {
        let doc = inventory_document(&company(), &[], "01/01/2026 10:00:00");
        assert_eq!(doc.title, "Vista de Inventario");
        match doc.body {
            ReportBody::Notice(notice) => {
                assert_eq!(notice, "No hay productos registrados para esta empresa.")
            }
            ReportBody::Table { .. } => panic!("expected a notice, got a table"),
        }
    }

    #[test]
    fn table_holds_one_row_per_product_with_prices_per_line() {
        let mut product = Product::new("PROD-001", "Widget", "900123456", None).unwrap();
        product.upsert_price(Price::new(Currency::Usd, "24.99".parse().unwrap()).unwrap());
        product.upsert_price(Price::new(Currency::Cop, "80000".parse().unwrap()).unwrap());

        let doc = inventory_document(&company(), &[product], "01/01/2026 10:00:00");
        let ReportBody::Table { table, summary } = doc.body else {
            panic!("expected a table");
        };

        assert_eq!(summary, "Total de productos: 1");
        assert_eq!(table.rows.len(), 1);
        let row = &table.rows[0];
        assert_eq!(row[0], "PROD-001");
        assert_eq!(row[2], "N/A");
        assert_eq!(row[3], "USD: 24,99\nCOP: 80.000,00");
    }
}
