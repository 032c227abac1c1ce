use std::sync::Arc;

use litecatalog_application::{CompanyUseCases, ProductUseCases};
use litecatalog_infra::{MemoryCatalog, NoopMailer, PdfRenderer, SmtpMailer};
use litecatalog_report::{InventoryReportService, Mailer};

use crate::config::Config;

/// Everything the handlers need, wired once at startup and shared via an
/// `Extension<Arc<AppServices>>` layer.
pub struct AppServices {
    pub companies: CompanyUseCases,
    pub products: ProductUseCases,
    pub inventory: InventoryReportService,
}

impl AppServices {
    pub fn from_config(config: &Config) -> Self {
        let (company_store, product_store) = MemoryCatalog::new();
        let company_store = Arc::new(company_store);
        let product_store = Arc::new(product_store);

        let mailer: Arc<dyn Mailer> = match &config.smtp {
            Some(smtp) => match SmtpMailer::new(smtp) {
                Ok(m) => Arc::new(m),
                Err(e) => {
                    tracing::error!(error = %e, "SMTP transport setup failed; mail is disabled");
                    Arc::new(NoopMailer)
                }
            },
            None => {
                tracing::warn!("SMTP not configured; report emails will be logged and dropped");
                Arc::new(NoopMailer)
            }
        };

        let inventory = InventoryReportService::new(
            company_store.clone(),
            product_store.clone(),
            Arc::new(PdfRenderer::new()),
            mailer,
            config.delivery_mode,
        );

        Self {
            companies: CompanyUseCases::new(company_store.clone()),
            products: ProductUseCases::new(product_store, company_store),
            inventory,
        }
    }
}
