use core::str::FromStr;
use std::sync::Arc;

use chrono::Local;
use serde::Serialize;

use litecatalog_catalog::{CompanyRepository, ProductRepository};
use litecatalog_core::{DomainError, DomainResult};

use crate::document::inventory_document;
use crate::email::is_valid_email;
use crate::ports::{Mailer, OutgoingMail, ReportRenderer};

/// How report emails are dispatched, resolved once at process start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    /// Send on the request path (the caller still never sees the result).
    Inline,
    /// Spawn onto the blocking pool and return immediately.
    Detached,
}

impl FromStr for DeliveryMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inline" => Ok(DeliveryMode::Inline),
            "detached" => Ok(DeliveryMode::Detached),
            other => Err(DomainError::validation(format!(
                "unknown delivery mode: {other}"
            ))),
        }
    }
}

/// Acknowledgment returned when the report was dispatched by email.
///
/// Carries initiation facts only — never delivery status.
#[derive(Debug, Clone, Serialize)]
pub struct ReportAck {
    pub message: String,
    pub empresa_nit: String,
    pub empresa_nombre: String,
    pub email_destino: String,
    pub total_productos: usize,
    pub fecha_generacion: String,
}

/// Outcome of one report invocation.
#[derive(Debug)]
pub enum ReportOutcome {
    /// No destination email was requested: the rendered bytes go back to the
    /// caller as a downloadable attachment.
    Document { filename: String, bytes: Vec<u8> },
    /// Sending was initiated (not necessarily completed).
    Dispatched(ReportAck),
}

/// Composes company + product data into a rendered report and optionally
/// dispatches it by email.
#[derive(Clone)]
pub struct InventoryReportService {
    companies: Arc<dyn CompanyRepository>,
    products: Arc<dyn ProductRepository>,
    renderer: Arc<dyn ReportRenderer>,
    mailer: Arc<dyn Mailer>,
    mode: DeliveryMode,
}

impl InventoryReportService {
    pub fn new(
        companies: Arc<dyn CompanyRepository>,
        products: Arc<dyn ProductRepository>,
        renderer: Arc<dyn ReportRenderer>,
        mailer: Arc<dyn Mailer>,
        mode: DeliveryMode,
    ) -> Self {
        Self {
            companies,
            products,
            renderer,
            mailer,
            mode,
        }
    }

    /// Generate the inventory report for `nit`.
    ///
    /// With `DeliveryMode::Detached` this must run inside a Tokio runtime;
    /// the dispatch task outlives the call and is never joined.
    pub fn generate(&self, nit: &str, email: Option<&str>) -> DomainResult<ReportOutcome> {
        if let Some(email) = email {
            if !is_valid_email(email) {
                return Err(DomainError::validation(
                    "destination email address is not valid",
                ));
            }
        }

        let company = self
            .companies
            .find_by_nit(nit)?
            .ok_or(DomainError::NotFound)?;

        let products = self.products.list_by_company(nit)?;

        let now = Local::now();
        let file_stamp = now.format("%Y%m%d_%H%M%S").to_string();
        let generated_at = now.format("%d/%m/%Y %H:%M:%S").to_string();

        let document = inventory_document(&company, &products, &generated_at);
        let bytes = self
            .renderer
            .render(&document)
            .map_err(|e| DomainError::unexpected(format!("failed to render report: {e}")))?;

        let filename = format!("inventario_{}_{}.pdf", company.nit(), file_stamp);

        let Some(email) = email else {
            return Ok(ReportOutcome::Document { filename, bytes });
        };

        let ack = ReportAck {
            message: format!("El archivo PDF se está enviando a {email}"),
            empresa_nit: company.nit().to_string(),
            empresa_nombre: company.name().to_string(),
            email_destino: email.to_string(),
            total_productos: products.len(),
            fecha_generacion: generated_at.clone(),
        };

        let mail = OutgoingMail {
            to: email.to_string(),
            subject: format!("Inventario de Productos - {}", company.name()),
            body: format!(
                "Estimado/a,\n\n\
                 Adjunto encontrará el reporte de inventario de productos de la empresa {}.\n\n\
                 Fecha de generación: {}\n\n\
                 Este es un correo automático, por favor no responda.\n\n\
                 Saludos cordiales,\n\
                 Sistema LiteCatalog\n",
                company.name(),
                generated_at,
            ),
            attachment_name: filename,
            attachment: bytes,
        };

        self.dispatch(mail);

        Ok(ReportOutcome::Dispatched(ack))
    }

    /// Fire-and-forget: failures are logged, never surfaced — the caller has
    /// already been acknowledged by the time delivery runs.
    fn dispatch(&self, mail: OutgoingMail) {
        match self.mode {
            DeliveryMode::Inline => {
                deliver(self.mailer.as_ref(), &mail);
            }
            DeliveryMode::Detached => {
                let mailer = Arc::clone(&self.mailer);
                tokio::task::spawn_blocking(move || deliver(mailer.as_ref(), &mail));
            }
        }
    }
}

fn deliver(mailer: &dyn Mailer, mail: &OutgoingMail) {
    tracing::info!(
        to = %mail.to,
        attachment = %mail.attachment_name,
        bytes = mail.attachment.len(),
        "dispatching inventory report email"
    );
    match mailer.send(mail) {
        Ok(()) => tracing::info!(to = %mail.to, "inventory report email sent"),
        Err(e) => tracing::error!(to = %mail.to, error = %e, "inventory report email failed"),
    }
}
