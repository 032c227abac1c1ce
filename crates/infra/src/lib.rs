//! `litecatalog-infra` — concrete adapters behind the domain ports.
//!
//! In-memory catalog stores (one shared state, so referential protection
//! between companies and products holds), a PDF renderer for report
//! documents, and SMTP / no-op mailers.

pub mod mailer;
pub mod memory;
pub mod pdf;

pub use mailer::{NoopMailer, SmtpConfig, SmtpMailer};
pub use memory::{MemoryCatalog, MemoryCompanyStore, MemoryProductStore};
pub use pdf::PdfRenderer;
