//! `litecatalog-report` — inventory report assembly and delivery.
//!
//! The service composes company + product data into a structured document,
//! hands it to a rendering collaborator, and either returns the bytes to the
//! caller or dispatches them by email. Email dispatch is fire-and-forget:
//! the caller is acknowledged when sending is *initiated*, never when it
//! succeeds.

pub mod document;
pub mod email;
pub mod inventory;
pub mod ports;

pub use document::{ReportBody, ReportDocument, ReportTable};
pub use inventory::{DeliveryMode, InventoryReportService, ReportAck, ReportOutcome};
pub use ports::{Mailer, OutgoingMail, ReportRenderer};
