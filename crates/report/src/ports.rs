//! Out-of-scope collaborator contracts consumed by the report service.

use crate::document::ReportDocument;

/// Rendering collaborator: turns a structured document description into
/// opaque document bytes (PDF in the shipped adapter).
pub trait ReportRenderer: Send + Sync {
    fn render(&self, document: &ReportDocument) -> anyhow::Result<Vec<u8>>;
}

/// An outbound message with a single binary attachment.
#[derive(Debug, Clone)]
pub struct OutgoingMail {
    pub to: String,
    pub subject: String,
    pub body: String,
    pub attachment_name: String,
    pub attachment: Vec<u8>,
}

/// Mail collaborator: attempts synchronous delivery of one message.
///
/// Failures are surfaced as errors here; whether they reach a caller is the
/// dispatching service's decision (they never do for report delivery).
pub trait Mailer: Send + Sync {
    fn send(&self, mail: &OutgoingMail) -> anyhow::Result<()>;
}
