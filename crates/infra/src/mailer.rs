//! Mail adapters behind the [`Mailer`] port.

use anyhow::Context;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use litecatalog_report::{Mailer, OutgoingMail};

/// SMTP settings resolved once at process start.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from: String,
}

/// Synchronous SMTP delivery via STARTTLS.
pub struct SmtpMailer {
    transport: SmtpTransport,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> anyhow::Result<Self> {
        let from: Mailbox = config
            .from
            .parse()
            .with_context(|| format!("invalid sender address: {}", config.from))?;

        let transport = SmtpTransport::starttls_relay(&config.host)
            .with_context(|| format!("invalid smtp relay: {}", config.host))?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self { transport, from })
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, mail: &OutgoingMail) -> anyhow::Result<()> {
        let to: Mailbox = mail
            .to
            .parse()
            .with_context(|| format!("invalid recipient address: {}", mail.to))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(mail.subject.clone())
            .multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::plain(mail.body.clone()))
                    .singlepart(
                        Attachment::new(mail.attachment_name.clone()).body(
                            mail.attachment.clone(),
                            ContentType::parse("application/pdf")?,
                        ),
                    ),
            )
            .context("failed to build mail message")?;

        self.transport
            .send(&message)
            .context("smtp delivery failed")?;

        Ok(())
    }
}

/// Fallback used when SMTP is not configured: logs and drops the message so
/// the rest of the report flow stays exercisable in development.
#[derive(Debug, Default, Clone)]
pub struct NoopMailer;

impl Mailer for NoopMailer {
    fn send(&self, mail: &OutgoingMail) -> anyhow::Result<()> {
        tracing::warn!(
            to = %mail.to,
            subject = %mail.subject,
            attachment = %mail.attachment_name,
            bytes = mail.attachment.len(),
            "smtp not configured; dropping outgoing mail"
        );
        Ok(())
    }
}
