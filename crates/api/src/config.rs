//! Process configuration, resolved once at startup from the environment.

use litecatalog_infra::SmtpConfig;
use litecatalog_report::DeliveryMode;

#[derive(Clone)]
pub struct Config {
    pub bind_addr: String,
    pub jwt_secret: String,
    /// How report emails are dispatched (`REPORT_DELIVERY=inline|detached`).
    pub delivery_mode: DeliveryMode,
    /// `None` selects the no-op mailer (logs and drops).
    pub smtp: Option<SmtpConfig>,
}

impl Config {
    pub fn from_env() -> Self {
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set; using insecure dev default");
            "dev-secret".to_string()
        });

        let delivery_mode = match std::env::var("REPORT_DELIVERY") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "invalid REPORT_DELIVERY; using detached");
                DeliveryMode::Detached
            }),
            Err(_) => DeliveryMode::Detached,
        };

        Self {
            bind_addr,
            jwt_secret,
            delivery_mode,
            smtp: smtp_from_env(),
        }
    }
}

fn smtp_from_env() -> Option<SmtpConfig> {
    let host = std::env::var("SMTP_HOST").ok()?;
    let username = std::env::var("SMTP_USERNAME").ok()?;
    let password = std::env::var("SMTP_PASSWORD").ok()?;
    let from = std::env::var("MAIL_FROM").unwrap_or_else(|_| username.clone());
    let port = std::env::var("SMTP_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(587);

    Some(SmtpConfig {
        host,
        port,
        username,
        password,
        from,
    })
}
