use crate::config::SmtpConfig;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::{debug, warn};

pub trait Notifier: Send + Sync {
    /// Fire-and-forget; failures are logged and swallowed.
    fn notify(&self, subject: &str, body: &str);
}

pub struct EmailNotifier {
    smtp: Option<SmtpConfig>,
    recipients: Vec<String>,
}

impl EmailNotifier {
    pub fn new(smtp: Option<SmtpConfig>, recipients: Vec<String>) -> Self {
        Self { smtp, recipients }
    }

    fn send(&self, subject: &str, body: &str) -> std::result::Result<(), String> {
        let smtp = self
            .smtp
            .as_ref()
            .ok_or_else(|| "SMTP credentials are not configured".to_string())?;
        if self.recipients.is_empty() {
            return Err("no notification recipients configured".to_string());
        }

        let from: Mailbox = smtp
            .smtp_username
            .parse()
            .map_err(|e| format!("invalid sender address {}: {}", smtp.smtp_username, e))?;

        let mut builder = Message::builder().from(from).subject(subject);
        for recipient in &self.recipients {
            let to: Mailbox = recipient
                .parse()
                .map_err(|e| format!("invalid recipient address {}: {}", recipient, e))?;
            builder = builder.to(to);
        }
        let message = builder
            .body(body.to_string())
            .map_err(|e| format!("failed to build message: {}", e))?;

        let transport = SmtpTransport::starttls_relay(&smtp.smtp_server)
            .map_err(|e| format!("invalid SMTP relay {}: {}", smtp.smtp_server, e))?
            .port(smtp.smtp_port)
            .credentials(Credentials::new(
                smtp.smtp_username.clone(),
                smtp.smtp_password.clone(),
            ))
            .build();

        transport
            .send(&message)
            .map(|_| ())
            .map_err(|e| format!("SMTP send failed: {}", e))
    }
}

impl Notifier for EmailNotifier {
    fn notify(&self, subject: &str, body: &str) {
        match self.send(subject, body) {
            Ok(()) => debug!("Notification sent: {}", subject),
            Err(reason) => warn!("Could not send notification '{}': {}", subject, reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_swallows_missing_credentials() {
        let notifier = EmailNotifier::new(None, vec!["ops@example.com".to_string()]);
        notifier.notify("Backup Successful", "body");
    }

    #[test]
    fn test_notify_swallows_empty_recipient_list() {
        let smtp = SmtpConfig {
            smtp_server: "smtp.example.com".to_string(),
            smtp_port: 587,
            smtp_username: "backup@example.com".to_string(),
            smtp_password: "secret".to_string(),
        };
        let notifier = EmailNotifier::new(Some(smtp), vec![]);
        notifier.notify("Backup Successful", "body");
    }

    #[test]
    fn test_notify_swallows_malformed_recipient() {
        let smtp = SmtpConfig {
            smtp_server: "smtp.example.com".to_string(),
            smtp_port: 587,
            smtp_username: "backup@example.com".to_string(),
            smtp_password: "secret".to_string(),
        };
        let notifier = EmailNotifier::new(Some(smtp), vec!["not an address".to_string()]);
        notifier.notify("Backup Failed", "body");
    }
}
