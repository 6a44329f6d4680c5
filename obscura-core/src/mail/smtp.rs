use std::time::Duration;

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use super::{MailError, MailTransport, OutboundEmail};

/// Connection settings for the studio's SMTP account.
///
/// `username` doubles as the From address; `recipient` is the studio inbox
/// inquiries land in. The secret never appears in logs or responses.
#[derive(Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub recipient: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for SmtpSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("recipient", &self.recipient)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Production [`MailTransport`] over implicit-TLS SMTP.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
    timeout: Duration,
}

impl std::fmt::Debug for SmtpMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpMailer")
            .field("from", &self.from)
            .field("to", &self.to)
            .finish_non_exhaustive()
    }
}

impl SmtpMailer {
    pub fn new(settings: &SmtpSettings) -> Result<Self, MailError> {
        let from: Mailbox = settings
            .username
            .parse()
            .map_err(|_| MailError::Message(format!(
                "sender address '{}' is not a valid mailbox",
                settings.username
            )))?;
        let to: Mailbox = settings
            .recipient
            .parse()
            .map_err(|_| MailError::Message(format!(
                "recipient address '{}' is not a valid mailbox",
                settings.recipient
            )))?;

        let transport =
            AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
                .map_err(|err| MailError::Transport(err.to_string()))?
                .port(settings.port)
                .credentials(Credentials::new(
                    settings.username.clone(),
                    settings.password.clone(),
                ))
                .build();

        Ok(Self {
            transport,
            from,
            to,
            timeout: settings.timeout,
        })
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, mail: &OutboundEmail) -> Result<(), MailError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(mail.subject.clone())
            .header(ContentType::TEXT_HTML)
            .body(mail.html_body.clone())
            .map_err(|err| MailError::Message(err.to_string()))?;

        debug!(subject = %mail.subject, "submitting message to smtp relay");

        match tokio::time::timeout(self.timeout, self.transport.send(message))
            .await
        {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(err)) => Err(MailError::Transport(err.to_string())),
            Err(_) => Err(MailError::Timeout(self.timeout)),
        }
    }
}
