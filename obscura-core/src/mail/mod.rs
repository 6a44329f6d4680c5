//! Outbound mail port for inquiry notifications.
//!
//! The studio receives one notification email per submitted inquiry. The
//! transport is a trait so the HTTP layer and tests never touch SMTP
//! directly; [`smtp::SmtpMailer`] is the production implementation.

pub mod notification;
pub mod smtp;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// A composed notification ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub subject: String,
    pub html_body: String,
}

/// Failures raised by a mail transport.
#[derive(Error, Debug)]
pub enum MailError {
    #[error("could not build mail message: {0}")]
    Message(String),

    #[error("mail transport failure: {0}")]
    Transport(String),

    #[error("mail dispatch timed out after {0:?}")]
    Timeout(Duration),
}

/// Anything that can deliver a composed notification.
///
/// Exactly one delivery attempt per call; retries and queuing are the
/// caller's concern (and deliberately absent for the inquiry form).
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, mail: &OutboundEmail) -> Result<(), MailError>;
}
