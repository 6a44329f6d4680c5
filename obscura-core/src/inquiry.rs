//! The inquiry submission flow: validate, compose, dispatch.

use obscura_model::InquiryRequest;
use thiserror::Error;
use tracing::info;

use crate::mail::{MailError, MailTransport, notification};

/// Why an inquiry submission was rejected.
#[derive(Error, Debug)]
pub enum InquiryError {
    /// Required form fields were absent or blank; nothing was sent.
    #[error("missing required fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },

    /// The mail account is not configured; nothing was sent.
    #[error("mail transport is not configured")]
    Misconfigured,

    /// The transport accepted the message but delivery failed.
    #[error("{0}")]
    Delivery(#[from] MailError),
}

/// Run one inquiry through the submission flow.
///
/// Exactly one delivery attempt on the happy path; every rejection happens
/// before the transport is touched. A double-submit therefore produces two
/// emails, which is accepted for this low-volume form.
pub async fn dispatch_inquiry(
    mailer: Option<&dyn MailTransport>,
    inquiry: &InquiryRequest,
    studio_name: &str,
) -> Result<(), InquiryError> {
    let fields = inquiry.missing_fields();
    if !fields.is_empty() {
        return Err(InquiryError::MissingFields { fields });
    }

    let Some(mailer) = mailer else {
        return Err(InquiryError::Misconfigured);
    };

    let mail = notification::inquiry_notification(inquiry, studio_name);
    mailer.send(&mail).await?;

    info!(
        event_type = %inquiry.event_type,
        date = %inquiry.date,
        "inquiry notification delivered"
    );
    Ok(())
}
