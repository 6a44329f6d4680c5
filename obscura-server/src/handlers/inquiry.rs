use axum::{Json, extract::State};
use serde_json::{Value, json};
use tracing::{error, info, warn};
use uuid::Uuid;

use obscura_core::{InquiryError, dispatch_inquiry};
use obscura_model::InquiryRequest;

use crate::infra::{app_state::AppState, errors::AppResult};

/// Accept a booking/contact inquiry and forward it to the studio inbox.
///
/// One delivery attempt per request; rejections (missing fields, absent mail
/// credentials) happen before the transport is touched and come back as
/// structured JSON errors, never a crash.
pub async fn submit_inquiry_handler(
    State(state): State<AppState>,
    Json(inquiry): Json<InquiryRequest>,
) -> AppResult<Json<Value>> {
    let inquiry_id = Uuid::new_v4();
    info!(
        %inquiry_id,
        event_type = %inquiry.event_type,
        "inquiry received"
    );

    match dispatch_inquiry(
        state.mailer.as_deref(),
        &inquiry,
        &state.config.studio_name,
    )
    .await
    {
        Ok(()) => {
            info!(%inquiry_id, "inquiry notification sent");
            Ok(Json(json!({ "message": "Email sent successfully" })))
        }
        Err(err) => {
            match &err {
                InquiryError::MissingFields { fields } => {
                    warn!(
                        %inquiry_id,
                        ?fields,
                        "inquiry rejected: required fields absent"
                    );
                }
                InquiryError::Misconfigured => {
                    error!(
                        %inquiry_id,
                        "inquiry rejected: mail transport is not configured"
                    );
                }
                InquiryError::Delivery(delivery) => {
                    error!(
                        %inquiry_id,
                        error = %delivery,
                        "inquiry notification failed to deliver"
                    );
                }
            }
            Err(err.into())
        }
    }
}
