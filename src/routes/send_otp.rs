use std::fmt::{Debug, Formatter};
use actix_web::{web, HttpResponse, ResponseError};
use actix_web::http::StatusCode;
use serde_json::json;
use crate::email_client::{EmailClient, EmailClientError};
use crate::routes::error_chain_fmt;

#[derive(serde::Deserialize)]
pub struct OtpRequest {
    recipient: String,
    otp: String
}

/// The single error taxonomy of the endpoint: whatever the upstream
/// provider failed with. Auth failures, bad recipients, quota, network,
/// all of them travel this one path
#[derive(thiserror::Error)]
pub enum DispatchError {
    #[error("Failed to dispatch the OTP email")]
    SendFailed(#[from] EmailClientError)
}

impl Debug for DispatchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for DispatchError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        // The provider's own error detail goes back to the caller verbatim,
        // structured body when there is one, message string otherwise
        match self {
            DispatchError::SendFailed(e) => {
                HttpResponse::build(StatusCode::INTERNAL_SERVER_ERROR)
                    .json(json!({
                        "success": false,
                        "error": e.detail()
                    }))
            }
        }
    }
}

#[tracing::instrument(
    name = "Dispatch an OTP email",
    // The code itself stays out of the span, it is a credential
    skip(body, email_client),
    fields(recipient = %body.recipient)
)]
pub async fn send_otp(
    body: web::Json<OtpRequest>,
    // Retrieving the shared provider client from the application state,
    // the handle is safe for concurrent use so requests stay independent
    email_client: web::Data<EmailClient>
) -> Result<HttpResponse, DispatchError> {
    email_client
        .send_otp_email(&body.recipient, &body.otp)
        .await
        .map_err(|e| {
            tracing::error!(
                error.detail = %e.detail(),
                "Email provider error: {}", e
            );
            e
        })?;

    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}
