use std::time::Duration;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

use crate::domain::sender_email::SenderEmail;
use crate::email_request::{ContentPart, FromEmailRequest, Personalization, SendEmailRequest, ToEmailRequest};

/// A failed dispatch, exactly as the provider reported it.
///
/// The two variants mirror the two ways the upstream call can go wrong:
/// the provider answered with a non-2xx status (and usually a JSON error
/// body), or we never got an answer at all (connect error, timeout).
/// No further classification is performed, every failure is terminal.
#[derive(thiserror::Error, Debug)]
pub enum EmailClientError {
    #[error("The email provider rejected the request with status {status}")]
    Provider {
        status: reqwest::StatusCode,
        body: serde_json::Value
    },
    #[error("Failed to reach the email provider")]
    Transport(#[from] reqwest::Error)
}

impl EmailClientError {
    /// The payload embedded verbatim in the caller-facing error response:
    /// the provider's structured error body when it supplied one,
    /// the error's message string otherwise.
    pub fn detail(&self) -> serde_json::Value {
        match self {
            EmailClientError::Provider { body, .. } => body.clone(),
            EmailClientError::Transport(e) => serde_json::Value::String(e.to_string())
        }
    }
}

pub struct EmailClient {
    http_client: Client,
    base_url: String,
    sender: SenderEmail,
    api_key: Secret<String>
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: SenderEmail,
        api_key: Secret<String>,
        timeout: Duration
    ) -> Self {
        // The source left the upstream call unbounded; a per-request timeout
        // keeps a stuck provider from pinning the handler forever and still
        // surfaces through the same error path as any other failure
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build the reqwest client");
        Self {
            http_client,
            base_url,
            sender,
            api_key
        }
    }

    /// Render the fixed OTP template and hand it to the provider.
    ///
    /// The recipient and the code are forwarded exactly as received, no
    /// escaping and no validation, the provider is the one rejecting bad
    /// addresses. This is the only suspension point of a dispatch.
    pub async fn send_otp_email(
        &self,
        recipient: &str,
        otp: &str
    ) -> Result<(), EmailClientError> {
        let url = format!("{}/v3/mail/send", self.base_url);

        let personalization = Personalization::new(vec![
            ToEmailRequest::new(recipient.to_owned()),
        ]);

        let request_body = SendEmailRequest {
            personalizations: vec![personalization],
            from: FromEmailRequest::new(self.sender.clone()),
            subject: "Your OTP Code".to_owned(),
            content: vec![
                ContentPart {
                    content_type: "text/plain".to_owned(),
                    value: format!("Your one-time password is: {}", otp)
                },
                ContentPart {
                    content_type: "text/html".to_owned(),
                    value: format!("<strong>Your OTP code is: {}</strong>", otp)
                },
            ]
        };

        let response = self.http_client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request_body)
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(());
        }

        // Keep whatever the provider said: its JSON error body when the
        // response parses as JSON, the raw text otherwise
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let body = match serde_json::from_str::<serde_json::Value>(&text) {
            Ok(value) => value,
            Err(_) => serde_json::Value::String(text)
        };

        Err(EmailClientError::Provider { status, body })
    }
}
