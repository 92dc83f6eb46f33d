// Wire types for the provider's `POST /v3/mail/send` payload
use crate::domain::sender_email::SenderEmail;

#[derive(serde::Serialize)]
pub struct FromEmailRequest {
    email: SenderEmail
}

impl FromEmailRequest {
    pub fn new(email: SenderEmail) -> Self {
        Self { email }
    }
}

#[derive(serde::Serialize)]
pub struct ToEmailRequest {
    email: String,
}

impl ToEmailRequest {
    pub fn new(email: String) -> Self {
        Self { email }
    }
}

// The provider groups recipients per "personalization"; we only ever send
// to a single recipient, so there is exactly one entry with one address
#[derive(serde::Serialize)]
pub struct Personalization {
    to: Vec<ToEmailRequest>,
}

impl Personalization {
    pub fn new(to: Vec<ToEmailRequest>) -> Self {
        Self { to }
    }
}

#[derive(serde::Serialize)]
pub struct ContentPart {
    // `type` is a reserved word in Rust, rename it on the wire
    #[serde(rename = "type")]
    pub content_type: String,
    pub value: String
}

#[derive(serde::Serialize)]
pub struct SendEmailRequest {
    pub personalizations: Vec<Personalization>,
    pub from: FromEmailRequest,
    pub subject: String,
    pub content: Vec<ContentPart>
}
