use validator::validate_email;

/// The configured sender address, checked once at startup.
///
/// Only the operator-supplied sender goes through this type. The recipient
/// taken from the request body is a deliberate pass-through: the provider is
/// the one rejecting bad recipients, not us.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SenderEmail(String);

impl SenderEmail {
    pub fn parse(s: String) -> Result<Self, String> {
        if validate_email(&s) {
            Ok(Self(s))
        } else {
            Err(format!("{} is not a valid email address.", s))
        }
    }
}

impl AsRef<str> for SenderEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SenderEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
