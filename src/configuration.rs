use secrecy::Secret;
use serde_aux::field_attributes::deserialize_number_from_string;
use crate::domain::sender_email::SenderEmail;
use crate::email_client::EmailClient;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    // Environment variables come in as strings, so the port needs the
    // serde-aux helper to be picked up from `APP__APPLICATION__PORT`
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16
}

/// Settings for the upstream transactional-email provider.
///
/// The API key is wrapped in [`Secret`], which attempts to limit
/// accidental exposure and ensure secrets are wiped from memory when dropped.
/// Access to the inner value occurs through the `ExposeSecret` trait,
/// `expose_secret()` method for accessing the inner secret.
#[derive(serde::Deserialize, Clone)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender_email: String,
    pub api_key: Secret<String>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64
}

impl EmailClientSettings {
    /// Build the provider client out of the settings.
    /// The sender address is the one operator-supplied field we do validate,
    /// a bad value here would fail every single dispatch.
    pub fn client(self) -> Result<EmailClient, String> {
        let sender = self.sender()?;
        let timeout = self.timeout();
        Ok(EmailClient::new(
            self.base_url,
            sender,
            self.api_key,
            timeout
        ))
    }

    pub fn sender(&self) -> Result<SenderEmail, String> {
        SenderEmail::parse(self.sender_email.clone())
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let mut settings = config::Config::default();

    // Add configuration values from a file named configuration
    // It will look for any top level file with an extension
    // that `config` knows how to parse: yaml, json, etc.
    settings.merge(config::File::with_name("configuration"))?;

    // Layer environment variables on top (e.g. `APP__EMAIL_CLIENT__API_KEY`)
    // so the API key never has to live in the checked-in file
    settings.merge(config::Environment::with_prefix("app").separator("__"))?;

    // Try to convert the configuration values it read into our "Settings" type
    settings.try_into()
}
