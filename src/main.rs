use secrecy::ExposeSecret;
use otp_backend::configuration::get_configuration;
use otp_backend::startup::Application;
use otp_backend::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {

    // Initializing the subscriber
    let subscriber = get_subscriber("otp_backend".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    // Panic if we can't read the configuration file
    let configuration = get_configuration().expect("Failed to read configuration");

    // Startup diagnostics: confirm the provider credentials made it into the
    // process without printing the key itself
    tracing::info!(
        "API key loaded: {}",
        !configuration.email_client.api_key.expose_secret().is_empty()
    );
    tracing::info!("Sender: {}", configuration.email_client.sender_email);

    let application = Application::build(configuration).await?;
    tracing::info!("Server running on port {}", application.port());

    application.run_until_stopped().await?;
    Ok(())
}
