use std::net::TcpListener;
use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use crate::configuration::Settings;
use crate::email_client::EmailClient;
use crate::routes::{health_check, send_otp};

/// A built but not yet running server, holding on to the port it bound.
/// Binding port 0 in tests yields a random free port, so the tests need a
/// way to ask which one they got.
pub struct Application {
    port: u16,
    server: Server
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        // The provider client is constructed once at startup and handed to
        // the handlers through the application state, never as a global
        let email_client = configuration.email_client
            .client()
            .map_err(|e| anyhow::anyhow!(e))?;

        let address = format!(
            "{}:{}",
            configuration.application.host,
            configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, email_client)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    email_client: EmailClient
) -> Result<Server, std::io::Error> {

    // using web::Data to wrap the client in smart pointer(Arc)
    // as App required the app_data to implement Clone trait for "T"
    // and in Arc<T> T is clonable, no matter what T is
    let email_client = web::Data::new(email_client);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            // The source served every origin and so do we
            .wrap(Cors::permissive())
            .route("/health_check", web::get().to(health_check))
            .route("/send-otp", web::post().to(send_otp))
            .app_data(email_client.clone())
    })
        .listen(listener)?
        .run();
    // No .await here
    Ok(server)
}
