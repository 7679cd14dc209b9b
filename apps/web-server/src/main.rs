//! # Vellum Web Server
//!
//! The main entry point for the server-rendered blog application.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use vellum_core::ports::{Mailer, PasswordService, SessionTokenService};
use vellum_infra::{LogMailer, Pbkdf2PasswordService, SignedSessionService};

mod config;
mod flash;
mod handlers;
mod middleware;
mod state;
#[cfg(test)]
mod test_support;
mod views;

use config::AppConfig;
use state::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Vellum web server on {}:{}",
        config.host,
        config.port
    );

    // Connect the store, bootstrap the schema, build shared state
    let state = AppState::new(&config.database).await?;
    let passwords: Arc<dyn PasswordService> = Arc::new(Pbkdf2PasswordService::new());
    let sessions: Arc<dyn SessionTokenService> = Arc::new(SignedSessionService::from_env());
    let mailer: Arc<dyn Mailer> = Arc::new(LogMailer);

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(passwords.clone()))
            .app_data(web::Data::new(sessions.clone()))
            .app_data(web::Data::new(mailer.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,web_server=debug,vellum_infra=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}
