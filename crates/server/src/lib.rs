//! Textbrief HTTP server
//!
//! Actix-web REST API exposing the summarization and health endpoints

mod routes;
mod state;
mod types;

pub use state::AppState;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::DefaultHeaders;
use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_actix_web::TracingLogger;

use textbrief_common::{AppConfig, Result, TextBriefError};

/// Start the HTTP server with the given configuration
pub async fn start_server(config: AppConfig) -> Result<()> {
    let bind_address = config.server_bind_address();
    let state = Arc::new(AppState::new(config)?);
    let data = web::Data::new(state);

    info!("Starting HTTP server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("X-Frame-Options", "DENY"))
                    .add(("X-XSS-Protection", "1; mode=block")),
            )
            .service(
                web::scope("/api/v1")
                    .service(routes::summarize::summarize)
                    .service(routes::health::health),
            )
    })
    .bind(&bind_address)
    .map_err(|e| TextBriefError::config(format!("Failed to bind {}: {}", bind_address, e)))?
    .run()
    .await?;

    Ok(())
}
