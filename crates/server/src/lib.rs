//! BlogMentor HTTP Server
//!
//! Actix-web 기반 단일 페이지 + JSON API 서버

mod routes;
mod state;
mod types;

pub use routes::generate::GENERATION_ERROR_MESSAGE;
pub use state::AppState;
pub use types::{GenerateReply, GenerateTopicRequest, HealthReply};

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{web, App, HttpServer};
use blogmentor_common::{AppConfig, Result};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

/// Start the HTTP server (runs until shutdown)
pub async fn start_server(config: AppConfig) -> Result<()> {
    config.validate()?;

    let bind_address = config.server_bind_address();
    let static_dir = config.static_dir.clone();
    let state = Arc::new(AppState::new(config)?);

    info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(web::Data::new(state.clone()))
            .service(
                web::scope("/api")
                    .service(routes::generate::generate)
                    .service(routes::system::health),
            )
            .service(Files::new("/", static_dir.clone()).index_file("index.html"))
    })
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}
