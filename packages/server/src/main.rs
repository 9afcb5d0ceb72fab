#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web narration server binary.
//!
//! Serves the narration REST API for the accessible map frontend and the
//! static frontend files. The upstream statistics service location and
//! the bind address come from the environment.

use std::sync::Arc;

use access_map_client::HttpStatsService;
use access_map_server::{AppState, handlers};
use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let upstream_url =
        std::env::var("UPSTREAM_URL").unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());
    log::info!("Using statistics service at {upstream_url}");

    let stats =
        HttpStatsService::new(&upstream_url).expect("Failed to build statistics service client");
    let state = web::Data::new(AppState::new(Arc::new(stats)));

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/datasets", web::get().to(handlers::datasets))
                    .route("/narration", web::get().to(handlers::narration))
                    .route("/boundary", web::get().to(handlers::boundary))
                    .route("/log", web::post().to(handlers::log_event)),
            )
            // Serve the map frontend
            .service(Files::new("/", "static").index_file("index.html"))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
