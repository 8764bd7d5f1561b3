//! Notes API server entry point.
//!
//! # Responsibility
//! - Parse configuration, start logging and open the store once.
//! - Serve the notes REST endpoints until shutdown.

mod config;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use log::{error, info};
use notes_api::AppState;
use notes_core::NoteStore;

use config::ServerConfig;

const ACCESS_LOG_FORMAT: &str =
    "event=http_request module=http request=\"%r\" status=%s duration_ms=%D";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = ServerConfig::parse();
    config.init_logging().map_err(std::io::Error::other)?;

    let store = NoteStore::open(&config.db_path).map_err(|err| {
        error!(
            "event=server_start module=server status=error error_code=store_open_failed error={err}"
        );
        std::io::Error::other(err)
    })?;

    let state = web::Data::new(AppState::new(store));
    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::new(ACCESS_LOG_FORMAT))
            .configure(notes_api::configure)
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    let server = server.bind(config.bind)?;
    info!(
        "event=server_start module=server status=ok bind={} version={}",
        config.bind,
        notes_core::core_version()
    );
    server.run().await?;

    info!("event=server_stop module=server status=ok");
    Ok(())
}
