#[cfg(feature = "server")]
use std::time::Duration;

#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::db::establish_connection_pool;
#[cfg(feature = "server")]
use crate::endpoints::{EndpointConfig, user::UserEndpoints};
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::DieselRepository;
#[cfg(feature = "server")]
use crate::routes::RequestSettings;

pub mod context;
pub mod db;
pub mod domain;
pub mod dto;
pub mod endpoints;
pub mod models;
pub mod pagination;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
pub mod schema;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);
    let endpoints = web::Data::new(UserEndpoints::new(
        repo,
        EndpointConfig::new(server_config.paginator_limit_default.clone()),
    ));
    let settings = web::Data::new(RequestSettings {
        timeout: Duration::from_secs(server_config.request_timeout_secs),
    });

    let allowed_origin = server_config.allowed_origin.clone();
    let bind_address = (server_config.address.clone(), server_config.port);

    log::info!(
        "Starting server on {}:{}",
        server_config.address,
        server_config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(routes::cors(allowed_origin.as_deref()))
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(endpoints.clone())
            .app_data(settings.clone())
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
