// src/main.rs
mod config;
mod dtos;
mod handlers;
mod models;
mod repositories;
mod services;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};
use log::{error, info};

use crate::config::AppConfig;
use crate::handlers::personal_handlers;
use crate::repositories::personal_repository::PgPersonalRepository;
use crate::services::personal_services::PersonalService;

const DEFAULT_LOG_FILTER: &str = "info";

/// Logger reading its filter from `filter_var`, showing `info` and above when unset.
fn logger_builder(filter_var: &str) -> env_logger::Builder {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(filter_var, DEFAULT_LOG_FILTER))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    logger_builder(env_logger::DEFAULT_FILTER_ENV).init();

    let app_config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Store: {}@{}:{}/{}",
        app_config.db_user, app_config.db_host, app_config.db_port, app_config.db_name
    );

    let pg_pool = match app_config.pg_pool() {
        Ok(p) => p,
        Err(e) => {
            error!("Failed to create PG pool: {:#}", e);
            std::process::exit(1);
        }
    };

    let service = web::Data::new(PersonalService::new(Arc::new(PgPersonalRepository::new(pg_pool))));
    let allowed_origins = app_config.allowed_origins.clone();
    let bind_address = app_config.bind_address();

    info!("API running on port {}", app_config.listen_port);

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
            .allowed_headers(vec!["content-type", "accept", "x-requested-with"])
            .max_age(3600);

        for origin in &allowed_origins {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(service.clone())
            .configure(personal_handlers::configure)
    })
    .bind(&bind_address)?
    .run()
    .await
}
