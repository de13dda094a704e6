use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{error, info, warn};

use estate_api::{create_app, AppState, Config, Storage};
use estate_core::repositories::{PropertyRepository, UserRepository};
use estate_infra::{DatabasePool, MySqlPropertyRepository, MySqlUserRepository};
use estate_shared::StorageBackend;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    // Initialize logger; RUST_LOG wins over the configured level
    env_logger::Builder::from_env(env_logger::Env::new().default_filter_or(&config.logging.level))
        .format_source_path(config.logging.source_location)
        .init();

    info!(
        "Starting EstateHub API Server ({:?}, storage={})",
        config.environment, config.database.backend
    );
    if config.auth.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set; using the development secret");
    }

    match config.database.backend {
        StorageBackend::Memory => {
            let state = AppState::in_memory(config.auth.clone(), config.listing.clone());
            run(state, &config).await
        }
        StorageBackend::Mysql => {
            let pool = DatabasePool::new(&config.database).await.map_err(|err| {
                error!("Database unavailable: {err}");
                std::io::Error::other(err.to_string())
            })?;
            pool.ensure_schema().await.map_err(|err| {
                error!("Schema bootstrap failed: {err}");
                std::io::Error::other(err.to_string())
            })?;
            info!("Database pool ready: {}", pool.get_statistics());

            let state = AppState::new(
                Arc::new(MySqlPropertyRepository::new(pool.get_pool().clone())),
                Arc::new(MySqlUserRepository::new(pool.get_pool().clone())),
                config.auth.clone(),
                config.listing.clone(),
                Storage::MySql(pool.clone()),
            );
            let result = run(state, &config).await;
            pool.close().await;
            result
        }
    }
}

async fn run<P, U>(state: AppState<P, U>, config: &Config) -> std::io::Result<()>
where
    P: PropertyRepository + 'static,
    U: UserRepository + 'static,
{
    let state = web::Data::new(state);
    let cors = config.cors.clone();
    let environment = config.environment;
    let max_payload_size = config.server.max_payload_size;
    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(state.clone(), &cors, environment, max_payload_size))
        .keep_alive(std::time::Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await
}
