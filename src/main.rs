pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::modules::portfolio::adapter::incoming::web::portfolio_form::MAX_FILES_PER_REQUEST;
use crate::modules::portfolio::adapter::outgoing::{
    GcsConfig, GcsMediaStore, PortfolioRepositoryPostgres,
};
use crate::modules::portfolio::application::domain::policies::UploadPolicy;
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::service::{
    CreatePortfolioItemService, DeletePortfolioItemService, GetPortfolioItemService,
    GetPortfolioItemsService, UpdatePortfolioItemService,
};
use crate::shared::api::request_config::{custom_multipart_config, custom_path_config};
use crate::shared::config::AppConfig;
use crate::shared::cors::cors_from_origins;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

/// Multipart overhead allowed on top of the image binaries (text fields, headers).
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: PortfolioUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let upload_policy = UploadPolicy::from_env();
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        info!("Running pending migrations");
        Migrator::up(&conn, None)
            .await
            .context("Failed to run migrations")?;
    }

    let db_arc = Arc::new(conn);

    // Media storage (the Google clients use rustls; pick the provider once per process)
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        warn!("rustls crypto provider was already installed");
    }

    let media_store = GcsMediaStore::connect(GcsConfig::new(
        config.gcs_bucket.clone(),
        config.media_public_base_url.clone(),
    ))
    .await
    .map_err(|e| anyhow::anyhow!("Failed to initialise Google Cloud Storage client: {e}"))?;

    info!(
        bucket = %config.gcs_bucket,
        folder = %upload_policy.folder,
        max_file_size_bytes = upload_policy.max_file_size_bytes,
        "Media storage ready"
    );

    // Repositories and use cases
    let portfolio_repo = PortfolioRepositoryPostgres::new(Arc::clone(&db_arc));
    let folder = upload_policy.folder.clone();
    let max_file_size = usize::try_from(upload_policy.max_file_size_bytes).unwrap_or(usize::MAX);

    let state = AppState {
        portfolio: PortfolioUseCases {
            get_list: Arc::new(GetPortfolioItemsService::new(portfolio_repo.clone())),
            get_single: Arc::new(GetPortfolioItemService::new(portfolio_repo.clone())),
            create: Arc::new(CreatePortfolioItemService::new(
                portfolio_repo.clone(),
                media_store.clone(),
                upload_policy.clone(),
            )),
            update: Arc::new(UpdatePortfolioItemService::new(
                portfolio_repo.clone(),
                media_store.clone(),
                upload_policy,
            )),
            delete: Arc::new(DeletePortfolioItemService::new(
                portfolio_repo,
                media_store,
                folder,
            )),
        },
    };

    let multipart_limit = max_file_size
        .saturating_mul(MAX_FILES_PER_REQUEST)
        .saturating_add(MULTIPART_OVERHEAD_BYTES);
    let allowed_origins = config.cors_allowed_origins.clone();
    let openapi = ApiDoc::openapi();

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_from_origins(&allowed_origins))
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_path_config(
                "PORTFOLIO_ITEM_NOT_FOUND",
                "Portfolio item not found",
            ))
            .app_data(custom_multipart_config(multipart_limit))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await?;

    // Server stopped; release the pool if nothing else holds it
    match Arc::try_unwrap(db_arc) {
        Ok(conn) => {
            if let Err(e) = conn.close().await {
                warn!(error = %e, "Failed to close database connection");
            }
        }
        Err(_) => warn!("Database connection still shared at shutdown"),
    }

    info!("Server stopped");
    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::index);
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Portfolio
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_items_handler);
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_item_handler);
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::create_portfolio_item_handler);
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::update_portfolio_item_handler);
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::delete_portfolio_item_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
