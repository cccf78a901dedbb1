//! Catalog API Server
//!
//! Read-only HTTP API over the product catalog's brands and product types.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::CatalogSeed;
use app::{ProductBrandCatalog, ProductTypeCatalog};
use config::Config;
use domain::ports::{ProductBrandService, ProductTypeService};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub brand_service: Arc<dyn ProductBrandService>,
    pub type_service: Arc<dyn ProductTypeService>,
}

/// All routes, without CORS
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/brands", get(handlers::list_product_brands))
        .route("/api/brands/:id", get(handlers::get_product_brand))
        .route("/api/product-types", get(handlers::list_product_types))
        .route("/api/product-types/:id", get(handlers::get_product_type))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,catalog_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Catalog API...");

    let config = Config::from_env().context("Failed to load configuration")?;

    let seed = match &config.seed_path {
        Some(path) => {
            tracing::info!("Loading catalog seed from {}", path.display());
            CatalogSeed::load(path).context("Failed to load catalog seed")?
        }
        None => {
            tracing::warn!("CATALOG_SEED_PATH not set, starting with an empty catalog");
            CatalogSeed::default()
        }
    };

    let (brand_repo, type_repo) = seed
        .into_repositories()
        .context("Catalog seed is invalid")?;
    let brand_count = brand_repo.len()?;
    let type_count = type_repo.len()?;
    tracing::info!(brands = brand_count, types = type_count, "Catalog loaded");

    // Create application services
    let state = AppState {
        brand_service: Arc::new(ProductBrandCatalog::new(Arc::new(brand_repo))),
        type_service: Arc::new(ProductTypeCatalog::new(Arc::new(type_repo))),
    };

    let mut app = router(state);
    if config.cors_permissive {
        app = app.layer(CorsLayer::permissive());
    }

    // Start server
    let addr = config.bind_addr();
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
