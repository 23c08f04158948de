//! ShopAdmin Backend
//!
//! A production-grade REST backend for a multi-store e-commerce
//! administration dashboard, with SQLite persistence and strict per-caller
//! store ownership.

mod api;
mod auth;
mod config;
mod db;
mod errors;
mod models;
mod ownership;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting ShopAdmin Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Warn if PSK is not configured
    if config.api_psk.is_none() {
        tracing::warn!("No API PSK configured (SHOPADMIN_API_PSK). Gateway authentication is disabled!");
    }

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    // Create application state
    let state = AppState {
        repo,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Clone PSK for the auth layer
    let psk = state.config.api_psk.clone();

    // API routes
    let api_routes = Router::new()
        // Stores
        .route("/stores", post(api::create_store))
        .route("/stores", get(api::list_stores))
        .route("/stores/current", get(api::current_store))
        .route("/stores/{store_id}", get(api::get_store))
        .route("/stores/{store_id}", patch(api::update_store))
        .route("/stores/{store_id}", delete(api::delete_store))
        // Billboards
        .route("/{store_id}/billboards", post(api::create_billboard))
        .route("/{store_id}/billboards", get(api::list_billboards))
        .route("/{store_id}/billboards/{billboard_id}", get(api::get_billboard))
        .route("/{store_id}/billboards/{billboard_id}", patch(api::update_billboard))
        .route("/{store_id}/billboards/{billboard_id}", delete(api::delete_billboard))
        // Categories
        .route("/{store_id}/categories", post(api::create_category))
        .route("/{store_id}/categories", get(api::list_categories))
        .route("/{store_id}/categories/{category_id}", get(api::get_category))
        .route("/{store_id}/categories/{category_id}", patch(api::update_category))
        .route("/{store_id}/categories/{category_id}", delete(api::delete_category))
        // Products
        .route("/{store_id}/products", post(api::create_product))
        .route("/{store_id}/products", get(api::list_products))
        .route("/{store_id}/products/{product_id}", get(api::get_product))
        .route("/{store_id}/products/{product_id}", patch(api::update_product))
        .route("/{store_id}/products/{product_id}", delete(api::delete_product))
        // Orders (read-only)
        .route("/{store_id}/orders", get(api::list_orders))
        .route("/{store_id}/orders/{order_id}", get(api::get_order))
        // Apply gateway auth middleware
        .layer(middleware::from_fn(move |req, next| {
            auth::auth_layer(psk.clone(), req, next)
        }));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
