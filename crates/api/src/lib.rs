//! # Slotbook API
//!
//! The API crate provides the web server for the Slotbook appointment service.
//! Customers query availability and book slots; staff manage appointments,
//! services, working hours, break times and business settings.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Load inputs from the store and call the availability engine
//! - **Middleware**: Map domain errors to HTTP responses
//! - **Config**: Handle environment and application configuration
//!
//! Handlers only see the [`BookingStore`] trait and the [`Clock`], so the
//! whole router can be exercised without a database.

/// Source of the current instant
pub mod clock;
/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{Router, http::HeaderValue};
use eyre::Result;
use slotbook_db::BookingStore;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

pub use clock::{Clock, SystemClock};

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Persistence for configuration and appointments
    pub store: Arc<dyn BookingStore>,
    /// Supplies `now` to the availability engine
    pub clock: Arc<dyn Clock>,
}

impl ApiState {
    pub fn new(store: Arc<dyn BookingStore>) -> Self {
        Self {
            store,
            clock: Arc::new(SystemClock),
        }
    }
}

/// Builds the application router with every endpoint attached to `state`.
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Customer-facing availability and booking
        .merge(routes::availability::routes())
        .merge(routes::appointments::routes())
        .merge(routes::services::routes())
        .merge(routes::businesses::routes())
        // Staff administration
        .merge(routes::admin::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Starts the API server with the provided configuration and store
///
/// This function sets up logging, configures routes and middleware, and
/// serves HTTP until the process is stopped.
///
/// # Arguments
///
/// * `config` - API configuration including host, port, and other settings
/// * `store` - Persistence backend for the booking workflow
pub async fn start_server(config: config::ApiConfig, store: Arc<dyn BookingStore>) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::new(store));
    let app = build_router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let allowed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();

        let cors = CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(allowed)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout)))
            .into_inner(),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
