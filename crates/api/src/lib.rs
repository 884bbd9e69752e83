//! # Timetable API
//!
//! The web server for the school timetable service. It exposes REST
//! endpoints for teachers, their weekly schedule slots and the aggregated
//! timetable of each `(grade, section)` class.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Validate requests, call the store and shape responses
//! - **Middleware**: Error mapping shared by every handler
//! - **Config**: Environment driven settings, including the storage backend
//!
//! Handlers never touch a concrete database: they receive an
//! `Arc<dyn ScheduleStore>` through [`ApiState`], created once at start-up.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Error handling shared across handlers
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use eyre::{Result, WrapErr};
use timetable_db::{MemoryStore, PgStore, ScheduleStore, create_pool, schema::initialize_database};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use config::{ApiConfig, StorageBackend};

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// The storage collaborator every handler reads and writes through
    pub store: Arc<dyn ScheduleStore>,
    /// Short backend name reported by the health endpoint
    pub storage_label: &'static str,
}

impl ApiState {
    pub fn new(store: Arc<dyn ScheduleStore>, storage_label: &'static str) -> Self {
        Self {
            store,
            storage_label,
        }
    }

    /// State over a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), "memory")
    }

    /// Opens the configured backend. For PostgreSQL this connects the pool
    /// and makes sure the schema exists.
    pub async fn connect(storage: &StorageBackend) -> Result<Self> {
        match storage {
            StorageBackend::Memory => {
                info!("Using in-memory storage; data is lost on restart");
                Ok(Self::in_memory())
            }
            StorageBackend::Postgres { database_url } => {
                info!("Connecting to PostgreSQL...");
                let pool = create_pool(database_url).await?;
                initialize_database(&pool).await?;
                Ok(Self::new(Arc::new(PgStore::new(pool)), "postgres"))
            }
        }
    }
}

/// Installs the global tracing subscriber.
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Builds the router with every endpoint, without transport layers.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Teacher management endpoints
        .merge(routes::teacher::routes())
        // Schedule slot endpoints
        .merge(routes::schedule_slot::routes())
        // Class timetable endpoints
        .merge(routes::class_schedule::routes())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .wrap_err_with(|| format!("Invalid CORS origin: {origin}"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(origins))
}

/// Starts the API server with the provided configuration and state
///
/// # Example
///
/// ```no_run
/// # async fn run() -> eyre::Result<()> {
/// use std::sync::Arc;
/// use timetable_api::{ApiState, config::ApiConfig, start_server};
///
/// let config = ApiConfig::from_env()?;
/// let state = ApiState::connect(&config.storage).await?;
/// start_server(config, Arc::new(state)).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(config: ApiConfig, state: Arc<ApiState>) -> Result<()> {
    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)?),
        None => app,
    };

    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
