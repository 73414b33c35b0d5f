//! mini-crm API server
//!
//! Registers incoming lead contacts and distributes them across operators by
//! per-source weights, respecting each operator's load limit.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use clap::Parser;
use sea_orm::{Database, DatabaseConnection};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    SqlContactRepository, SqlLeadRepository, SqlOperatorRepository, SqlSourceRepository,
    SqlWeightRepository, ThreadRngSource,
};
use app::{ContactService, OperatorService, ReportService, SourceService};
use config::{Cli, Config};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub operator_service: Arc<OperatorService<SqlOperatorRepository>>,
    pub source_service:
        Arc<SourceService<SqlSourceRepository, SqlOperatorRepository, SqlWeightRepository>>,
    pub contact_service: Arc<
        ContactService<
            SqlOperatorRepository,
            SqlSourceRepository,
            SqlWeightRepository,
            SqlLeadRepository,
            SqlContactRepository,
            ThreadRngSource,
        >,
    >,
    pub report_service: Arc<ReportService<SqlLeadRepository, SqlContactRepository>>,
}

impl AppState {
    /// Wire repositories and services over one database connection
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        let operator_repo = Arc::new(SqlOperatorRepository::new(db.clone()));
        let source_repo = Arc::new(SqlSourceRepository::new(db.clone()));
        let weight_repo = Arc::new(SqlWeightRepository::new(db.clone()));
        let lead_repo = Arc::new(SqlLeadRepository::new(db.clone()));
        let contact_repo = Arc::new(SqlContactRepository::new(db));

        let operator_service = Arc::new(OperatorService::new(
            operator_repo.clone(),
            config.default_load_limit,
        ));

        let source_service = Arc::new(SourceService::new(
            source_repo.clone(),
            operator_repo.clone(),
            weight_repo.clone(),
        ));

        let contact_service = Arc::new(ContactService::new(
            operator_repo,
            source_repo,
            weight_repo,
            lead_repo.clone(),
            contact_repo.clone(),
            Arc::new(ThreadRngSource),
        ));

        let report_service = Arc::new(ReportService::new(lead_repo, contact_repo));

        Self {
            operator_service,
            source_service,
            contact_service,
            report_service,
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // Operators
        .route(
            "/operators",
            post(handlers::create_operator).get(handlers::list_operators),
        )
        .route(
            "/operators/:id",
            get(handlers::get_operator).patch(handlers::update_operator),
        )
        // Sources and weights
        .route(
            "/sources",
            post(handlers::create_source).get(handlers::list_sources),
        )
        .route("/sources/:id/weights", get(handlers::list_weights_for_source))
        .route("/weights", post(handlers::set_weight))
        // Contacts
        .route("/contacts", post(handlers::create_contact))
        .route(
            "/contacts/:id",
            get(handlers::get_contact).patch(handlers::update_contact_status),
        )
        // Leads and statistics
        .route("/leads", get(handlers::list_leads))
        .route("/stats/operators", get(handlers::stats_by_operator))
        .route("/stats/sources", get(handlers::stats_by_source))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,mini_crm=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting mini-crm...");

    // Load configuration; flags win over the environment
    let config = Config::from_env()?.with_cli(Cli::parse());

    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    entity::create_tables(&db)
        .await
        .context("Failed to create database schema")?;
    tracing::info!("Database ready");

    let app = router(AppState::new(db, &config));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}
