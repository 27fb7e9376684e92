use axum::{
    http::{header, Method},
    Router,
};
use chrono::Duration;
use log::info;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::web::api::{create_router, AppState, SessionLimits};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
    pub enable_cors: bool,
    pub max_sessions: usize,
    pub session_timeout_minutes: u64,
    pub max_node_count: usize,
    pub max_out_degree: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3005,
            static_dir: "web".to_string(),
            enable_cors: true,
            max_sessions: 1000,
            session_timeout_minutes: 60,
            max_node_count: 500,
            max_out_degree: 10,
        }
    }
}

impl ServerConfig {
    pub fn session_limits(&self) -> SessionLimits {
        let minutes = i64::try_from(self.session_timeout_minutes)
            .unwrap_or(i64::MAX)
            .min(i64::MAX / 60_000);
        SessionLimits {
            max_sessions: self.max_sessions,
            session_timeout: Duration::minutes(minutes),
            max_node_count: self.max_node_count,
            max_out_degree: self.max_out_degree,
        }
    }
}

/// Builds the full application: API routes, static frontend and CORS
pub fn build_app(config: &ServerConfig) -> Router {
    let app = Router::new()
        .merge(create_router())
        // Static file serving for the web frontend
        .fallback_service(ServeDir::new(&config.static_dir))
        .with_state(AppState::with_limits(config.session_limits()));

    if !config.enable_cors {
        return app;
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    app.layer(ServiceBuilder::new().layer(cors).into_inner())
}

/// Start the web server on `port` with default settings
pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    start_server_with_config(ServerConfig {
        port,
        ..Default::default()
    })
    .await
}

/// Start the web server with custom configuration
pub async fn start_server_with_config(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(&config);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("SSSP Explorer web server starting on http://{}", addr);
    info!("Serving static files from: {}", config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
