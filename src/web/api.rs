use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Duration, Utc};
use log::{debug, info};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::path::reconstruct;
use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::generators::{GeneratorConfig, GraphGenerator, SelfLoopPolicy};
use crate::graph::layout::{circular_layout, Canvas};
use crate::graph::DirectedGraph;
use crate::web::models::*;
use crate::Error;

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Limits applied to the session table
#[derive(Debug, Clone, Copy)]
pub struct SessionLimits {
    pub max_sessions: usize,
    pub session_timeout: Duration,
    /// Largest graph a client may request
    pub max_node_count: usize,
    /// Largest per-node out-degree draw a client may request
    pub max_out_degree: usize,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            max_sessions: 1000,
            session_timeout: Duration::minutes(60),
            max_node_count: 500,
            max_out_degree: 10,
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub limits: SessionLimits,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_limits(SessionLimits::default())
    }

    pub fn with_limits(limits: SessionLimits) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            limits,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs/generate", post(generate_graph))
        .route("/api/graphs/:session_id", get(get_graph))
        .route("/api/graphs/:session_id/reset", post(reset_graph))
        .route("/api/paths/:session_id", post(find_path))
        .route("/api/sessions", get(list_sessions))
        .route("/api/sessions/:session_id", get(get_session))
        .route("/api/health", get(health_check))
}

/// Generate a new graph in a fresh session
pub async fn generate_graph(
    State(state): State<AppState>,
    Json(request): Json<GraphGenerationRequest>,
) -> Result<Json<SessionView>, ApiError> {
    if request.node_count > state.limits.max_node_count {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "invalid_node_count",
            format!(
                "Node count {} exceeds the limit of {}",
                request.node_count, state.limits.max_node_count
            ),
        ));
    }

    let defaults = GeneratorConfig::default();
    let max_out_degree = request.max_out_degree.unwrap_or(defaults.max_out_degree);
    if max_out_degree > state.limits.max_out_degree {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "invalid_generator_config",
            format!(
                "max_out_degree {} exceeds the limit of {}",
                max_out_degree, state.limits.max_out_degree
            ),
        ));
    }

    let config = GeneratorConfig {
        max_out_degree,
        self_loop_policy: if request.redraw_self_loops {
            SelfLoopPolicy::Redraw
        } else {
            SelfLoopPolicy::Skip
        },
        ..defaults
    };

    let graph = GraphGenerator::with_config(config)
        .generate(request.node_count)
        .map_err(core_error)?;
    let positions = circular_layout(request.node_count, &Canvas::default());

    let session = Session::new(graph, positions);
    let view = session.view();

    {
        let mut sessions = state.sessions.lock().await;
        sessions.insert(session.id, session);
        prune_sessions(&mut sessions, &state.limits, Utc::now());
    }

    info!(
        "Created session {} with {} nodes and {} edges",
        view.id, view.node_count, view.edge_count
    );
    Ok(Json(view))
}

/// Get graph data for a session
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<WebGraph>, ApiError> {
    let sessions = state.sessions.lock().await;
    let session = sessions.get(&session_id).ok_or_else(|| session_not_found(session_id))?;
    Ok(Json(session.web_graph()))
}

/// Run Dijkstra from `source` and reconstruct the path to `target`
pub async fn find_path(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<PathRequest>,
) -> Result<Json<PathResponse>, ApiError> {
    let (graph, revision) = {
        let sessions = state.sessions.lock().await;
        let session = sessions.get(&session_id).ok_or_else(|| session_not_found(session_id))?;
        (Arc::clone(&session.graph), session.revision)
    };

    let dijkstra = Dijkstra::new();
    let start_time = Instant::now();
    let result = dijkstra
        .compute_shortest_paths(&*graph, request.source)
        .map_err(core_error)?;
    let path = reconstruct(&result.predecessors, result.source, request.target).map_err(core_error)?;
    let execution_time = start_time.elapsed();

    let distance = result.distances.reachable(request.target);
    let response = PathResponse {
        execution_id: Uuid::new_v4(),
        algorithm: ShortestPathAlgorithm::<DirectedGraph>::name(&dijkstra).to_string(),
        source: request.source,
        target: request.target,
        reachable: !path.is_empty(),
        path,
        distance,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        distances: result
            .distances
            .iter()
            .filter_map(|(node, _)| result.distances.reachable(node).map(|d| (node, d)))
            .collect(),
        predecessors: result.predecessors.iter().collect(),
        stats: result.stats,
    };

    debug!(
        "Session {}: path {} -> {} = {:?}",
        session_id, request.source, request.target, response.path
    );

    // A reset since the graph was read makes this result stale
    {
        let mut sessions = state.sessions.lock().await;
        if let Some(session) = sessions.get_mut(&session_id) {
            if !session.record_result(revision, response.clone()) {
                debug!("Session {} was reset during the query, result not stored", session_id);
            }
        }
    }

    Ok(Json(response))
}

/// Restore the session's initial graph and clear the current path
pub async fn reset_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionView>, ApiError> {
    let mut sessions = state.sessions.lock().await;
    let session = sessions
        .get_mut(&session_id)
        .ok_or_else(|| session_not_found(session_id))?;
    session.reset();
    Ok(Json(session.view()))
}

/// List all active sessions
pub async fn list_sessions(State(state): State<AppState>) -> Result<Json<Vec<Uuid>>, ApiError> {
    let sessions = state.sessions.lock().await;
    Ok(Json(sessions.keys().cloned().collect()))
}

/// Get session information
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionView>, ApiError> {
    let sessions = state.sessions.lock().await;
    let session = sessions.get(&session_id).ok_or_else(|| session_not_found(session_id))?;
    Ok(Json(session.view()))
}

/// Health check endpoint
pub async fn health_check() -> Result<Json<serde_json::Value>, ApiError> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}

// Helper functions

/// Drops expired sessions, then the oldest ones beyond `max_sessions`
pub fn prune_sessions(
    sessions: &mut HashMap<Uuid, Session>,
    limits: &SessionLimits,
    now: DateTime<Utc>,
) {
    if let Some(cutoff) = now.checked_sub_signed(limits.session_timeout) {
        sessions.retain(|_, session| session.created_at >= cutoff);
    }

    if sessions.len() > limits.max_sessions {
        let mut by_age: Vec<(DateTime<Utc>, Uuid)> =
            sessions.values().map(|s| (s.created_at, s.id)).collect();
        by_age.sort();
        let excess = sessions.len() - limits.max_sessions;
        for (_, id) in by_age.into_iter().take(excess) {
            sessions.remove(&id);
        }
    }
}

fn error_response(status: StatusCode, error: &str, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
            details: None,
        }),
    )
}

fn session_not_found(session_id: Uuid) -> ApiError {
    error_response(
        StatusCode::NOT_FOUND,
        "session_not_found",
        format!("Session {} not found", session_id),
    )
}

fn core_error(err: Error) -> ApiError {
    let (status, code) = match &err {
        Error::InvalidNodeCount(_) => (StatusCode::BAD_REQUEST, "invalid_node_count"),
        Error::UnknownNode(_) => (StatusCode::BAD_REQUEST, "unknown_node"),
        Error::InvalidGeneratorConfig(_) => (StatusCode::BAD_REQUEST, "invalid_generator_config"),
        Error::NegativeWeight { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "negative_weight"),
        Error::SelfLoop(_) => (StatusCode::INTERNAL_SERVER_ERROR, "self_loop"),
    };
    error_response(status, code, err.to_string())
}
