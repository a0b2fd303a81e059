//! Demo HTTP server showing envelope wrapping and pagination end to end

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::envelope::JsonApiFormatter;
use crate::error::{Error, Result};
use crate::http::{deleted, PageQuery, Respond, ToPagedResponse};
use crate::registry::{configure, Options};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,
    /// Serve JSON:API-shaped envelopes instead of the default shape
    pub json_api: bool,
}

/// Demo user record
#[derive(Debug, Clone, Serialize)]
pub struct User {
    id: u64,
    name: String,
    email: String,
}

/// Request body for creating a user
#[derive(Debug, Deserialize)]
struct CreateUser {
    name: String,
    email: String,
}

/// App state shared across handlers
#[derive(Clone)]
struct AppState {
    users: Arc<Vec<User>>,
}

fn seed_users() -> Vec<User> {
    let names = [
        "Ada", "Grace", "Alan", "Edsger", "Barbara", "Donald", "Tony", "Margaret",
    ];

    (1..=42)
        .map(|id| {
            let name = format!("{} {}", names[(id - 1) as usize % names.len()], id);
            User {
                id,
                email: format!(
                    "{}@example.com",
                    name.to_lowercase().replace(' ', ".")
                ),
                name,
            }
        })
        .collect()
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "name": crate::NAME,
        "version": crate::VERSION,
    }))
}

/// GET /api/users?page=&page_size= — paginated list
async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> std::result::Result<Response, Error> {
    let (page, page_size) = query.normalized();
    state.users.to_paged_response(page, page_size)
}

/// GET /api/users/:id — plain wrapped lookup
async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> std::result::Result<Response, Error> {
    match state.users.iter().find(|user| user.id == id) {
        Some(user) => user.clone().ok(),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(json!({"error": "User not found"})),
        )
            .into_response()),
    }
}

/// POST /api/users — 201 with Location header
async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUser>,
) -> std::result::Result<Response, Error> {
    // Demo store is immutable; the created user is ephemeral
    let user = User {
        id: state.users.len() as u64 + 1,
        name: body.name,
        email: body.email,
    };

    let location = format!("/api/users/{}", user.id);
    user.created(&location)
}

/// DELETE /api/users/:id — 204
async fn delete_user(Path(_id): Path<u64>) -> Response {
    deleted()
}

/// GET /api/users/stats — wrapped payload with custom metadata
async fn user_stats(State(state): State<AppState>) -> std::result::Result<Response, Error> {
    let total = state.users.len();
    json!({ "total": total }).with_meta(json!({"generatedBy": crate::NAME}))
}

/// Build the demo router over a fresh in-memory user store
pub fn build_router() -> Router {
    let state = AppState {
        users: Arc::new(seed_users()),
    };

    Router::new()
        .route("/health", get(health))
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/stats", get(user_stats))
        .route("/api/users/:id", get(get_user).delete(delete_user))
        .with_state(state)
}

/// Configure wrapkit and run the demo server until shutdown
pub async fn serve(config: ServerConfig) -> Result<()> {
    let options = if config.json_api {
        Options::new()
            .use_formatter(JsonApiFormatter::new("/api/users"))
            .use_pagination()
    } else {
        Options::new().use_default_formatter().use_pagination()
    };
    configure(options)?;

    // Allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = build_router().layer(cors).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting demo server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to port {}: {e}", config.port)))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}
