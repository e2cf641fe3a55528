//! HTTP server for profile lookups
//!
//! Provides /health, /status, /, /api and /api/discord endpoints.

use crate::types::{ApiIndexResponse, HealthResponse, StatusResponse, UserQuery};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::{SecondsFormat, Utc};
use discord_profile::{DiscordClient, DiscordError, ErrorResult, ExtendedProfile, ProfileResult};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

const MISSING_USER_ID: &str = "userid parameter is required";
const MISSING_TOKEN: &str = "Discord bot token not configured";

/// Raw query pairs; repeated keys are kept in order
type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// Shared state for the HTTP server
pub struct ServerState {
    /// `None` when no bot token is configured
    pub client: Option<DiscordClient>,
}

impl ServerState {
    pub fn new(client: Option<DiscordClient>) -> Self {
        Self { client }
    }
}

pub type SharedState = Arc<ServerState>;

/// Create the HTTP router
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(get_profile))
        .route("/health", get(health))
        .route("/status", get(status))
        .route("/api", get(api_index))
        .route("/api/discord", get(get_extended_profile))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(state: SharedState, port: u16) -> std::io::Result<()> {
    let router = create_router(state);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await
}

/// Read `userid` from the query string, first occurrence winning.
///
/// An undecodable query string counts as a missing `userid` so the caller
/// still answers with its JSON error body.
fn user_query(query: QueryPairs) -> UserQuery {
    match query {
        Ok(Query(pairs)) => UserQuery::from_pairs(pairs),
        Err(e) => {
            warn!(error = %e, "Failed to decode query string");
            UserQuery::default()
        }
    }
}

/// Scheme and host the client used to reach us
fn request_origin(headers: &HeaderMap) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    format!("{}://{}", scheme, host)
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "API is running",
        success: true,
    })
}

/// Report whether a bot token is configured
async fn status(State(state): State<SharedState>) -> Json<StatusResponse> {
    let configured = state.client.is_some();
    let message = if configured {
        "Discord bot token is configured"
    } else {
        "Discord bot token is missing. Add DISCORD_BOT_TOKEN environment variable."
    };

    Json(StatusResponse {
        status: "API is running",
        configured,
        message,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        success: true,
    })
}

/// Normalized profile by `?userid=`
///
/// Lookup failures are reported in the body with status 200; only a missing
/// `userid` is a 400.
async fn get_profile(State(state): State<SharedState>, query: QueryPairs) -> Response {
    let query = user_query(query);
    let Some(user_id) = query.user_id() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResult::new(MISSING_USER_ID)),
        )
            .into_response();
    };

    let Some(client) = state.client.as_ref() else {
        warn!(user_id, "Profile requested without a configured bot token");
        return Json(ProfileResult::Failed(ErrorResult::new(MISSING_TOKEN))).into_response();
    };

    let result = client.resolve(user_id).await;
    info!(user_id, success = result.is_success(), "Resolved profile");

    Json(result).into_response()
}

/// Index of the API; with `?userid=` it answers like `/api/discord`
async fn api_index(
    State(state): State<SharedState>,
    headers: HeaderMap,
    query: QueryPairs,
) -> Response {
    let query = user_query(query);
    if query.user_id().is_some() {
        return extended_profile_response(&state, &query).await;
    }

    Json(ApiIndexResponse::new(&request_origin(&headers))).into_response()
}

/// Extended profile by `?userid=`, with upstream status codes passed through
async fn get_extended_profile(State(state): State<SharedState>, query: QueryPairs) -> Response {
    extended_profile_response(&state, &user_query(query)).await
}

async fn extended_profile_response(state: &ServerState, query: &UserQuery) -> Response {
    let Some(user_id) = query.user_id() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ExtendedProfile::failure(MISSING_USER_ID)),
        )
            .into_response();
    };

    let Some(client) = state.client.as_ref() else {
        warn!(user_id, "Profile requested without a configured bot token");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ExtendedProfile::failure(MISSING_TOKEN)),
        )
            .into_response();
    };

    match client.resolve_extended(user_id).await {
        Ok(profile) => {
            info!(user_id, "Resolved extended profile");
            Json(profile).into_response()
        }
        Err(e) => {
            warn!(user_id, error = %e, "Extended profile lookup failed");
            let (code, error) = match &e {
                DiscordError::Api { status, .. } => (
                    StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                    e.to_string(),
                ),
                DiscordError::Http(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Request failed".to_string(),
                ),
            };
            (code, Json(ExtendedProfile::failure(error))).into_response()
        }
    }
}
