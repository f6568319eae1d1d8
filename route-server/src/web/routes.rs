//! HTTP route handlers.

use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::error;

use crate::domain::LocationCode;
use crate::search::{RouteFinder, SearchError};

use super::dto::*;
use super::state::AppState;

/// Upper bound on a single route search. A search that overruns it
/// fails as a whole; no partial results are returned.
const SEARCH_DEADLINE: Duration = Duration::from_secs(10);

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/routes", get(find_routes))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search for valid routes between two location codes.
async fn find_routes(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<RoutesResponse>, AppError> {
    let origin = LocationCode::parse(&query.origin).map_err(|e| AppError::BadRequest {
        message: format!("invalid origin code {:?}: {e}", query.origin),
    })?;
    let destination =
        LocationCode::parse(&query.destination).map_err(|e| AppError::BadRequest {
            message: format!("invalid destination code {:?}: {e}", query.destination),
        })?;

    let finder = RouteFinder::new(state.network.as_ref(), state.network.as_ref());

    let routes = tokio::time::timeout(
        SEARCH_DEADLINE,
        finder.find_routes(&origin, &destination, query.date),
    )
    .await
    .map_err(|_| AppError::Internal {
        message: "route search timed out".to_string(),
    })?
    .map_err(AppError::from)?;

    Ok(Json(RoutesResponse {
        routes: routes.iter().map(RouteDto::from_route).collect(),
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::UnknownLocation { .. } => AppError::NotFound {
                message: e.to_string(),
            },
            SearchError::SameLocation => AppError::BadRequest {
                message: e.to_string(),
            },
            SearchError::Store(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        error!(%status, error = %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
