//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::planner::{QueryError, plan_route};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(find_route))
        .route("/route", get(find_route))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Find the shortest route between two airports.
///
/// The search is CPU-bound, so it runs on the blocking pool under the
/// configured deadline. A search that misses the deadline is abandoned and
/// its result discarded.
async fn find_route(
    State(state): State<AppState>,
    params: Result<Query<RouteRequest>, QueryRejection>,
) -> Result<Json<RouteResponse>, AppError> {
    let Query(req) = params?;
    let query = req.into_query().map_err(|raw| AppError::BadRequest {
        message: format!("invalid hop budget: {raw}"),
    })?;

    let dataset = state.dataset.clone();
    let config = state.config.clone();
    let search = tokio::task::spawn_blocking(move || plan_route(&dataset, &config, &query));

    let joined = tokio::time::timeout(state.config.search_timeout(), search)
        .await
        .map_err(|_| AppError::Timeout)?;
    let planned = joined.map_err(|e| AppError::Internal {
        message: format!("route search failed: {e}"),
    })?;
    let itinerary = planned?;

    Ok(Json(RouteResponse::from(&itinerary)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Timeout,
    Internal { message: String },
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        match e {
            QueryError::NoRouteFound => AppError::NotFound {
                message: e.to_string(),
            },
            _ => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Timeout => (StatusCode::GATEWAY_TIMEOUT, "route search timed out".into()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "Request failed");
        } else {
            warn!(%status, %message, "Request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_errors_map_to_status() {
        let not_found = AppError::from(QueryError::NoRouteFound).into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let bad = AppError::from(QueryError::UnknownSource("XXX".into())).into_response();
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);

        let same = AppError::from(QueryError::SameAirport("HEL".into())).into_response();
        assert_eq!(same.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn timeout_status() {
        let response = AppError::Timeout.into_response();
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    }
}
