//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns service health status with storage checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Both stores answered
/// - **503 Service Unavailable**: A store failed to answer
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "films": { "status": "ok", "message": "2 stored" },
///     "users": { "status": "ok", "message": "5 stored" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let films = check_store(state.film_service.count().await);
    let users = check_store(state.user_service.count().await);

    // In-memory counts never fail; other repository backends can.
    let all_healthy = films.status == "ok" && users.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { films, users },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

fn check_store(count: Result<usize, AppError>) -> CheckStatus {
    match count {
        Ok(count) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{count} stored")),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Storage error: {}", e)),
        },
    }
}
