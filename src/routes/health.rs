use axum::{http::StatusCode, response::Json};

use crate::models::HealthResponse;

// GET / - Confirm the API is up before making other calls
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        message: "API health check successful".to_string(),
    };

    (StatusCode::OK, Json(response))
}
