use axum::Json;
use pathforge_api::HealthResponse;

/// GET /api/health — server liveness check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    use crate::test_support::{body_json, test_router};

    #[tokio::test]
    async fn health_reports_ok_and_version() {
        let response = test_router()
            .oneshot(
                Request::get("/api/health")
                    .body(Body::empty())
                    .expect("build request"),
            )
            .await
            .expect("router call");

        assert!(response.status().is_success());
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}
