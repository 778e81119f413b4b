use axum::{routing::get, Router};

use crate::features::home::handlers;

/// Create routes for the home feature
pub fn routes() -> Router {
    Router::new().route("/", get(handlers::welcome))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;

    use super::*;

    #[tokio::test]
    async fn root_returns_welcome_message() {
        let server = TestServer::new(routes()).unwrap();

        let response = server.get("/").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["message"], "Welcome to Alertic API");
    }

    #[tokio::test]
    async fn query_parameters_are_ignored() {
        let server = TestServer::new(routes()).unwrap();

        let response = server.get("/").add_query_param("verbose", "1").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["message"], "Welcome to Alertic API");
    }
}
