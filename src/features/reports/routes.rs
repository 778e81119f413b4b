use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::reports::handlers;
use crate::features::reports::services::ReportService;

/// Create routes for the reports feature
///
/// Both routes are public. The submission path keeps its historical name.
pub fn routes(service: Arc<ReportService>) -> Router {
    Router::new()
        .route("/api/test", post(handlers::create_report))
        .route("/api/get_reports", get(handlers::list_reports))
        .with_state(service)
}
