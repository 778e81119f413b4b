use utoipa::{Modify, OpenApi};

use crate::core::error::ErrorResponse;
use crate::features::home::handlers as home_handlers;
use crate::features::reports::{dtos as reports_dtos, handlers as reports_handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Home
        home_handlers::welcome,
        // Reports
        reports_handlers::report_handler::create_report,
        reports_handlers::report_handler::list_reports,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            // Home
            home_handlers::WelcomeResponseDto,
            // Reports
            reports_dtos::CreateReportDto,
            reports_dtos::ReportResponseDto,
            reports_dtos::ReportCreatedResponseDto,
            reports_dtos::ReportListResponseDto,
        )
    ),
    tags(
        (name = "home", description = "Welcome endpoint"),
        (name = "reports", description = "Citizen report submission and listing")
    )
)]
pub struct ApiDoc;

/// Modifier to set swagger info from config at runtime
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
