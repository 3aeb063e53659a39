use utoipa::{Modify, OpenApi};

use crate::features::reports::{dtos as reports_dtos, handlers as reports_handlers, models};
use crate::shared::types::{ErrorResponse, OkResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        reports_handlers::list_reports,
        reports_handlers::create_report,
        reports_handlers::update_report,
        reports_handlers::delete_report,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            OkResponse,
            // Reports
            models::Report,
            models::Priority,
            models::Coords,
            models::Reporter,
            models::Review,
            models::UpdateEntry,
            reports_dtos::CreateReportDto,
            reports_dtos::UpdateReportDto,
            reports_dtos::ReviewInputDto,
        )
    ),
    tags(
        (name = "reports", description = "Citizen issue reports"),
    ),
    info(
        title = "Lapor Warga API",
        version = "0.1.0",
        description = "API documentation for Lapor Warga",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
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
