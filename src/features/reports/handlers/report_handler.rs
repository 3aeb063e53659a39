use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::ValidatedJson;
use crate::features::reports::dtos::{CreateReportDto, UpdateReportDto};
use crate::features::reports::models::Report;
use crate::features::reports::services::ReportService;
use crate::shared::types::{ErrorResponse, OkResponse};

/// List all reports, newest first
#[utoipa::path(
    get,
    path = "/api/reports",
    responses(
        (status = 200, description = "Full report collection in stored order", body = Vec<Report>)
    ),
    tag = "reports"
)]
pub async fn list_reports(State(service): State<Arc<ReportService>>) -> Json<Vec<Report>> {
    Json(service.list().await)
}

/// Submit a new report
///
/// Priority and department are derived from the category and description.
/// An embedded `photoDataUrl` is stored when it is a valid base64 data URL
/// and silently dropped otherwise.
#[utoipa::path(
    post,
    path = "/api/reports",
    request_body = CreateReportDto,
    responses(
        (status = 201, description = "Report created", body = Report),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 413, description = "Body exceeds the configured size limit", body = ErrorResponse),
        (status = 500, description = "Report collection could not be written", body = ErrorResponse)
    ),
    tag = "reports"
)]
pub async fn create_report(
    State(service): State<Arc<ReportService>>,
    ValidatedJson(dto): ValidatedJson<CreateReportDto>,
) -> Result<(StatusCode, Json<Report>)> {
    let report = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(report)))
}

/// Update status, department and/or review
#[utoipa::path(
    patch,
    path = "/api/reports/{id}",
    params(
        ("id" = String, Path, description = "Report ID")
    ),
    request_body = UpdateReportDto,
    responses(
        (status = 200, description = "Updated report", body = Report),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Report not found", body = ErrorResponse),
        (status = 500, description = "Report collection could not be written", body = ErrorResponse)
    ),
    tag = "reports"
)]
pub async fn update_report(
    State(service): State<Arc<ReportService>>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateReportDto>,
) -> Result<Json<Report>> {
    let report = service.update(&id, dto).await?;
    Ok(Json(report))
}

/// Delete a report (idempotent)
#[utoipa::path(
    delete,
    path = "/api/reports/{id}",
    params(
        ("id" = String, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report removed or already absent", body = OkResponse),
        (status = 500, description = "Report collection could not be written", body = ErrorResponse)
    ),
    tag = "reports"
)]
pub async fn delete_report(
    State(service): State<Arc<ReportService>>,
    Path(id): Path<String>,
) -> Result<Json<OkResponse>> {
    service.delete(&id).await?;
    Ok(Json(OkResponse::ok()))
}
