use std::path::Path;
use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::services::ServeDir;

use crate::features::reports::handlers;
use crate::features::reports::services::ReportService;

/// Create routes for the reports feature
pub fn routes(service: Arc<ReportService>) -> Router {
    Router::new()
        .route(
            "/api/reports",
            get(handlers::list_reports).post(handlers::create_report),
        )
        .route(
            "/api/reports/{id}",
            patch(handlers::update_report).delete(handlers::delete_report),
        )
        .with_state(service)
}

/// Serve stored photos as static files under `url_prefix`
pub fn upload_routes(upload_dir: &Path, url_prefix: &str) -> Router {
    Router::new().nest_service(url_prefix, ServeDir::new(upload_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::models::Report;
    use crate::modules::storage::{JsonFileReportStore, LocalBlobStore};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    fn server() -> (TempDir, TestServer) {
        let dir = tempfile::tempdir().unwrap();
        let upload_dir = dir.path().join("uploads");
        std::fs::create_dir_all(&upload_dir).unwrap();

        let store = Arc::new(JsonFileReportStore::new(dir.path().join("data.json")));
        let blob_store = Arc::new(LocalBlobStore::new(&upload_dir, "/uploads"));
        let service = Arc::new(ReportService::new(store, blob_store));

        let app = routes(service).merge(upload_routes(&upload_dir, "/uploads"));
        (dir, TestServer::new(app).unwrap())
    }

    #[tokio::test]
    async fn test_create_returns_201_with_report() {
        let (_dir, server) = server();

        let response = server
            .post("/api/reports")
            .json(&json!({
                "category": "Water",
                "description": "pipe leak at night",
                "coords": { "lat": -7.25, "lng": 112.75 },
                "reporter": { "name": "Budi", "phone": "0812", "email": "budi@example.com" }
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["status"], "Submitted");
        assert_eq!(body["priority"], "medium");
        assert_eq!(body["department"], "Water Board");
        assert_eq!(body["coords"]["lat"], "-7.25");
        assert_eq!(body["reporter"]["name"], "Budi");
        assert!(body["photo"].is_null());
        assert_eq!(body["updates"][0]["note"], "Report created");
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let (_dir, server) = server();

        let first: Report = server
            .post("/api/reports")
            .json(&json!({ "category": "Pothole" }))
            .await
            .json();
        let second: Report = server
            .post("/api/reports")
            .json(&json!({ "category": "Garbage" }))
            .await
            .json();

        let response = server.get("/api/reports").await;
        response.assert_status_ok();
        let reports: Vec<Report> = response.json();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].id, second.id);
        assert_eq!(reports[1].id, first.id);
    }

    #[tokio::test]
    async fn test_patch_updates_report() {
        let (_dir, server) = server();
        let created: Report = server
            .post("/api/reports")
            .json(&json!({ "category": "Streetlight" }))
            .await
            .json();

        let response = server
            .patch(&format!("/api/reports/{}", created.id))
            .json(&json!({
                "status": "Resolved",
                "review": { "rating": 9, "comment": "Terima kasih" }
            }))
            .await;

        response.assert_status_ok();
        let updated: Report = response.json();
        assert_eq!(updated.status, "Resolved");
        assert_eq!(updated.review.as_ref().unwrap().rating, 5.0);
        assert_eq!(updated.updates.len(), 3);
    }

    #[tokio::test]
    async fn test_patch_unknown_id_is_404() {
        let (_dir, server) = server();

        let response = server
            .patch("/api/reports/nope")
            .json(&json!({ "status": "Resolved" }))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({ "error": "Not found" }));
    }

    #[tokio::test]
    async fn test_patch_rejects_malformed_json() {
        let (_dir, server) = server();

        let response = server
            .patch("/api/reports/any")
            .text("{status:")
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_create_rejects_overlong_category() {
        let (_dir, server) = server();

        let response = server
            .post("/api/reports")
            .json(&json!({ "category": "x".repeat(101) }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let reports: Vec<Report> = server.get("/api/reports").await.json();
        assert!(reports.is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_oversized_body() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(JsonFileReportStore::new(dir.path().join("data.json")));
        let blob_store = Arc::new(LocalBlobStore::new(dir.path(), "/uploads"));
        let service = Arc::new(ReportService::new(store, blob_store));
        let app = routes(service).layer(axum::extract::DefaultBodyLimit::max(64));
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/api/reports")
            .json(&json!({ "description": "a".repeat(256) }))
            .await;

        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let (_dir, server) = server();
        let created: Report = server
            .post("/api/reports")
            .json(&json!({ "category": "Safety" }))
            .await
            .json();

        let response = server.delete(&format!("/api/reports/{}", created.id)).await;
        response.assert_status_ok();
        response.assert_json(&json!({ "ok": true }));

        let again = server.delete(&format!("/api/reports/{}", created.id)).await;
        again.assert_status_ok();
        again.assert_json(&json!({ "ok": true }));

        let reports: Vec<Report> = server.get("/api/reports").await.json();
        assert!(reports.is_empty());
    }

    #[tokio::test]
    async fn test_uploaded_photo_is_served() {
        let (_dir, server) = server();

        let created: Report = server
            .post("/api/reports")
            .json(&json!({
                "category": "Garbage",
                "photoDataUrl": "data:image/png;base64,aGVsbG8="
            }))
            .await
            .json();

        let photo = created.photo.unwrap();
        assert_eq!(photo, format!("/uploads/{}.png", created.id));

        let response = server.get(&photo).await;
        response.assert_status_ok();
        assert_eq!(&response.as_bytes()[..], b"hello");
    }
}
