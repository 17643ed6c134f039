use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::UploadService;

// 懒加载的全局 UploadService 实例
static UPLOAD_SERVICE: Lazy<UploadService> = Lazy::new(UploadService::new_lazy);

pub async fn handle_upload(
    request: HttpRequest,
    payload: actix_multipart::Multipart,
) -> ActixResult<HttpResponse> {
    UPLOAD_SERVICE.handle_upload(&request, payload).await
}

/// GET 返回接口用法说明，无副作用
pub async fn usage() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Upload API is ready. Use POST to upload files.",
        "usage": {
            "method": "POST",
            "contentType": "multipart/form-data",
            "fields": {
                "file": "File to upload (required)",
                "spreadsheetId": "Google Sheets ID (required)",
                "sheetTitle": "Sheet name (optional, default: 'Uploads')",
                "folderId": "Google Drive folder ID (optional)",
                "fileName": "Custom file name (optional, uses original filename if not provided)"
            },
            "example": {
                "endpoint": "/api/upload-to-drive",
                "method": "POST"
            }
        }
    }))
}

// 配置路由
pub fn configure_upload_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/upload-to-drive")
            .route("", web::post().to(handle_upload))
            .route("", web::get().to(usage)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use std::sync::Arc;

    use crate::services::testing::{MockDrive, MockSheets, multipart_body};
    use crate::storage::{DriveStorage, SheetStorage};

    const BOUNDARY: &str = "upload-test-boundary";

    fn multipart_content_type() -> (&'static str, String) {
        (
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
    }

    #[actix_web::test]
    async fn test_upload_without_file_is_rejected() {
        let mock_drive = Arc::new(MockDrive::default());
        let drive: Arc<dyn DriveStorage> = mock_drive.clone();
        let sheets: Arc<dyn SheetStorage> = Arc::new(MockSheets::default());

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(drive))
                .app_data(web::Data::new(sheets))
                .configure(configure_upload_routes),
        )
        .await;

        let body = multipart_body(BOUNDARY, &[("spreadsheetId", None, b"SID")]);
        let req = test::TestRequest::post()
            .uri("/api/upload-to-drive")
            .insert_header(multipart_content_type())
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = test::read_body_json(resp).await;
        // 400 响应体就是 {"error": "No file provided"}
        assert_eq!(json, serde_json::json!({ "error": "No file provided" }));
        assert_eq!(mock_drive.upload_count(), 0);
    }

    #[actix_web::test]
    async fn test_upload_defaults_to_uploads_sheet() {
        let mock_drive = Arc::new(MockDrive::default());
        let mock_sheets = Arc::new(MockSheets::default());
        let drive: Arc<dyn DriveStorage> = mock_drive.clone();
        let sheets: Arc<dyn SheetStorage> = mock_sheets.clone();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(drive))
                .app_data(web::Data::new(sheets))
                .configure(configure_upload_routes),
        )
        .await;

        let body = multipart_body(
            BOUNDARY,
            &[
                ("file", Some("report.pdf"), b"%PDF-1.4 content"),
                ("spreadsheetId", None, b"SID"),
            ],
        );
        let req = test::TestRequest::post()
            .uri("/api/upload-to-drive")
            .insert_header(multipart_content_type())
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["driveId"], "drive-1");
        assert_eq!(json["data"]["fileName"], "report.pdf");

        assert_eq!(mock_sheets.created_titles(), vec!["Uploads"]);
        assert_eq!(mock_sheets.appended_ranges(), vec!["Uploads!A:D"]);
    }

    #[actix_web::test]
    async fn test_upload_with_custom_name_and_sheet() {
        let mock_drive = Arc::new(MockDrive::default());
        let mock_sheets = Arc::new(MockSheets::default());
        let drive: Arc<dyn DriveStorage> = mock_drive.clone();
        let sheets: Arc<dyn SheetStorage> = mock_sheets.clone();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(drive))
                .app_data(web::Data::new(sheets))
                .configure(configure_upload_routes),
        )
        .await;

        let body = multipart_body(
            BOUNDARY,
            &[
                ("file", Some("original.bin"), b"payload"),
                ("spreadsheetId", None, b"SID"),
                ("sheetTitle", None, b"Reports"),
                ("fileName", None, b"renamed.bin"),
                ("folderId", None, b"FID"),
            ],
        );
        let req = test::TestRequest::post()
            .uri("/api/upload-to-drive")
            .insert_header(multipart_content_type())
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let names = mock_drive.uploaded_names.lock().unwrap();
        assert_eq!(names[0], "renamed.bin");
        assert_eq!(
            mock_drive.folder_ids.lock().unwrap()[0].as_deref(),
            Some("FID")
        );
        assert_eq!(mock_sheets.appended_ranges(), vec!["Reports!A:D"]);
    }

    #[actix_web::test]
    async fn test_missing_spreadsheet_id() {
        let mock_drive = Arc::new(MockDrive::default());
        let drive: Arc<dyn DriveStorage> = mock_drive.clone();
        let sheets: Arc<dyn SheetStorage> = Arc::new(MockSheets::default());

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(drive))
                .app_data(web::Data::new(sheets))
                .configure(configure_upload_routes),
        )
        .await;

        let body = multipart_body(BOUNDARY, &[("file", Some("a.bin"), b"payload")]);
        let req = test::TestRequest::post()
            .uri("/api/upload-to-drive")
            .insert_header(multipart_content_type())
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"], "Spreadsheet ID is required");
        assert_eq!(mock_drive.upload_count(), 0);
    }

    #[actix_web::test]
    async fn test_usage_endpoint() {
        let app = test::init_service(App::new().configure(configure_upload_routes)).await;

        let req = test::TestRequest::get()
            .uri("/api/upload-to-drive")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert!(json["message"].as_str().unwrap().contains("Upload API"));
    }
}
