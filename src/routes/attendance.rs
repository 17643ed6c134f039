use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::AttendanceService;

// 懒加载的全局 AttendanceService 实例
static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

pub async fn handle_record(
    request: HttpRequest,
    payload: actix_multipart::Multipart,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.handle_record(&request, payload).await
}

/// GET 返回接口用法说明，无副作用
pub async fn usage() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Attendance API is ready",
        "endpoint": "/api/attendance",
        "method": "POST",
        "contentType": "multipart/form-data",
        "requiredFields": {
            "file": "Photo file from camera",
            "employeeId": "Employee ID",
            "employeeName": "Employee name",
            "spreadsheetId": "Google Sheets ID",
            "driveFolderId": "Google Drive folder ID",
            "status": "check-in or check-out"
        },
        "optionalFields": {
            "latitude": "Location latitude",
            "longitude": "Location longitude"
        },
        "example": {
            "method": "POST",
            "endpoint": "/api/attendance",
            "fields": {
                "file": "camera_photo.jpg",
                "employeeId": "EMP001",
                "employeeName": "John Doe",
                "spreadsheetId": "1a2b3c...",
                "driveFolderId": "folder123...",
                "status": "check-in",
                "latitude": "-7.2506",
                "longitude": "112.7508"
            }
        }
    }))
}

// 配置路由
pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/attendance")
            .route("", web::post().to(handle_record))
            .route("", web::get().to(usage)),
    );
}
