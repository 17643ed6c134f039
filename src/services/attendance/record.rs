use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Local;
use tracing::error;

use super::{AttendanceService, pipeline};
use crate::config::AppConfig;
use crate::models::attendance::entities::{AttendanceRecord, AttendanceStatus, GeoLocation};
use crate::models::attendance::responses::AttendanceData;
use crate::models::{ApiResponse, ErrorResponse};
use crate::utils::validate::{parse_coordinate, validate_remote_id};
use crate::utils::{collect_form, format_local_timestamp, is_supported_image};

pub async fn handle_record(
    service: &AttendanceService,
    request: &HttpRequest,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();

    let form = match collect_form(payload, config.upload.max_size).await {
        Ok(form) => form,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(e.message())));
        }
    };

    // 必填字段校验；全部通过之前不触达任何远端存储
    let photo = match form.file.as_ref() {
        Some(file) if !file.data.is_empty() => file,
        _ => {
            return Ok(HttpResponse::BadRequest().json(ErrorResponse::new("Photo is required")));
        }
    };
    let Some(employee_id) = form.text("employeeId") else {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new("Employee ID is required")));
    };
    let Some(employee_name) = form.text("employeeName") else {
        return Ok(
            HttpResponse::BadRequest().json(ErrorResponse::new("Employee name is required"))
        );
    };
    let Some(spreadsheet_id) = form.text("spreadsheetId") else {
        return Ok(
            HttpResponse::BadRequest().json(ErrorResponse::new("Spreadsheet ID is required"))
        );
    };
    let Some(folder_id) = form.text("driveFolderId") else {
        return Ok(
            HttpResponse::BadRequest().json(ErrorResponse::new("Drive folder ID is required"))
        );
    };
    if validate_remote_id(spreadsheet_id).is_err() {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new("Spreadsheet ID is invalid")));
    }
    if validate_remote_id(folder_id).is_err() {
        return Ok(
            HttpResponse::BadRequest().json(ErrorResponse::new("Drive folder ID is invalid"))
        );
    }
    if !is_supported_image(&photo.data) {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new("Photo is not a valid image")));
    }

    let status = AttendanceStatus::from_form(form.text("status"));
    let location = GeoLocation {
        latitude: parse_coordinate(form.text("latitude")),
        longitude: parse_coordinate(form.text("longitude")),
    };

    let record = AttendanceRecord {
        employee_id: employee_id.to_string(),
        employee_name: employee_name.to_string(),
        photo: photo.data.clone(),
        captured_at: Local::now(),
        location,
        status,
    };

    let drive = service.get_drive(request);
    let sheets = service.get_sheets(request);

    match pipeline::record_upload(
        drive.as_ref(),
        sheets.as_ref(),
        &record,
        spreadsheet_id,
        folder_id,
    )
    .await
    {
        Ok(outcome) => {
            let data = AttendanceData {
                employee_id: record.employee_id,
                employee_name: record.employee_name,
                status,
                timestamp: format_local_timestamp(&record.captured_at),
                location,
                drive_file: outcome.drive_file.id,
                sheet_title: outcome.sheet_title,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                data,
                format!("{} recorded successfully", status.label()),
            )))
        }
        Err(e) if e.is_validation() => {
            Ok(HttpResponse::BadRequest().json(ErrorResponse::new(e.message())))
        }
        Err(e) => {
            error!("Attendance upload error: {e}");
            let message = if config.is_production() {
                "Internal server error".to_string()
            } else {
                e.message().to_string()
            };
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::with_message("Attendance upload failed", message)))
        }
    }
}
