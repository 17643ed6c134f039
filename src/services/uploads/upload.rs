use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Local;
use tracing::{error, info};

use super::UploadService;
use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::uploads::responses::DriveUploadData;
use crate::models::{ApiResponse, ErrorResponse};
use crate::storage::{DriveStorage, SheetStorage};
use crate::utils::validate::validate_remote_id;
use crate::utils::{collect_form, format_local_timestamp};

// 通用上传默认写入的分表
const DEFAULT_SHEET_TITLE: &str = "Uploads";

/// 通用上传流水线：上传文件 → 确保分表存在 → 追加链接行
///
/// 行格式 `[fileName, viewLink, downloadLink, uploadedAt]`，范围
/// `{sheetTitle}!A:D`。与打卡流水线相同，步骤间无事务。
pub(crate) async fn forward_upload(
    drive: &dyn DriveStorage,
    sheets: &dyn SheetStorage,
    payload: &[u8],
    file_name: &str,
    spreadsheet_id: &str,
    sheet_title: &str,
    folder_id: Option<&str>,
) -> Result<DriveUploadData> {
    info!("Uploading {file_name} to Google Drive");
    let file = drive.upload_file(payload, file_name, folder_id).await?;

    sheets.ensure_sheet(spreadsheet_id, sheet_title).await?;

    let uploaded_at = format_local_timestamp(&Local::now());
    info!("Saving link to sheet: {sheet_title}");
    sheets
        .append_rows(
            spreadsheet_id,
            &format!("{sheet_title}!A:D"),
            vec![vec![
                file_name.to_string(),
                file.view_link.clone(),
                file.download_link.clone(),
                uploaded_at.clone(),
            ]],
        )
        .await?;

    Ok(DriveUploadData {
        file_name: file.name,
        drive_id: file.id,
        view_link: file.view_link,
        download_link: file.download_link,
        uploaded_at,
    })
}

pub async fn handle_upload(
    service: &UploadService,
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

    let file = match form.file.as_ref() {
        Some(file) if !file.data.is_empty() => file,
        _ => {
            return Ok(HttpResponse::BadRequest().json(ErrorResponse::new("No file provided")));
        }
    };
    let Some(spreadsheet_id) = form.text("spreadsheetId") else {
        return Ok(
            HttpResponse::BadRequest().json(ErrorResponse::new("Spreadsheet ID is required"))
        );
    };
    if validate_remote_id(spreadsheet_id).is_err() {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new("Spreadsheet ID is invalid")));
    }
    let folder_id = form.text("folderId");
    if let Some(folder_id) = folder_id
        && validate_remote_id(folder_id).is_err()
    {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new("Folder ID is invalid")));
    }

    let sheet_title = form.text_or("sheetTitle", DEFAULT_SHEET_TITLE);
    // 未指定 fileName 时沿用原始文件名
    let file_name = form.text_or("fileName", &file.original_name);
    if file_name.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new("File name is required")));
    }

    let drive = service.get_drive(request);
    let sheets = service.get_sheets(request);

    match forward_upload(
        drive.as_ref(),
        sheets.as_ref(),
        &file.data,
        file_name,
        spreadsheet_id,
        sheet_title,
        folder_id,
    )
    .await
    {
        Ok(data) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            data,
            "File uploaded successfully",
        ))),
        Err(e) if e.is_validation() => {
            Ok(HttpResponse::BadRequest().json(ErrorResponse::new(e.message())))
        }
        Err(e) => {
            error!("Upload error: {e}");
            let message = if config.is_production() {
                "Internal server error".to_string()
            } else {
                e.message().to_string()
            };
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::with_message("Upload failed", message)))
        }
    }
}
