//! 上传-登记编排流水线
//!
//! 校验后的记录走固定顺序：上传照片 → 确保月度分表存在 →
//! 追加打卡行。单条与批量路径共用这里的命名和行构造函数。

use chrono::{DateTime, Local};
use tracing::info;

use crate::errors::Result;
use crate::models::attendance::entities::AttendanceRecord;
use crate::models::attendance::responses::RecordOutcome;
use crate::models::uploads::entities::DriveFile;
use crate::storage::{DriveStorage, SheetStorage};
use crate::utils::format_local_timestamp;

/// 打卡分表的固定列序
pub const ATTENDANCE_HEADERS: [&str; 7] = [
    "Timestamp",
    "Employee ID",
    "Employee Name",
    "Status",
    "Location",
    "View Link",
    "Download Link",
];

/// 由记录字段和拍摄时间推导确定性的照片文件名
///
/// 格式 `{id}_{name}_{status}_{YYYY-MM-DD}_{HH-MM-SS}.jpg`，
/// 时间段里的 ':' 已换成 '-'。
pub fn photo_file_name(record: &AttendanceRecord) -> String {
    format!(
        "{}_{}_{}_{}.jpg",
        record.employee_id,
        record.employee_name,
        record.status,
        record.captured_at.format("%Y-%m-%d_%H-%M-%S"),
    )
}

/// 按拍摄时间推导月度分表标题
pub fn sheet_bucket(captured_at: &DateTime<Local>) -> String {
    format!("Attendance_{}", captured_at.format("%Y-%m"))
}

/// 固定列序的打卡行：时间、工号、姓名、状态、位置、查看链接、下载链接
pub fn attendance_row(record: &AttendanceRecord, file: &DriveFile) -> Vec<String> {
    vec![
        format_local_timestamp(&record.captured_at),
        record.employee_id.clone(),
        record.employee_name.clone(),
        record.status.to_string(),
        record.location.as_cell(),
        file.view_link.clone(),
        file.download_link.clone(),
    ]
}

/// 执行一条记录的完整流水线
///
/// 上传失败立刻返回，不触碰表格。步骤之间没有事务：上传成功后
/// 分表或追加失败会留下无对应行的 Drive 文件，不做补偿清理，
/// 调用方按 best-effort 处理。
pub async fn record_upload(
    drive: &dyn DriveStorage,
    sheets: &dyn SheetStorage,
    record: &AttendanceRecord,
    spreadsheet_id: &str,
    folder_id: &str,
) -> Result<RecordOutcome> {
    let file_name = photo_file_name(record);

    info!("Uploading attendance photo: {file_name}");
    let drive_file = drive
        .upload_file(&record.photo, &file_name, Some(folder_id))
        .await?;

    let sheet_title = sheet_bucket(&record.captured_at);
    let created = sheets.ensure_sheet(spreadsheet_id, &sheet_title).await?;
    if created {
        // 新建的月度分表先写表头
        sheets
            .write_header(
                spreadsheet_id,
                &sheet_title,
                ATTENDANCE_HEADERS.iter().map(|h| h.to_string()).collect(),
            )
            .await?;
    }

    info!("Appending attendance record to sheet: {sheet_title}");
    sheets
        .append_rows(
            spreadsheet_id,
            &format!("{sheet_title}!A:G"),
            vec![attendance_row(record, &drive_file)],
        )
        .await?;

    Ok(RecordOutcome {
        drive_file,
        sheet_title,
    })
}
