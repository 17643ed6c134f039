//! 批量打卡
//!
//! 严格按顺序逐条走单条流水线（避免对同一范围的并发追加），
//! fail-soft：单条失败记入结果继续处理，不中断整批。

use tracing::warn;

use super::pipeline;
use crate::models::attendance::entities::AttendanceRecord;
use crate::models::attendance::responses::{BatchItemOutcome, BatchRecordData};
use crate::storage::{DriveStorage, SheetStorage};

pub async fn record_batch(
    drive: &dyn DriveStorage,
    sheets: &dyn SheetStorage,
    records: &[AttendanceRecord],
    spreadsheet_id: &str,
    folder_id: &str,
) -> Vec<BatchItemOutcome> {
    let mut results = Vec::with_capacity(records.len());

    for record in records {
        match pipeline::record_upload(drive, sheets, record, spreadsheet_id, folder_id).await {
            Ok(outcome) => {
                results.push(BatchItemOutcome::success(
                    &record.employee_id,
                    BatchRecordData {
                        drive_file: outcome.drive_file.id,
                        sheet_title: outcome.sheet_title,
                        message: format!(
                            "Attendance recorded successfully for {}",
                            record.employee_name
                        ),
                    },
                ));
            }
            Err(e) => {
                warn!(
                    "Batch attendance record failed for {}: {e}",
                    record.employee_id
                );
                results.push(BatchItemOutcome::failed(&record.employee_id, e.message()));
            }
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attendance::entities::{AttendanceStatus, GeoLocation};
    use crate::models::attendance::responses::BatchItemStatus;
    use crate::services::testing::{MockDrive, MockSheets, jpeg_payload};
    use chrono::{Local, TimeZone};

    fn record_for(employee_id: &str) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: employee_id.to_string(),
            employee_name: format!("Employee {employee_id}"),
            photo: jpeg_payload(),
            captured_at: Local.with_ymd_and_hms(2024, 3, 5, 8, 0, 0).unwrap(),
            location: GeoLocation {
                latitude: 0.0,
                longitude: 0.0,
            },
            status: AttendanceStatus::CheckIn,
        }
    }

    #[tokio::test]
    async fn test_batch_is_fail_soft() {
        let drive = MockDrive::failing_on(2);
        let sheets = MockSheets::default();
        let records = vec![record_for("EMP001"), record_for("EMP002"), record_for("EMP003")];

        let results = record_batch(&drive, &sheets, &records, "SID", "FID").await;

        // 三条输入三条结果，中间失败不提前终止
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].status, BatchItemStatus::Success);
        assert_eq!(results[1].status, BatchItemStatus::Failed);
        assert_eq!(results[2].status, BatchItemStatus::Success);
        assert_eq!(results[1].employee_id, "EMP002");
        assert!(results[1].error.as_deref().unwrap().contains("injected"));
        assert_eq!(drive.upload_count(), 3);
    }

    #[tokio::test]
    async fn test_batch_success_payload() {
        let drive = MockDrive::default();
        let sheets = MockSheets::default();
        let records = vec![record_for("EMP001")];

        let results = record_batch(&drive, &sheets, &records, "SID", "FID").await;

        assert_eq!(results.len(), 1);
        let data = results[0].data.as_ref().unwrap();
        assert_eq!(data.drive_file, "drive-1");
        assert_eq!(data.sheet_title, "Attendance_2024-03");
        assert!(data.message.contains("Employee EMP001"));
        assert!(results[0].error.is_none());
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let drive = MockDrive::default();
        let sheets = MockSheets::default();

        let results = record_batch(&drive, &sheets, &[], "SID", "FID").await;

        assert!(results.is_empty());
        assert_eq!(drive.upload_count(), 0);
    }
}
