use serde::Serialize;

use super::entities::{AttendanceStatus, GeoLocation};
use crate::models::uploads::entities::DriveFile;

/// 流水线成功结果：已创建的 Drive 文件与写入的分表
#[derive(Debug, Clone)]
pub struct RecordOutcome {
    pub drive_file: DriveFile,
    pub sheet_title: String,
}

// 打卡接口响应数据
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceData {
    pub employee_id: String,
    pub employee_name: String,
    pub status: AttendanceStatus,
    /// 本地化时间文本
    pub timestamp: String,
    pub location: GeoLocation,
    /// Drive 文件 ID
    pub drive_file: String,
    pub sheet_title: String,
}

// 批量打卡的单条结果（fail-soft：失败不影响后续记录）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItemOutcome {
    pub employee_id: String,
    pub status: BatchItemStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<BatchRecordData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchItemStatus {
    Success,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRecordData {
    pub drive_file: String,
    pub sheet_title: String,
    pub message: String,
}

impl BatchItemOutcome {
    pub fn success(employee_id: impl Into<String>, data: BatchRecordData) -> Self {
        Self {
            employee_id: employee_id.into(),
            status: BatchItemStatus::Success,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(employee_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            status: BatchItemStatus::Failed,
            data: None,
            error: Some(error.into()),
        }
    }
}
