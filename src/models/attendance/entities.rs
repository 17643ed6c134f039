use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

// 打卡地理位置
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoLocation {
    /// 表格单元格中的位置文本，格式 "lat, lon"
    pub fn as_cell(&self) -> String {
        format!("{}, {}", self.latitude, self.longitude)
    }
}

// 打卡类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[serde(rename = "check-in")]
    CheckIn,
    #[serde(rename = "check-out")]
    CheckOut,
}

impl AttendanceStatus {
    /// 从表单字段解析，未知或缺失一律按 check-in 处理
    pub fn from_form(value: Option<&str>) -> Self {
        match value {
            Some("check-out") => AttendanceStatus::CheckOut,
            _ => AttendanceStatus::CheckIn,
        }
    }

    /// 成功消息中使用的标签
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::CheckIn => "Check-in",
            AttendanceStatus::CheckOut => "Check-out",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttendanceStatus::CheckIn => write!(f, "check-in"),
            AttendanceStatus::CheckOut => write!(f, "check-out"),
        }
    }
}

/// 一次打卡提交
///
/// 请求期间构造，走完流水线即丢弃，不在进程内持久化。
#[derive(Debug, Clone)]
pub struct AttendanceRecord {
    pub employee_id: String,
    pub employee_name: String,
    pub photo: Vec<u8>,
    pub captured_at: DateTime<Local>,
    pub location: GeoLocation,
    pub status: AttendanceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_form() {
        assert_eq!(
            AttendanceStatus::from_form(Some("check-out")),
            AttendanceStatus::CheckOut
        );
        assert_eq!(
            AttendanceStatus::from_form(Some("check-in")),
            AttendanceStatus::CheckIn
        );
        // 默认 check-in
        assert_eq!(AttendanceStatus::from_form(None), AttendanceStatus::CheckIn);
        assert_eq!(
            AttendanceStatus::from_form(Some("whatever")),
            AttendanceStatus::CheckIn
        );
    }

    #[test]
    fn test_status_display() {
        assert_eq!(AttendanceStatus::CheckIn.to_string(), "check-in");
        assert_eq!(AttendanceStatus::CheckOut.to_string(), "check-out");
    }

    #[test]
    fn test_location_cell() {
        let loc = GeoLocation {
            latitude: -7.25,
            longitude: 112.75,
        };
        assert_eq!(loc.as_cell(), "-7.25, 112.75");
    }

    #[test]
    fn test_status_serde_rename() {
        let json = serde_json::to_string(&AttendanceStatus::CheckOut).unwrap();
        assert_eq!(json, "\"check-out\"");
    }
}
