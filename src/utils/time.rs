use chrono::{DateTime, Local};

/// 表格与响应里的本地化时间文本（日/月/年, 时.分.秒）
pub fn format_local_timestamp(at: &DateTime<Local>) -> String {
    at.format("%-d/%-m/%Y, %H.%M.%S").to_string()
}
