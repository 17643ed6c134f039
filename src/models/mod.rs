pub mod attendance;
pub mod common;
pub mod uploads;

pub use common::response::{ApiResponse, ErrorResponse};

/// 程序启动时间（用于记录预处理耗时）
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
