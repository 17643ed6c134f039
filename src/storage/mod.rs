use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::uploads::entities::DriveFile;

pub mod google;

/// 对象存储（Google Drive）
#[async_trait::async_trait]
pub trait DriveStorage: Send + Sync {
    // 以给定显示名上传二进制文件，可选放入指定文件夹
    async fn upload_file(
        &self,
        payload: &[u8],
        name: &str,
        folder_id: Option<&str>,
    ) -> Result<DriveFile>;
}

/// 表格存储（Google Sheets）
#[async_trait::async_trait]
pub trait SheetStorage: Send + Sync {
    // 确保指定标题的表存在，返回本次是否新建（幂等）
    async fn ensure_sheet(&self, spreadsheet_id: &str, sheet_title: &str) -> Result<bool>;
    // 在范围内最后一行之后追加，不覆盖已有数据；
    // 行可短于范围列数，远端以空单元格补齐
    async fn append_rows(
        &self,
        spreadsheet_id: &str,
        range: &str,
        rows: Vec<Vec<String>>,
    ) -> Result<()>;
    // 写入表头行（A1 起）
    async fn write_header(
        &self,
        spreadsheet_id: &str,
        sheet_title: &str,
        headers: Vec<String>,
    ) -> Result<()>;
}

/// 两个远端存储的句柄，进程启动时构建一次并注入
pub struct RemoteStores {
    pub drive: Arc<dyn DriveStorage>,
    pub sheets: Arc<dyn SheetStorage>,
}

pub async fn create_remote_stores() -> Result<RemoteStores> {
    let config = AppConfig::get();
    let auth = Arc::new(google::GoogleAuthenticator::from_config(&config.google)?);
    let http = reqwest::Client::new();

    Ok(RemoteStores {
        drive: Arc::new(google::GoogleDriveStorage::new(
            auth.clone(),
            http.clone(),
            config.google.drive_api_base.clone(),
        )),
        sheets: Arc::new(google::GoogleSheetsStorage::new(
            auth,
            http,
            config.google.sheets_api_base.clone(),
        )),
    })
}
