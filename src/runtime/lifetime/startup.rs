use std::sync::Arc;

use tracing::warn;

use crate::storage::{DriveStorage, SheetStorage, create_remote_stores};

pub struct StartupContext {
    pub drive: Arc<dyn DriveStorage>,
    pub sheets: Arc<dyn SheetStorage>,
}

/// 准备服务器启动的上下文
///
/// 读取服务账号凭证并构建两个远端存储句柄；凭证缺失或损坏时
/// 直接终止启动（配置错误没有降级路径）。
pub async fn prepare_server_startup() -> StartupContext {
    let stores = create_remote_stores()
        .await
        .expect("Failed to create remote store backends");
    warn!("Google Drive and Sheets backends initialized");

    StartupContext {
        drive: stores.drive,
        sheets: stores.sheets,
    }
}
