use serde::{Deserialize, Serialize};

/// Drive 中已创建的文件
///
/// 上传调用返回后即不可变；链接在返回时即可访问。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriveFile {
    // 文件的唯一标识符
    pub id: String,
    // 远端显示名
    pub name: String,
    // 网页查看链接
    pub view_link: String,
    // 直接下载链接
    pub download_link: String,
}
