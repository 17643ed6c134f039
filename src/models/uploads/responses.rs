use serde::Serialize;

// 通用上传接口响应数据
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveUploadData {
    pub file_name: String,
    pub drive_id: String,
    pub view_link: String,
    pub download_link: String,
    /// 本地化时间文本
    pub uploaded_at: String,
}
