use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

use super::GoogleAuthenticator;
use crate::errors::{AttendanceError, Result};
use crate::models::uploads::entities::DriveFile;
use crate::storage::DriveStorage;

// multipart/related 的固定分隔串
const UPLOAD_BOUNDARY: &str = "attendance_drive_upload";

/// Drive v3 对象存储实现
pub struct GoogleDriveStorage {
    auth: Arc<GoogleAuthenticator>,
    http: reqwest::Client,
    api_base: String,
}

impl GoogleDriveStorage {
    pub fn new(auth: Arc<GoogleAuthenticator>, http: reqwest::Client, api_base: String) -> Self {
        Self {
            auth,
            http,
            api_base,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DriveCreateResponse {
    id: String,
    name: String,
    #[serde(default)]
    web_view_link: Option<String>,
    #[serde(default)]
    web_content_link: Option<String>,
}

#[async_trait::async_trait]
impl DriveStorage for GoogleDriveStorage {
    async fn upload_file(
        &self,
        payload: &[u8],
        name: &str,
        folder_id: Option<&str>,
    ) -> Result<DriveFile> {
        if payload.is_empty() {
            return Err(AttendanceError::validation("Upload payload is empty"));
        }
        if name.trim().is_empty() {
            return Err(AttendanceError::validation("File name is required"));
        }

        let metadata = file_metadata(name, folder_id);
        let body = multipart_related_body(&metadata.to_string(), payload, UPLOAD_BOUNDARY);

        let token = self.auth.access_token().await?;
        let url = format!(
            "{}/upload/drive/v3/files?uploadType=multipart&fields=id,name,webViewLink,webContentLink&supportsAllDrives=true",
            self.api_base
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .header(
                CONTENT_TYPE,
                format!("multipart/related; boundary={UPLOAD_BOUNDARY}"),
            )
            .body(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AttendanceError::remote_store(format!(
                "Drive upload failed: {status} {body}"
            )));
        }

        let created: DriveCreateResponse = response.json().await?;
        Ok(DriveFile {
            id: created.id,
            name: created.name,
            view_link: created.web_view_link.unwrap_or_default(),
            download_link: created.web_content_link.unwrap_or_default(),
        })
    }
}

/// 文件元数据部分：显示名 + 可选父文件夹
fn file_metadata(name: &str, folder_id: Option<&str>) -> serde_json::Value {
    let mut metadata = serde_json::json!({ "name": name });
    if let Some(folder) = folder_id {
        metadata["parents"] = serde_json::json!([folder]);
    }
    metadata
}

/// 手工拼装 multipart/related 请求体（元数据 JSON + 二进制媒体两部分）
fn multipart_related_body(metadata: &str, media: &[u8], boundary: &str) -> Vec<u8> {
    let mut body = Vec::with_capacity(metadata.len() + media.len() + 256);
    body.extend_from_slice(
        format!("--{boundary}\r\nContent-Type: application/json; charset=UTF-8\r\n\r\n{metadata}\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(
        format!("--{boundary}\r\nContent-Type: application/octet-stream\r\n\r\n").as_bytes(),
    );
    body.extend_from_slice(media);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    body
}
