use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use super::GoogleAuthenticator;
use crate::errors::{AttendanceError, Result};
use crate::storage::SheetStorage;

/// Sheets v4 表格存储实现
pub struct GoogleSheetsStorage {
    auth: Arc<GoogleAuthenticator>,
    http: reqwest::Client,
    api_base: String,
}

impl GoogleSheetsStorage {
    pub fn new(auth: Arc<GoogleAuthenticator>, http: reqwest::Client, api_base: String) -> Self {
        Self {
            auth,
            http,
            api_base,
        }
    }

    /// 读取表格中已有的所有分表标题
    async fn list_sheet_titles(&self, spreadsheet_id: &str) -> Result<Vec<String>> {
        let token = self.auth.access_token().await?;
        let url = format!(
            "{}/v4/spreadsheets/{spreadsheet_id}?fields=sheets.properties.title",
            self.api_base
        );

        let response = self.http.get(&url).bearer_auth(token).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AttendanceError::remote_store(format!(
                "Sheets metadata fetch failed: {status} {body}"
            )));
        }

        let meta: SpreadsheetMeta = response.json().await?;
        Ok(meta
            .sheets
            .into_iter()
            .map(|sheet| sheet.properties.title)
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: String,
}

/// batchUpdate 的 addSheet 请求体
fn add_sheet_request(sheet_title: &str) -> serde_json::Value {
    serde_json::json!({
        "requests": [
            { "addSheet": { "properties": { "title": sheet_title } } }
        ]
    })
}

#[async_trait::async_trait]
impl SheetStorage for GoogleSheetsStorage {
    async fn ensure_sheet(&self, spreadsheet_id: &str, sheet_title: &str) -> Result<bool> {
        let titles = self.list_sheet_titles(spreadsheet_id).await?;
        if titles.iter().any(|title| title == sheet_title) {
            return Ok(false);
        }

        let token = self.auth.access_token().await?;
        let url = format!(
            "{}/v4/spreadsheets/{spreadsheet_id}:batchUpdate",
            self.api_base
        );
        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(&add_sheet_request(sheet_title))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AttendanceError::remote_store(format!(
                "Sheet creation failed: {status} {body}"
            )));
        }

        debug!("Created sheet '{sheet_title}' in spreadsheet {spreadsheet_id}");
        Ok(true)
    }

    async fn append_rows(
        &self,
        spreadsheet_id: &str,
        range: &str,
        rows: Vec<Vec<String>>,
    ) -> Result<()> {
        let token = self.auth.access_token().await?;
        let url = format!(
            "{}/v4/spreadsheets/{spreadsheet_id}/values/{range}:append?valueInputOption=RAW",
            self.api_base
        );
        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(&serde_json::json!({ "values": rows }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AttendanceError::remote_store(format!(
                "Sheet append failed: {status} {body}"
            )));
        }

        Ok(())
    }

    async fn write_header(
        &self,
        spreadsheet_id: &str,
        sheet_title: &str,
        headers: Vec<String>,
    ) -> Result<()> {
        let token = self.auth.access_token().await?;
        let url = format!(
            "{}/v4/spreadsheets/{spreadsheet_id}/values/{sheet_title}!A1:Z1?valueInputOption=RAW",
            self.api_base
        );
        let response = self
            .http
            .put(&url)
            .bearer_auth(token)
            .json(&serde_json::json!({ "values": [headers] }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AttendanceError::remote_store(format!(
                "Sheet header write failed: {status} {body}"
            )));
        }

        Ok(())
    }
}
