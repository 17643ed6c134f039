//! multipart 表单收集
//!
//! 把一次 multipart 提交整体读入内存：一个可选的 `file` 部分，
//! 其余文本字段按名字收集。文件部分在流式读取时按字节上限截断。

use std::collections::HashMap;

use actix_multipart::Multipart;
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;

use crate::errors::{AttendanceError, Result};

/// 提交的文件部分
#[derive(Debug, Clone)]
pub struct FilePart {
    pub data: Vec<u8>,
    pub original_name: String,
    pub content_type: String,
}

/// 收集完成的表单
#[derive(Debug, Default)]
pub struct FormPayload {
    pub file: Option<FilePart>,
    fields: HashMap<String, String>,
}

impl FormPayload {
    /// 取文本字段；缺失或为空串都按缺失处理
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|value| value.as_str())
            .filter(|value| !value.is_empty())
    }

    /// 取文本字段，缺失时使用默认值
    pub fn text_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.text(name).unwrap_or(default)
    }

    #[cfg(test)]
    pub fn insert_field(&mut self, name: &str, value: &str) {
        self.fields.insert(name.to_string(), value.to_string());
    }
}

pub async fn collect_form(mut payload: Multipart, max_file_size: usize) -> Result<FormPayload> {
    let mut form = FormPayload::default();

    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();
        let original_name = content_disposition
            .and_then(|cd| cd.get_filename())
            .map(|s| s.to_string());
        let content_type = field
            .content_type()
            .map(|ct| ct.to_string())
            .unwrap_or_default();

        let is_file = name == "file";
        if is_file && form.file.is_some() {
            return Err(AttendanceError::validation(
                "Only one file can be uploaded at a time",
            ));
        }

        let mut data: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            let bytes = chunk.map_err(|e| {
                AttendanceError::validation(format!("Malformed multipart payload: {e}"))
            })?;
            if is_file && data.len() + bytes.len() > max_file_size {
                return Err(AttendanceError::validation("File size exceeds the limit"));
            }
            data.extend_from_slice(&bytes);
        }

        if is_file {
            form.file = Some(FilePart {
                data,
                original_name: original_name.unwrap_or_default(),
                content_type,
            });
        } else if !name.is_empty() {
            form.fields.insert(
                name,
                String::from_utf8_lossy(&data).trim().to_string(),
            );
        }
    }

    Ok(form)
}
