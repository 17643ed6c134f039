use serde::{Deserialize, Serialize};

// 统一的API成功响应结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }
}

// 统一的API错误响应结构
//
// `error` 是面向机器的标签，`message` 是面向人的说明。
// 校验失败 (400) 只带 `error`，流水线失败 (500) 两者都带。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }

    pub fn with_message(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_shape() {
        // 400 响应体只含 error 字段
        let body = serde_json::to_value(ErrorResponse::new("No file provided")).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "No file provided" }));
    }

    #[test]
    fn test_pipeline_error_shape() {
        let body = serde_json::to_value(ErrorResponse::with_message(
            "Upload failed",
            "Remote Store Error: 403 Forbidden",
        ))
        .unwrap();
        assert_eq!(body["error"], "Upload failed");
        assert!(body["message"].as_str().unwrap().contains("403"));
    }

    #[test]
    fn test_success_shape() {
        let body =
            serde_json::to_value(ApiResponse::success(serde_json::json!({"x": 1}), "ok")).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "ok");
        assert_eq!(body["data"]["x"], 1);
    }
}
