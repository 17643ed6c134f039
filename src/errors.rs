//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_attendance_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum AttendanceError {
            $($variant(String),)*
        }

        impl AttendanceError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(AttendanceError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(AttendanceError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(AttendanceError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl AttendanceError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        AttendanceError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_attendance_errors! {
    Validation("E001", "Validation Error"),
    Configuration("E002", "Configuration Error"),
    RemoteStore("E003", "Remote Store Error"),
    Serialization("E004", "Serialization Error"),
}

impl AttendanceError {
    /// 请求字段校验错误在边界层转为 400，不进入流水线
    pub fn is_validation(&self) -> bool {
        matches!(self, AttendanceError::Validation(_))
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for AttendanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for AttendanceError {}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for AttendanceError {
    fn from(err: std::io::Error) -> Self {
        AttendanceError::Configuration(err.to_string())
    }
}

impl From<serde_json::Error> for AttendanceError {
    fn from(err: serde_json::Error) -> Self {
        AttendanceError::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for AttendanceError {
    fn from(err: reqwest::Error) -> Self {
        AttendanceError::RemoteStore(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for AttendanceError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        AttendanceError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AttendanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AttendanceError::validation("test").code(), "E001");
        assert_eq!(AttendanceError::configuration("test").code(), "E002");
        assert_eq!(AttendanceError::remote_store("test").code(), "E003");
        assert_eq!(AttendanceError::serialization("test").code(), "E004");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            AttendanceError::remote_store("test").error_type(),
            "Remote Store Error"
        );
        assert_eq!(
            AttendanceError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = AttendanceError::validation("Employee ID is required");
        assert_eq!(err.message(), "Employee ID is required");
    }

    #[test]
    fn test_is_validation() {
        assert!(AttendanceError::validation("x").is_validation());
        assert!(!AttendanceError::remote_store("x").is_validation());
    }

    #[test]
    fn test_format_simple() {
        let err = AttendanceError::remote_store("Drive upload failed");
        let formatted = err.format_simple();
        assert!(formatted.contains("Remote Store Error"));
        assert!(formatted.contains("Drive upload failed"));
    }
}
