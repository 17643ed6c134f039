use once_cell::sync::Lazy;
use regex::Regex;

// Drive / Sheets 标识符只含字母、数字、下划线和连字符
static REMOTE_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid remote id regex"));

/// 校验表格或文件夹 ID 的格式
pub fn validate_remote_id(id: &str) -> Result<(), &'static str> {
    if id.is_empty() {
        return Err("Identifier must not be empty");
    }
    if !REMOTE_ID_RE.is_match(id) {
        return Err("Identifier must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

/// 解析可选的经纬度字段，缺失或无法解析时取 0
pub fn parse_coordinate(raw: Option<&str>) -> f64 {
    raw.and_then(|value| value.parse::<f64>().ok())
        .unwrap_or(0.0)
}
