//! URL 验证模块
//!
//! 只接受绝对的 http/https URL

use url::Url;

/// URL 验证错误
#[derive(Debug)]
pub enum UrlValidationError {
    Empty,
    UnsupportedScheme(String),
    Malformed(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "URL cannot be empty"),
            Self::UnsupportedScheme(scheme) => write!(
                f,
                "Unsupported scheme: {}. Only http:// and https:// are allowed",
                scheme
            ),
            Self::Malformed(msg) => write!(f, "Invalid URL format: {}", msg),
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// 验证链接目标
///
/// 检查项目：
/// 1. URL 不为空（空白字符视为空）
/// 2. URL 能够解析为绝对 URL
/// 3. scheme 必须是 http 或 https（javascript:, data:, ftp: 等一律拒绝）
pub fn validate_url(raw: &str) -> Result<(), UrlValidationError> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    // Url::parse 已将 scheme 转为小写
    let parsed = Url::parse(raw).map_err(|e| UrlValidationError::Malformed(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(UrlValidationError::UnsupportedScheme(format!("{}:", other))),
    }
}
