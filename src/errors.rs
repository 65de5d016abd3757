use std::fmt;

#[derive(Debug, Clone)]
pub enum ShortmapError {
    InvalidUrl(String),
    NotFound(String),
    GenerationExhausted(String),
}

impl ShortmapError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ShortmapError::InvalidUrl(_) => "E001",
            ShortmapError::NotFound(_) => "E002",
            ShortmapError::GenerationExhausted(_) => "E003",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ShortmapError::InvalidUrl(_) => "Invalid URL",
            ShortmapError::NotFound(_) => "Resource Not Found",
            ShortmapError::GenerationExhausted(_) => "Code Generation Exhausted",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ShortmapError::InvalidUrl(msg) => msg,
            ShortmapError::NotFound(msg) => msg,
            ShortmapError::GenerationExhausted(msg) => msg,
        }
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ShortmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ShortmapError {}

// 便捷的构造函数
impl ShortmapError {
    pub fn invalid_url<T: Into<String>>(msg: T) -> Self {
        ShortmapError::InvalidUrl(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        ShortmapError::NotFound(msg.into())
    }

    pub fn generation_exhausted<T: Into<String>>(msg: T) -> Self {
        ShortmapError::GenerationExhausted(msg.into())
    }
}

impl From<url::ParseError> for ShortmapError {
    fn from(err: url::ParseError) -> Self {
        ShortmapError::InvalidUrl(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShortmapError>;
