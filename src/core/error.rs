// 错误处理系统
// 只在输入边界使用：配置文件、生物记录、版本编号
// 孵蛋生成器本身不返回错误，任何不合法条件都只是不产生候选

use std::io;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LegalityError {
    #[error("配置错误: {0}")]
    ConfigError(String),
    #[error("文件错误: {0}")]
    FileError(String),
    #[error("解析错误: {0}")]
    ParseError(String),
    #[error("未知版本编号: {0}")]
    UnknownVersion(u8),
    #[error("输入无效: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, LegalityError>;

impl From<io::Error> for LegalityError {
    fn from(error: io::Error) -> Self {
        LegalityError::FileError(error.to_string())
    }
}

impl From<serde_json::Error> for LegalityError {
    fn from(error: serde_json::Error) -> Self {
        LegalityError::ParseError(error.to_string())
    }
}

impl From<toml::de::Error> for LegalityError {
    fn from(error: toml::de::Error) -> Self {
        LegalityError::ConfigError(error.to_string())
    }
}

impl From<toml::ser::Error> for LegalityError {
    fn from(error: toml::ser::Error) -> Self {
        LegalityError::ConfigError(error.to_string())
    }
}

impl LegalityError {
    // 输入类错误可以由调用方修正后重试
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            LegalityError::InvalidInput(_) | LegalityError::UnknownVersion(_) | LegalityError::ParseError(_)
        )
    }
}

// 错误创建辅助宏
#[macro_export]
macro_rules! legality_error {
    ($variant:ident, $msg:expr) => {
        $crate::core::error::LegalityError::$variant($msg.to_string())
    };
    ($variant:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::core::error::LegalityError::$variant(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! legality_bail {
    ($variant:ident, $msg:expr) => {
        return Err($crate::legality_error!($variant, $msg))
    };
    ($variant:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::legality_error!($variant, $fmt, $($arg)*))
    };
}
