//! 统一错误类型定义
//!
//! 标签解析本身永不失败；这里的错误只来自覆盖（extend）和偏好存储。

use serde::Serialize;
use thiserror::Error;

/// 标签层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum LocaleError {
    /// 键路径不在固定 schema 中
    #[error("Unknown label key: {0}")]
    UnknownKey(String),

    /// 覆盖值不是字符串，或覆盖结构不是对象
    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    /// 覆盖值为空
    #[error("Empty value for label key: {0}")]
    EmptyValue(String),

    /// 偏好存储读写失败
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 序列化错误
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// 标签层 Result 类型别名
pub type LocaleResult<T> = std::result::Result<T, LocaleError>;

impl From<serde_json::Error> for LocaleError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LocaleError::UnknownKey("draw.toolbar.buttons.hexagon".to_string());
        assert_eq!(
            err.to_string(),
            "Unknown label key: draw.toolbar.buttons.hexagon"
        );

        let err = LocaleError::InvalidValue {
            key: "draw.handlers.circle.radius".to_string(),
            reason: "expected a string".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for 'draw.handlers.circle.radius': expected a string"
        );
    }

    #[test]
    fn test_error_serializes_with_code_tag() {
        let err = LocaleError::EmptyValue("edit.toolbar.actions.save.text".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "EmptyValue");
        assert_eq!(json["details"], "edit.toolbar.actions.save.text");
    }
}
