//! 语言偏好存储抽象 Trait

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::error::{LocaleError, LocaleResult};

/// 保存当前语言偏好的存储键
pub const LANGUAGE_PREFERENCE_KEY: &str = "@IDMIS:current_language";

/// 偏好存储 Trait
///
/// 平台实现:
/// - 测试 / 嵌入: `MemoryPreferenceStore`
/// - 桌面 / CLI: `JsonFilePreferenceStore` (drawlocal-app)
///
/// 标签解析只读取，从不写入。
pub trait PreferenceStore: Send + Sync {
    /// 读取偏好值
    ///
    /// # Returns
    /// * `Ok(Some(value))` - 值存在
    /// * `Ok(None)` - 值不存在
    fn get(&self, key: &str) -> LocaleResult<Option<String>>;
}

/// 内存偏好存储
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 预置一个值（构建器风格）
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
        self
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) -> LocaleResult<()> {
        let mut values = self.values.write().map_err(poisoned)?;
        values.insert(key.into(), value.into());
        Ok(())
    }

    pub fn remove(&self, key: &str) -> LocaleResult<()> {
        let mut values = self.values.write().map_err(poisoned)?;
        values.remove(key);
        Ok(())
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> LocaleResult<Option<String>> {
        let values = self.values.read().map_err(poisoned)?;
        Ok(values.get(key).cloned())
    }
}

fn poisoned<T>(_: PoisonError<T>) -> LocaleError {
    LocaleError::StorageError("preference store lock poisoned".to_string())
}
