//! JSON 文件偏好存储
//!
//! 浏览器 local storage 的桌面替代：一个 `{ "key": "value" }` 形式的 JSON 文件。
//! 默认位于 `<config_dir>/drawlocal/preferences.json`。

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use drawlocal_core::{LocaleError, LocaleResult, PreferenceStore};

const APP_DIR: &str = "drawlocal";
const FILE_NAME: &str = "preferences.json";

/// JSON 文件偏好存储
///
/// 每次读取都直接访问文件，不做缓存；标签解析本身只读一次。
#[derive(Debug, Clone)]
pub struct JsonFilePreferenceStore {
    path: PathBuf,
}

impl JsonFilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 默认文件路径，平台没有配置目录时返回 `None`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(FILE_NAME))
    }

    /// 使用默认路径创建
    ///
    /// # Errors
    /// 平台没有配置目录时返回 `StorageError`。
    pub fn open_default() -> LocaleResult<Self> {
        Self::default_path()
            .map(Self::new)
            .ok_or_else(|| LocaleError::StorageError("config directory not found".to_string()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> LocaleResult<BTreeMap<String, String>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(LocaleError::StorageError(format!(
                    "{}: {e}",
                    self.path.display()
                )))
            }
        };
        if json.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&json)?)
    }

    /// 写入一个偏好值（保留文件中的其他键）
    pub fn set(&self, key: &str, value: &str) -> LocaleResult<()> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| LocaleError::StorageError(format!("{}: {e}", parent.display())))?;
        }
        let json = serde_json::to_string_pretty(&values)?;
        fs::write(&self.path, json)
            .map_err(|e| LocaleError::StorageError(format!("{}: {e}", self.path.display())))?;

        log::info!("Preference '{key}' saved to {}", self.path.display());
        Ok(())
    }
}

impl PreferenceStore for JsonFilePreferenceStore {
    fn get(&self, key: &str) -> LocaleResult<Option<String>> {
        log::debug!("Reading preference '{key}' from {}", self.path.display());
        Ok(self.read_all()?.remove(key))
    }
}
