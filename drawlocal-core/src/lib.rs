//! Localized labels for the map drawing toolbar.
//!
//! 提供绘图工具栏、绘图提示和编辑工具栏的文本。语言在初始化时由存储的偏好值一次性决定，
//! 之后标签集不可变，可在任意多个消费者之间共享。
//!
//! ```
//! use drawlocal_core::{resolve_from_store, MemoryPreferenceStore, LANGUAGE_PREFERENCE_KEY};
//!
//! let store = MemoryPreferenceStore::new().with(LANGUAGE_PREFERENCE_KEY, "en");
//! let (language, labels) = resolve_from_store(&store, LANGUAGE_PREFERENCE_KEY);
//! assert_eq!(language.code(), "en");
//! assert_eq!(labels.get("edit.toolbar.actions.cancel.text"), Some("Cancel"));
//! ```

pub mod error;
pub mod labels;
mod language;
mod preference;

pub use error::{LocaleError, LocaleResult};
pub use labels::{resolve, LabelSet, LABEL_KEYS};
pub use language::Language;
pub use preference::{MemoryPreferenceStore, PreferenceStore, LANGUAGE_PREFERENCE_KEY};

/// 绘图插件版本
pub const DRAW_VERSION: &str = "0.4.2";

/// 从偏好存储读取一次语言偏好并构建标签集
///
/// 读取失败不会向上传播：记录 warn 日志后按"偏好缺失"处理，即落到阿尔巴尼亚语。
pub fn resolve_from_store(store: &dyn PreferenceStore, key: &str) -> (Language, LabelSet) {
    let preference = match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Failed to read language preference '{key}': {e}");
            None
        }
    };
    let language = Language::from_preference(preference.as_deref());
    (language, LabelSet::for_language(language))
}
