//! Label context bootstrap for drawlocal.
//!
//! Provides `LabelContext` (the resolved, shareable label set) and
//! `LabelContextBuilder` (preference store / overrides injection).
//! Hosts construct one context at startup, or one per session when a single
//! process serves several users.

pub mod adapters;

use std::sync::Arc;

use drawlocal_core::{
    resolve_from_store, Language, LabelSet, LocaleResult, PreferenceStore, LANGUAGE_PREFERENCE_KEY,
};
use serde_json::Value;

/// 已解析的标签上下文
///
/// 克隆只复制 `Arc`，所有克隆共享同一个不可变标签集。
#[derive(Debug, Clone)]
pub struct LabelContext {
    language: Language,
    labels: Arc<LabelSet>,
}

impl LabelContext {
    /// 构建时选定的语言
    pub fn language(&self) -> Language {
        self.language
    }

    /// 共享的标签集
    pub fn labels(&self) -> Arc<LabelSet> {
        Arc::clone(&self.labels)
    }

    /// 按键路径读取标签（供各绘图 handler 使用）
    pub fn get(&self, path: &str) -> Option<&str> {
        self.labels.get(path)
    }
}

/// Builder for [`LabelContext`].
///
/// # Optional
/// - `preference_store` — where the language preference is read from; without
///   one the preference counts as absent
/// - `preference` — explicit preference value, takes precedence over the store
/// - `storage_key` — defaults to `LANGUAGE_PREFERENCE_KEY`
/// - `overrides` — nested JSON object merged over the resolved labels
pub struct LabelContextBuilder {
    preference_store: Option<Arc<dyn PreferenceStore>>,
    preference: Option<String>,
    storage_key: String,
    overrides: Option<Value>,
}

impl LabelContextBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            preference_store: None,
            preference: None,
            storage_key: LANGUAGE_PREFERENCE_KEY.to_string(),
            overrides: None,
        }
    }

    #[must_use]
    pub fn preference_store(mut self, store: Arc<dyn PreferenceStore>) -> Self {
        self.preference_store = Some(store);
        self
    }

    #[must_use]
    pub fn preference(mut self, value: impl Into<String>) -> Self {
        self.preference = Some(value.into());
        self
    }

    #[must_use]
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    #[must_use]
    pub fn overrides(mut self, overrides: Value) -> Self {
        self.overrides = Some(overrides);
        self
    }

    /// Build the `LabelContext`.
    ///
    /// The preference is read at most once, here. Store failures are logged and
    /// treated as an absent preference.
    ///
    /// # Errors
    /// Returns `UnknownKey` / `InvalidValue` / `EmptyValue` if overrides are invalid.
    pub fn build(self) -> LocaleResult<LabelContext> {
        let (language, labels) = if let Some(preference) = self.preference.as_deref() {
            let language = Language::from_preference(Some(preference));
            (language, LabelSet::for_language(language))
        } else if let Some(store) = &self.preference_store {
            resolve_from_store(store.as_ref(), &self.storage_key)
        } else {
            log::debug!("No preference store configured, language preference treated as absent");
            let language = Language::from_preference(None);
            (language, LabelSet::for_language(language))
        };

        let labels = match &self.overrides {
            Some(overrides) => labels.extend(overrides)?,
            None => labels,
        };

        log::info!("Draw labels ready: {}", language.display_name());
        Ok(LabelContext {
            language,
            labels: Arc::new(labels),
        })
    }
}

impl Default for LabelContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
