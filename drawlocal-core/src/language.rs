//! 标签语言
//!
//! 只有两种语言：英语和阿尔巴尼亚语。偏好值恰好为 `"en"` 时选英语，
//! 其他任何值（包括缺失、空字符串、`"EN"`、`"en-US"`、第三种语言代码）都落到阿尔巴尼亚语。

use serde::Serialize;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// 英语
    English,
    /// 阿尔巴尼亚语（非英语分支）
    Albanian,
}

impl Language {
    /// 偏好值中唯一被识别为英语的字面量
    pub const ENGLISH_CODE: &'static str = "en";

    /// 获取所有支持的语言
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Albanian]
    }

    /// 从存储的偏好值映射语言（全函数，不做校验）
    ///
    /// ```
    /// use drawlocal_core::Language;
    ///
    /// assert_eq!(Language::from_preference(Some("en")), Language::English);
    /// assert_eq!(Language::from_preference(Some("fr")), Language::Albanian);
    /// assert_eq!(Language::from_preference(None), Language::Albanian);
    /// ```
    pub fn from_preference(preference: Option<&str>) -> Language {
        match preference {
            Some(Self::ENGLISH_CODE) => Language::English,
            // 非 "en" 一律视为阿尔巴尼亚语，没有第三个分支
            _ => Language::Albanian,
        }
    }

    /// 获取语言代码
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Albanian => "sq",
        }
    }

    /// 获取语言的显示名称（使用该语言本身的文字）
    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Albanian => "Shqip",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
