//! 工具栏与绘图提示标签
//!
//! 使用纯 Rust 结构体方案：`keys` 定义标签树，`en` / `sq` 只提供需要随语言切换的文本，
//! 其余文本在 [`assemble`] 中以固定英文字面量写入。哪些文本被本地化、哪些保持英文，
//! 沿用绘图插件原有的划分，不做调整。

use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::error::{LocaleError, LocaleResult};
use crate::language::Language;

mod en;
pub mod keys;
mod sq;

pub use keys::*;

macro_rules! label_schema {
    ($($path:literal => $($field:ident).+),+ $(,)?) => {
        /// 固定的标签键 schema（按声明顺序）
        ///
        /// 运行期不会增减；[`LabelSet::extend`] 只能改写已有的键。
        pub const LABEL_KEYS: &[&str] = &[$($path),+];

        impl LabelSet {
            fn slot(&self, path: &str) -> Option<&Label> {
                match path {
                    $($path => Some(&self.$($field).+),)+
                    _ => None,
                }
            }

            fn slot_mut(&mut self, path: &str) -> Option<&mut Label> {
                match path {
                    $($path => Some(&mut self.$($field).+),)+
                    _ => None,
                }
            }
        }
    };
}

label_schema! {
    "draw.toolbar.actions.title" => draw.toolbar.actions.title,
    "draw.toolbar.actions.text" => draw.toolbar.actions.text,
    "draw.toolbar.finish.title" => draw.toolbar.finish.title,
    "draw.toolbar.finish.text" => draw.toolbar.finish.text,
    "draw.toolbar.undo.title" => draw.toolbar.undo.title,
    "draw.toolbar.undo.text" => draw.toolbar.undo.text,
    "draw.toolbar.buttons.polyline" => draw.toolbar.buttons.polyline,
    "draw.toolbar.buttons.polygon" => draw.toolbar.buttons.polygon,
    "draw.toolbar.buttons.rectangle" => draw.toolbar.buttons.rectangle,
    "draw.toolbar.buttons.circle" => draw.toolbar.buttons.circle,
    "draw.toolbar.buttons.marker" => draw.toolbar.buttons.marker,
    "draw.toolbar.buttons.circlemarker" => draw.toolbar.buttons.circlemarker,
    "draw.handlers.circle.tooltip.start" => draw.handlers.circle.tooltip.start,
    "draw.handlers.circle.radius" => draw.handlers.circle.radius,
    "draw.handlers.circlemarker.tooltip.start" => draw.handlers.circlemarker.tooltip.start,
    "draw.handlers.marker.tooltip.start" => draw.handlers.marker.tooltip.start,
    "draw.handlers.polygon.tooltip.start" => draw.handlers.polygon.tooltip.start,
    "draw.handlers.polygon.tooltip.cont" => draw.handlers.polygon.tooltip.cont,
    "draw.handlers.polygon.tooltip.end" => draw.handlers.polygon.tooltip.end,
    "draw.handlers.polyline.error" => draw.handlers.polyline.error,
    "draw.handlers.polyline.tooltip.start" => draw.handlers.polyline.tooltip.start,
    "draw.handlers.polyline.tooltip.cont" => draw.handlers.polyline.tooltip.cont,
    "draw.handlers.polyline.tooltip.end" => draw.handlers.polyline.tooltip.end,
    "draw.handlers.rectangle.tooltip.start" => draw.handlers.rectangle.tooltip.start,
    "draw.handlers.simpleshape.tooltip.end" => draw.handlers.simpleshape.tooltip.end,
    "edit.toolbar.actions.save.title" => edit.toolbar.actions.save.title,
    "edit.toolbar.actions.save.text" => edit.toolbar.actions.save.text,
    "edit.toolbar.actions.cancel.title" => edit.toolbar.actions.cancel.title,
    "edit.toolbar.actions.cancel.text" => edit.toolbar.actions.cancel.text,
    "edit.toolbar.actions.clearAll.title" => edit.toolbar.actions.clear_all.title,
    "edit.toolbar.actions.clearAll.text" => edit.toolbar.actions.clear_all.text,
    "edit.toolbar.buttons.edit" => edit.toolbar.buttons.edit,
    "edit.toolbar.buttons.editDisabled" => edit.toolbar.buttons.edit_disabled,
    "edit.toolbar.buttons.remove" => edit.toolbar.buttons.remove,
    "edit.toolbar.buttons.removeDisabled" => edit.toolbar.buttons.remove_disabled,
    "edit.handlers.edit.tooltip.text" => edit.handlers.edit.tooltip.text,
    "edit.handlers.edit.tooltip.subtext" => edit.handlers.edit.tooltip.subtext,
    "edit.handlers.remove.tooltip.text" => edit.handlers.remove.tooltip.text,
}

/// 根据存储的偏好值构建标签集
///
/// 只有 `Some("en")` 得到英文；其他一律得到阿尔巴尼亚语。
///
/// ```
/// let labels = drawlocal_core::resolve(Some("en"));
/// assert_eq!(labels.get("draw.toolbar.buttons.polygon"), Some("Draw a polygon"));
///
/// let labels = drawlocal_core::resolve(None);
/// assert_eq!(labels.get("draw.handlers.circle.radius"), Some("Rrezja"));
/// ```
pub fn resolve(preference: Option<&str>) -> LabelSet {
    LabelSet::for_language(Language::from_preference(preference))
}

impl LabelSet {
    /// 构建指定语言的标签集
    pub fn for_language(language: Language) -> Self {
        log::debug!("Resolving draw labels for language: {language}");
        let texts = match language {
            Language::English => &en::TEXTS,
            Language::Albanian => &sq::TEXTS,
        };
        assemble(texts)
    }

    /// 按点分键路径读取标签，如 `draw.handlers.circle.tooltip.start`
    pub fn get(&self, path: &str) -> Option<&str> {
        self.slot(path).map(AsRef::as_ref)
    }

    /// 按 schema 顺序列出所有 `(键路径, 文本)`
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        LABEL_KEYS
            .iter()
            .filter_map(|&key| self.get(key).map(|value| (key, value)))
            .collect()
    }

    /// 导出为与插件 `drawLocal` 相同布局的嵌套 JSON 对象
    pub fn to_json(&self) -> LocaleResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// 改写单个已有标签
    ///
    /// # Errors
    /// - `UnknownKey`：键不在 schema 中
    /// - `EmptyValue`：文本为空（或只有空白）
    pub fn set(&mut self, path: &str, value: impl Into<Label>) -> LocaleResult<()> {
        let value = value.into();
        let slot = self
            .slot_mut(path)
            .ok_or_else(|| LocaleError::UnknownKey(path.to_string()))?;
        if value.trim().is_empty() {
            return Err(LocaleError::EmptyValue(path.to_string()));
        }
        *slot = value;
        Ok(())
    }

    /// 以嵌套 JSON 对象深度合并覆盖，返回新的标签集
    ///
    /// 与插件文档中的 `drawLocal.extend({...})` 用法对应。任何一个覆盖无效时整体失败，
    /// `self` 不受影响。
    ///
    /// ```
    /// use drawlocal_core::{Language, LabelSet};
    /// use serde_json::json;
    ///
    /// let labels = LabelSet::for_language(Language::English);
    /// let custom = labels
    ///     .extend(&json!({ "draw": { "toolbar": { "buttons": { "polygon": "Draw an awesome polygon" } } } }))
    ///     .unwrap();
    /// assert_eq!(custom.get("draw.toolbar.buttons.polygon"), Some("Draw an awesome polygon"));
    /// ```
    pub fn extend(&self, overrides: &Value) -> LocaleResult<LabelSet> {
        let Value::Object(map) = overrides else {
            return Err(LocaleError::InvalidValue {
                key: String::new(),
                reason: format!("overrides must be an object, got {}", json_type(overrides)),
            });
        };

        let mut leaves = Vec::new();
        flatten_overrides("", map, &mut leaves)?;

        let mut extended = self.clone();
        for (path, value) in &leaves {
            extended.set(path, value.clone())?;
        }
        if !leaves.is_empty() {
            log::info!("Applied {} label override(s)", leaves.len());
        }
        Ok(extended)
    }
}

fn flatten_overrides(
    prefix: &str,
    map: &Map<String, Value>,
    out: &mut Vec<(String, String)>,
) -> LocaleResult<()> {
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        // 覆盖必须逐层嵌套，点分键在插件的 drawLocal 布局中不存在
        if key.contains('.') {
            return Err(LocaleError::UnknownKey(path));
        }
        match value {
            Value::Object(_) if LABEL_KEYS.contains(&path.as_str()) => {
                return Err(LocaleError::InvalidValue {
                    key: path,
                    reason: "expected a string, got object".to_string(),
                })
            }
            Value::Object(nested) => flatten_overrides(&path, nested, out)?,
            Value::String(text) => out.push((path, text.clone())),
            other => {
                return Err(LocaleError::InvalidValue {
                    key: path,
                    reason: format!("expected a string, got {}", json_type(other)),
                })
            }
        }
    }
    Ok(())
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

const fn fixed(text: &'static str) -> Label {
    Cow::Borrowed(text)
}

/// 组装标签树：本地化文本取自 `texts`，其余为固定英文
fn assemble(texts: &keys::LocalizedTexts) -> LabelSet {
    LabelSet {
        draw: DrawLabels {
            toolbar: DrawToolbarLabels {
                actions: ActionLabels {
                    title: fixed("Cancel drawing"),
                    text: fixed(texts.cancel),
                },
                finish: ActionLabels {
                    title: fixed("Finish drawing"),
                    text: fixed(texts.finish),
                },
                undo: ActionLabels {
                    title: fixed("Delete last point drawn"),
                    text: fixed(texts.delete_last_point),
                },
                buttons: DrawButtonLabels {
                    polyline: fixed("Draw a polyline"),
                    polygon: fixed(texts.polygon_button),
                    rectangle: fixed(texts.rectangle_button),
                    circle: fixed(texts.circle_button),
                    marker: fixed("Draw a marker"),
                    circlemarker: fixed("Draw a circlemarker"),
                },
            },
            handlers: DrawHandlerLabels {
                circle: CircleHandlerLabels {
                    tooltip: StartTooltip {
                        start: fixed(texts.circle_start),
                    },
                    radius: fixed(texts.radius),
                },
                circlemarker: StartHandlerLabels {
                    tooltip: StartTooltip {
                        start: fixed("Click map to place circle marker."),
                    },
                },
                marker: StartHandlerLabels {
                    tooltip: StartTooltip {
                        start: fixed("Click map to place marker."),
                    },
                },
                polygon: PolygonHandlerLabels {
                    tooltip: VertexTooltip {
                        start: fixed(texts.polygon_start),
                        cont: fixed(texts.polygon_continue),
                        end: fixed(texts.polygon_end),
                    },
                },
                polyline: PolylineHandlerLabels {
                    error: fixed("<strong>Error:</strong> shape edges cannot cross!"),
                    tooltip: VertexTooltip {
                        start: fixed("Click to start drawing line."),
                        cont: fixed("Click to continue drawing line."),
                        end: fixed("Click last point to finish line."),
                    },
                },
                rectangle: StartHandlerLabels {
                    tooltip: StartTooltip {
                        start: fixed(texts.rectangle_start),
                    },
                },
                simpleshape: SimpleShapeHandlerLabels {
                    tooltip: EndTooltip {
                        end: fixed(texts.simple_shape_end),
                    },
                },
            },
        },
        edit: EditLabels {
            toolbar: EditToolbarLabels {
                actions: EditActionLabels {
                    save: ActionLabels {
                        title: fixed(texts.save_changes),
                        text: fixed(texts.save),
                    },
                    cancel: ActionLabels {
                        title: fixed("Cancel editing, discards all changes"),
                        text: fixed(texts.cancel),
                    },
                    clear_all: ActionLabels {
                        title: fixed(texts.clear_all_layers),
                        text: fixed(texts.clear_all),
                    },
                },
                buttons: EditButtonLabels {
                    edit: fixed("Edit layers"),
                    edit_disabled: fixed("No layers to edit"),
                    remove: fixed("Delete layers"),
                    remove_disabled: fixed(texts.no_layers_to_delete),
                },
            },
            handlers: EditHandlerLabels {
                edit: EditModeHandlerLabels {
                    tooltip: EditTooltip {
                        text: fixed("Drag handles or markers to edit features."),
                        subtext: fixed("Click cancel to undo changes."),
                    },
                },
                remove: RemoveHandlerLabels {
                    tooltip: TextTooltip {
                        text: fixed(texts.remove_feature),
                    },
                },
            },
        },
    }
}
