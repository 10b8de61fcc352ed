//! 标签键定义
//!
//! 定义整棵标签树的结构体，布局与绘图插件读取的 `drawLocal` 对象一致。
//!
//! ## 分类标准
//!
//! 1. **`draw.toolbar.*`**：绘图工具栏的动作与按钮
//! 2. **`draw.handlers.*`**：每种绘图工具的提示文本
//! 3. **`edit.toolbar.*`**：编辑工具栏的动作与按钮
//! 4. **`edit.handlers.*`**：编辑/删除模式的提示文本

use std::borrow::Cow;

use serde::Serialize;

/// 单个标签值
pub type Label = Cow<'static, str>;

/// 需要随语言切换的文本
///
/// 其余文本是固定英文字面量，在 `assemble` 中直接写入。
pub struct LocalizedTexts {
    // 绘图按钮
    pub polygon_button: &'static str,
    pub rectangle_button: &'static str,
    pub circle_button: &'static str,
    // 工具栏动作
    pub finish: &'static str,
    pub delete_last_point: &'static str,
    pub cancel: &'static str,
    // 绘图提示
    pub polygon_start: &'static str,
    pub polygon_continue: &'static str,
    pub polygon_end: &'static str,
    pub rectangle_start: &'static str,
    pub circle_start: &'static str,
    pub simple_shape_end: &'static str,
    pub radius: &'static str,
    // 编辑工具栏
    pub save: &'static str,
    pub save_changes: &'static str,
    pub clear_all: &'static str,
    pub clear_all_layers: &'static str,
    pub no_layers_to_delete: &'static str,
    // 编辑提示
    pub remove_feature: &'static str,
}

/// 所有标签的根结构
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelSet {
    /// 绘图模式
    pub draw: DrawLabels,
    /// 编辑模式
    pub edit: EditLabels,
}

// ============================================================================
// 绘图
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawLabels {
    pub toolbar: DrawToolbarLabels,
    pub handlers: DrawHandlerLabels,
}

/// 绘图工具栏
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawToolbarLabels {
    /// 取消绘图（插件把它放在 `actions` 而不是 `actions.cancel`）
    pub actions: ActionLabels,
    pub finish: ActionLabels,
    pub undo: ActionLabels,
    pub buttons: DrawButtonLabels,
}

/// 工具栏动作：悬停标题 + 按钮文字
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionLabels {
    pub title: Label,
    pub text: Label,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawButtonLabels {
    pub polyline: Label,
    pub polygon: Label,
    pub rectangle: Label,
    pub circle: Label,
    pub marker: Label,
    pub circlemarker: Label,
}

/// 每种绘图工具的提示
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawHandlerLabels {
    pub circle: CircleHandlerLabels,
    pub circlemarker: StartHandlerLabels,
    pub marker: StartHandlerLabels,
    pub polygon: PolygonHandlerLabels,
    pub polyline: PolylineHandlerLabels,
    pub rectangle: StartHandlerLabels,
    pub simpleshape: SimpleShapeHandlerLabels,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CircleHandlerLabels {
    pub tooltip: StartTooltip,
    /// 测量浮层上的半径标签
    pub radius: Label,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartHandlerLabels {
    pub tooltip: StartTooltip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartTooltip {
    pub start: Label,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolygonHandlerLabels {
    pub tooltip: VertexTooltip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolylineHandlerLabels {
    /// 边自相交时的提示（含 HTML）
    pub error: Label,
    pub tooltip: VertexTooltip,
}

/// 逐点绘制的提示：开始 / 继续 / 结束
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VertexTooltip {
    pub start: Label,
    pub cont: Label,
    pub end: Label,
}

/// 拖拽类图形（矩形、圆）共用的结束提示
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimpleShapeHandlerLabels {
    pub tooltip: EndTooltip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndTooltip {
    pub end: Label,
}

// ============================================================================
// 编辑
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditLabels {
    pub toolbar: EditToolbarLabels,
    pub handlers: EditHandlerLabels,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditToolbarLabels {
    pub actions: EditActionLabels,
    pub buttons: EditButtonLabels,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditActionLabels {
    pub save: ActionLabels,
    pub cancel: ActionLabels,
    pub clear_all: ActionLabels,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditButtonLabels {
    pub edit: Label,
    pub edit_disabled: Label,
    pub remove: Label,
    pub remove_disabled: Label,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditHandlerLabels {
    pub edit: EditModeHandlerLabels,
    pub remove: RemoveHandlerLabels,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditModeHandlerLabels {
    pub tooltip: EditTooltip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditTooltip {
    pub text: Label,
    pub subtext: Label,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoveHandlerLabels {
    pub tooltip: TextTooltip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextTooltip {
    pub text: Label,
}
