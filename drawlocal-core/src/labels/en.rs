//! 英文文本 (en)

use super::keys::LocalizedTexts;

pub const TEXTS: LocalizedTexts = LocalizedTexts {
    // 绘图按钮
    polygon_button: "Draw a polygon",
    rectangle_button: "Draw a rectangle",
    circle_button: "Draw a circle",
    // 工具栏动作
    finish: "Finish",
    delete_last_point: "Delete last point",
    cancel: "Cancel",
    // 绘图提示
    polygon_start: "Click to start drawing shape",
    polygon_continue: "Click to continue drawing shape",
    polygon_end: "Click first point to close this shape",
    rectangle_start: "Click and drag to draw rectangle",
    circle_start: "Click and drag to draw circle",
    simple_shape_end: "Release mouse to finish drawing",
    radius: "Radius",
    // 编辑工具栏
    save: "Save",
    save_changes: "Save changes",
    clear_all: "Clear all",
    clear_all_layers: "Clear all layers",
    no_layers_to_delete: "No layers to delete",
    // 编辑提示
    remove_feature: "Click on a feature to remove",
};
