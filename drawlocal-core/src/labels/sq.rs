//! 阿尔巴尼亚语文本 (sq)

use super::keys::LocalizedTexts;

pub const TEXTS: LocalizedTexts = LocalizedTexts {
    // 绘图按钮
    polygon_button: "Vizato një poligon",
    rectangle_button: "Vizato një katror",
    circle_button: "Vizato një rreth",
    // 工具栏动作
    finish: "Përfundo",
    delete_last_point: "Fshij pikën e fundit",
    cancel: "Anullo",
    // 绘图提示
    polygon_start: "Kliko për të vizatuar poligonin",
    polygon_continue: "Kliko për të vazhduar vizatimin",
    polygon_end: "Kliko pikën e fillimit për të mbyllur poligonin",
    rectangle_start: "Kliko mbi hartë për të vizatuar një drejtkëndësh",
    circle_start: "Kliko mbi hartë për të vizatuar një rreth",
    simple_shape_end: "Lëshoni mous-in për të përfunduar vizatimin",
    radius: "Rrezja",
    // 编辑工具栏
    save: "Ruaj",
    save_changes: "Ruaj ndryshimet",
    clear_all: "Fshij të gjitha",
    clear_all_layers: "Fshij të gjitha shtresat",
    no_layers_to_delete: "Nuk ka shtresa për të fshirë",
    // 编辑提示
    remove_feature: "Kliko mbi vizatimin për ta hequr atë",
};
