use egui::{Color32, Context, Visuals};

const BACKGROUND: Color32 = Color32::from_rgb(0x2E, 0x3A, 0x4C);
const FIELD: Color32 = Color32::from_rgb(0x1C, 0x1C, 0x1C);
const FOREGROUND: Color32 = Color32::from_rgb(0xEA, 0xEA, 0xEA);
const BUTTON: Color32 = Color32::from_rgb(0x00, 0x7B, 0xFF);
const BUTTON_HOVER: Color32 = Color32::from_rgb(0x00, 0x56, 0xB3);

/// Status line color (light blue)
pub const STATUS: Color32 = Color32::from_rgb(0xAD, 0xD8, 0xE6);

pub fn apply(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = BACKGROUND;
    visuals.extreme_bg_color = FIELD;
    visuals.override_text_color = Some(FOREGROUND);
    visuals.widgets.inactive.weak_bg_fill = BUTTON;
    visuals.widgets.hovered.weak_bg_fill = BUTTON_HOVER;
    visuals.widgets.active.weak_bg_fill = BUTTON_HOVER;
    ctx.set_visuals(visuals);
}
