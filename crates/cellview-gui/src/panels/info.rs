use cellview_core::tooltip::place_tooltip;

use crate::convert::to_rect;
use crate::state::UIState;

const POPUP_MAX_WIDTH: f32 = 260.0;

/// Small "i" icon that shows `text` in a floating panel while hovered.
pub fn info_icon(ui: &mut egui::Ui, ui_state: &mut UIState, text: &str) {
    let response = ui.add(
        egui::Label::new(egui::RichText::new("\u{2139}").weak())
            .sense(egui::Sense::hover()),
    );
    if !response.hovered() {
        return;
    }

    let viewport_width = ui.ctx().screen_rect().width();
    let size = ui_state.info_popup_size;
    let pos = place_tooltip(to_rect(response.rect), (size.x, size.y), viewport_width);

    let shown = egui::Area::new(egui::Id::new("info_popup"))
        .order(egui::Order::Tooltip)
        .fixed_pos(egui::pos2(pos.x, pos.y))
        .interactable(false)
        .show(ui.ctx(), |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_max_width(POPUP_MAX_WIDTH);
                ui.label(text);
            });
        });
    // Placement uses the size measured on the previous frame.
    let measured = shown.response.rect.size();
    if measured != ui_state.info_popup_size {
        ui_state.info_popup_size = measured;
        ui.ctx().request_repaint();
    }
}
