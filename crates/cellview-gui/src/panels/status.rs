use crate::app::{CellviewApp, VIEWER_TAB};

pub fn show(ctx: &egui::Context, app: &mut CellviewApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area: fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            if app.panel.in_flight {
                ui.spinner();
                ui.label("Generating...");
                ui.separator();
            }
            if app.tabs.is_visible(VIEWER_TAB) {
                if let Some(size) = app.viewer.widget.view.image_size {
                    ui.label(format!("{}x{}", size.width, size.height));
                    ui.separator();
                }
            }
            ui.label(format!("Server: {}", app.server_url));
            ui.separator();
            ui.label(format!("Theme: {}", app.theme));
        });

        ui.add_space(2.0);
    });
}
