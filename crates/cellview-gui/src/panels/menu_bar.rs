use crate::app::{CellviewApp, SIMULATION_TAB, VIEWER_TAB};
use crate::panels::{simulation, viewer};

pub fn show(ctx: &egui::Context, app: &mut CellviewApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Open Image...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    app.tabs.open_target(VIEWER_TAB);
                    viewer::open_file(app);
                }

                let export_enabled = app.viewer.widget.controls().export;
                if ui.add_enabled(export_enabled, egui::Button::new("Export View...")).clicked() {
                    ui.close();
                    viewer::export_view(app);
                }

                if ui.add_enabled(app.panel.save_visible, egui::Button::new("Save Simulation...")).clicked() {
                    ui.close();
                    simulation::save_image(app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Simulation").clicked() {
                    ui.close();
                    app.tabs.open_target(SIMULATION_TAB);
                }
                if ui.button("Viewer").clicked() {
                    ui.close();
                    app.tabs.open_target(VIEWER_TAB);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mut dark = app.theme.is_dark();
                if ui.checkbox(&mut dark, "Dark mode").changed() {
                    app.toggle_theme(ctx);
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            app.tabs.open_target(VIEWER_TAB);
            viewer::open_file(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}
