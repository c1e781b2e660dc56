use cellview_core::consts::{BACKGROUND_RGBA, VIEWER_EXPORT_FILENAME};
use cellview_core::view::ZoomDirection;

use crate::app::CellviewApp;
use crate::convert::{to_egui_rect, to_point, to_rect};
use crate::messages::{SaveTarget, WorkerCommand};

pub fn show(ctx: &egui::Context, app: &mut CellviewApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        toolbar(ui, app);
        ui.separator();

        let has_image = app.viewer.texture.is_some();
        // Footer row is reserved below the surface once an image is shown.
        let footer_height = if has_image {
            ui.text_style_height(&egui::TextStyle::Body) + ui.spacing().item_spacing.y * 2.0
        } else {
            0.0
        };
        let mut rect = ui.available_rect_before_wrap();
        rect.max.y -= footer_height;

        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
        paint_background(ui, rect);
        app.viewer.surface_size = [rect.width().max(1.0) as u32, rect.height().max(1.0) as u32];

        if let Some(texture_id) = app.viewer.texture.as_ref().map(|t| t.id()) {
            handle_wheel(ui, &response, app);
            handle_pan(&response, app);

            if let Some(img_rect) = app.viewer.widget.view.image_rect(to_rect(rect)) {
                ui.painter().with_clip_rect(rect).image(
                    texture_id,
                    to_egui_rect(img_rect),
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            }

            ui.horizontal(|ui| {
                ui.label(app.viewer.widget.controls().zoom_label);
            });
        } else {
            show_placeholder(ui, rect);
        }
    });
}

fn toolbar(ui: &mut egui::Ui, app: &mut CellviewApp) {
    let controls = app.viewer.widget.controls();
    ui.horizontal(|ui| {
        if ui.button("Upload...").clicked() {
            open_file(app);
        }
        ui.separator();
        if ui
            .add_enabled(controls.zoom_out, egui::Button::new("\u{2212}"))
            .on_hover_text("Zoom out")
            .clicked()
        {
            app.viewer.widget.zoom(ZoomDirection::Out);
        }
        if ui
            .add_enabled(controls.zoom_in, egui::Button::new("+"))
            .on_hover_text("Zoom in")
            .clicked()
        {
            app.viewer.widget.zoom(ZoomDirection::In);
        }
        if ui.add_enabled(controls.reset, egui::Button::new("Reset")).clicked() {
            app.viewer.widget.reset();
        }
        if ui.add_enabled(controls.export, egui::Button::new("Download")).clicked() {
            export_view(app);
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    let [r, g, b, _] = BACKGROUND_RGBA;
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_rgb(r, g, b));
}

/// One zoom step per wheel movement over the surface. The delta is consumed
/// so no enclosing scroll area moves with it.
fn handle_wheel(ui: &egui::Ui, response: &egui::Response, app: &mut CellviewApp) {
    if !response.hovered() {
        return;
    }
    let scroll = ui.input(|i| i.raw_scroll_delta.y);
    if scroll == 0.0 {
        return;
    }
    ui.ctx().input_mut(|i| {
        i.raw_scroll_delta = egui::Vec2::ZERO;
        i.smooth_scroll_delta = egui::Vec2::ZERO;
    });
    // egui reports scrolling up as positive; the view expects page deltas.
    app.viewer.widget.zoom(ZoomDirection::from_wheel_delta(-scroll));
}

fn handle_pan(response: &egui::Response, app: &mut CellviewApp) {
    let widget = &mut app.viewer.widget;
    if response.drag_started_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            widget.press(to_point(pos));
        }
    }
    if widget.view.dragging {
        if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                widget.drag(to_point(pos));
            }
        }
        if response.drag_stopped() || !response.contains_pointer() {
            widget.release();
        }
    }
}

fn show_placeholder(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "Upload an image to begin",
        egui::FontId::proportional(18.0),
        egui::Color32::from_gray(100),
    );
}

pub(crate) fn open_file(app: &mut CellviewApp) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = cmd_tx.send(WorkerCommand::LoadImageFile { path });
        }
    });
}

/// Render the surface as currently shown and ask where to write it.
pub(crate) fn export_view(app: &mut CellviewApp) {
    let [width, height] = app.viewer.surface_size;
    let image = match app.viewer.widget.export(width, height) {
        Ok(image) => image,
        Err(e) => {
            tracing::warn!("export skipped: {e}");
            return;
        }
    };
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name(VIEWER_EXPORT_FILENAME)
            .save_file()
        {
            let _ = cmd_tx.send(WorkerCommand::SavePng {
                image,
                path,
                target: SaveTarget::Viewer,
            });
        }
    });
}
