use cellview_core::panel::NoticeKind;

use crate::app::CellviewApp;

/// Blocking message window for the oldest pending notice.
pub fn show(ctx: &egui::Context, app: &mut CellviewApp) {
    let Some(notice) = app.panel.peek_notice() else {
        return;
    };
    let title = match notice.kind {
        NoticeKind::Info => "Saved",
        NoticeKind::Error => "Error",
    };
    let message = notice.message.clone();

    let mut dismissed = false;
    egui::Modal::new(egui::Id::new("notice")).show(ctx, |ui| {
        ui.set_max_width(360.0);
        ui.heading(title);
        ui.add_space(6.0);
        ui.label(message);
        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });
    });
    if dismissed {
        app.panel.take_notice();
    }
}
