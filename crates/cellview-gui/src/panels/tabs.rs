use crate::app::CellviewApp;

/// Tab strip switching the central area between the panels.
pub fn show(ctx: &egui::Context, app: &mut CellviewApp) {
    egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let mut clicked = None;
            for (index, link) in app.tabs.links.iter().enumerate() {
                if ui.selectable_label(link.active, &link.label).clicked() {
                    clicked = Some(index);
                }
            }
            if let Some(index) = clicked {
                app.tabs.open(index);
            }
        });
    });
}
