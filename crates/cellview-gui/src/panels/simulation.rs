use std::sync::mpsc;

use cellview_core::consts::SIMULATION_EXPORT_FILENAME;
use cellview_core::panel::PanelState;

use crate::app::CellviewApp;
use crate::messages::{SaveTarget, WorkerCommand};
use crate::panels::info::info_icon;
use crate::panels::section_header;

const FORM_PANEL_WIDTH: f32 = 280.0;

pub fn show(ctx: &egui::Context, app: &mut CellviewApp) {
    egui::SidePanel::left("simulation_form")
        .default_width(FORM_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(FORM_PANEL_WIDTH - 20.0);
                form(ui, app);
            });
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        surface(ui, app);
    });
}

fn form(ui: &mut egui::Ui, app: &mut CellviewApp) {
    section_header(ui, "Parameters", app.panel.in_flight.then_some("running"));
    ui.add_space(4.0);

    let CellviewApp {
        panel,
        ui_state,
        cmd_tx,
        ..
    } = app;

    ui.horizontal(|ui| {
        string_combo(ui, "Rule", &mut panel.form.rule, &panel.options.rules);
        info_icon(ui, ui_state, "Wolfram code of the elementary cellular automaton rule.");
    });

    ui.horizontal(|ui| {
        ui.label("Cell space");
        ui.add(egui::TextEdit::singleline(&mut panel.form.cell_space).desired_width(80.0));
        info_icon(ui, ui_state, "Number of cells in one generation.");
    });

    ui.horizontal(|ui| {
        ui.label("Evolutions");
        ui.add(egui::TextEdit::singleline(&mut panel.form.num_evolutions).desired_width(80.0));
        info_icon(ui, ui_state, "Number of generations to evolve.");
    });

    ui.horizontal(|ui| {
        let mut method = panel.form.init_method.clone();
        if string_combo(ui, "Init method", &mut method, &panel.options.init_methods) {
            panel.set_init_method(&method);
        }
        info_icon(
            ui,
            ui_state,
            "How the first generation is seeded: a single live cell or random cells.",
        );
    });

    if panel.density_visible() {
        ui.horizontal(|ui| {
            ui.label("Density");
            let response =
                ui.add(egui::TextEdit::singleline(&mut panel.form.density).desired_width(80.0));
            // Covers both Enter and clicking elsewhere.
            if response.lost_focus() {
                panel.commit_density();
            }
            info_icon(ui, ui_state, "Probability in [0, 1] that a cell starts alive.");
        });
    }

    ui.horizontal(|ui| {
        string_combo(
            ui,
            "Print method",
            &mut panel.form.print_method,
            &panel.options.print_methods,
        );
        info_icon(ui, ui_state, "Output format produced by the server.");
    });

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        let submit = ui.add_enabled(!panel.in_flight, egui::Button::new("Generate"));
        if submit.clicked() {
            if let Some(request) = panel.begin_submit() {
                ui_state.add_log("Generating image...".into());
                let _ = cmd_tx.send(WorkerCommand::Submit { request });
            }
        }
        if panel.save_visible && ui.button("Save image").clicked() {
            request_save(cmd_tx, panel);
        }
    });
}

/// ComboBox over server-provided strings. Returns `true` if the value changed.
fn string_combo(ui: &mut egui::Ui, label: &str, current: &mut String, options: &[String]) -> bool {
    let resp = egui::ComboBox::from_label(label)
        .selected_text(current.as_str())
        .show_ui(ui, |ui| {
            let mut changed = false;
            for choice in options {
                if ui
                    .selectable_value(current, choice.clone(), choice.as_str())
                    .changed()
                {
                    changed = true;
                }
            }
            changed
        });
    resp.inner == Some(true)
}

fn surface(ui: &mut egui::Ui, app: &CellviewApp) {
    let Some(texture) = app.simulation.texture.as_ref() else {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new("Set the parameters and press Generate")
                    .size(18.0)
                    .color(egui::Color32::from_gray(100)),
            );
        });
        return;
    };

    // Natural size, scrollable when larger than the panel.
    egui::ScrollArea::both().show(ui, |ui| {
        let size = texture.size_vec2();
        ui.add(egui::Image::new((texture.id(), size)));
    });
}

pub(crate) fn save_image(app: &mut CellviewApp) {
    request_save(&app.cmd_tx, &app.panel);
}

fn request_save(cmd_tx: &mpsc::Sender<WorkerCommand>, panel: &PanelState) {
    let Some(image) = panel.surface().cloned() else {
        tracing::warn!("save requested without a rendered simulation");
        return;
    };
    let cmd_tx = cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name(SIMULATION_EXPORT_FILENAME)
            .save_file()
        {
            let _ = cmd_tx.send(WorkerCommand::SavePng {
                image,
                path,
                target: SaveTarget::Simulation,
            });
        }
    });
}
