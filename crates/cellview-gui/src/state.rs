use cellview_core::viewer::ViewerWidget;

/// Overall UI state.
pub struct UIState {
    /// Log messages.
    pub log_messages: Vec<String>,

    /// Size the info popup had on the previous frame, for placement.
    pub info_popup_size: egui::Vec2,

    pub show_about: bool,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            log_messages: Vec::new(),
            info_popup_size: egui::vec2(220.0, 40.0),
            show_about: false,
        }
    }
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}

/// Viewer widget plus what egui needs to draw it.
#[derive(Default)]
pub struct ViewerState {
    pub widget: ViewerWidget,
    pub texture: Option<egui::TextureHandle>,
    /// Surface size from the last frame, used for exports.
    pub surface_size: [u32; 2],
}

/// Texture of the simulation surface.
#[derive(Default)]
pub struct SimulationView {
    pub texture: Option<egui::TextureHandle>,
}
