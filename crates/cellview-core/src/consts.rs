/// Smallest zoom factor the viewer allows.
pub const MIN_ZOOM: f32 = 0.1;

/// Largest zoom factor the viewer allows.
pub const MAX_ZOOM: f32 = 5.0;

/// Zoom change applied by one button press or wheel notch.
pub const ZOOM_STEP: f32 = 0.2;

/// Viewer surface background, `#0a0a0a`.
pub const BACKGROUND_RGBA: [u8; 4] = [0x0a, 0x0a, 0x0a, 0xff];

/// Default filename for a viewer export.
pub const VIEWER_EXPORT_FILENAME: &str = "canvas-image.png";

/// Default filename for a saved simulation result.
pub const SIMULATION_EXPORT_FILENAME: &str = "simulacion.png";

/// Path of the image generation endpoint on the backend.
pub const GENERATE_ENDPOINT: &str = "/generate_image";

/// Backend used when nothing else is configured.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// Density written back when the field holds no usable number.
pub const DEFAULT_DENSITY: &str = "0.5";

/// Init method that exposes the density field.
pub const RANDOM_INIT_METHOD: &str = "random";

/// Preference key holding `"dark"` or `"light"`.
pub const THEME_KEY: &str = "theme";

/// Gap between an info icon and its tooltip, and minimum distance from the
/// viewport's left edge.
pub const TOOLTIP_MARGIN: f32 = 5.0;
