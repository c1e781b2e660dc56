use std::path::PathBuf;

use anyhow::{Context, Result};
use cellview_core::consts::VIEWER_EXPORT_FILENAME;
use cellview_core::geometry::Point;
use cellview_core::render::{load_image, save_png};
use cellview_core::view::ZoomDirection;
use cellview_core::viewer::ViewerWidget;
use clap::Args;

#[derive(Args)]
pub struct RenderArgs {
    /// Input image file
    pub file: PathBuf,

    /// Surface width in pixels (defaults to the image width)
    #[arg(long)]
    pub width: Option<u32>,

    /// Surface height in pixels (defaults to the image height)
    #[arg(long)]
    pub height: Option<u32>,

    /// Zoom steps to apply; negative values zoom out
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub zoom_steps: i32,

    /// Horizontal pan in screen pixels
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub pan_x: f32,

    /// Vertical pan in screen pixels
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub pan_y: f32,

    /// Output file path
    #[arg(short, long, default_value = VIEWER_EXPORT_FILENAME)]
    pub output: PathBuf,
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let image = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let width = args.width.unwrap_or(image.width());
    let height = args.height.unwrap_or(image.height());

    let mut viewer = ViewerWidget::new();
    viewer.load(image);

    let direction = if args.zoom_steps >= 0 {
        ZoomDirection::In
    } else {
        ZoomDirection::Out
    };
    let steps = args
        .zoom_steps
        .unsigned_abs()
        .min(ZoomDirection::steps_across_range());
    for _ in 0..steps {
        viewer.zoom(direction);
    }

    // Pan is applied as a single drag gesture.
    viewer.press(Point::ZERO);
    viewer.drag(Point::new(args.pan_x, args.pan_y));
    viewer.release();

    let surface = viewer.export(width, height)?;
    save_png(&surface, &args.output)?;

    println!(
        "Rendered {}x{} at {} to {}",
        width,
        height,
        viewer.controls().zoom_label,
        args.output.display()
    );
    Ok(())
}
