use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::consts::BACKGROUND_RGBA;
use crate::error::{CellviewError, Result};
use crate::geometry::{Point, Rect};
use crate::view::ViewState;

/// Rasterize the viewer surface: background fill, then the image drawn
/// through the view transform with nearest-neighbour sampling.
pub fn render_surface(
    image: &RgbaImage,
    view: &ViewState,
    width: u32,
    height: u32,
) -> Result<RgbaImage> {
    let mut surface = RgbaImage::from_pixel(width, height, Rgba(BACKGROUND_RGBA));
    let bounds = Rect::new(0.0, 0.0, width as f32, height as f32);

    let transform = view.transform(bounds).ok_or(CellviewError::NoImage)?;
    // Zoom never reaches zero, so the transform always inverts.
    let Some(inverse) = transform.inverse() else {
        return Ok(surface);
    };

    let (img_w, img_h) = (image.width() as f32, image.height() as f32);
    for (x, y, pixel) in surface.enumerate_pixels_mut() {
        let src = inverse.apply(Point::new(x as f32 + 0.5, y as f32 + 0.5));
        if src.x < 0.0 || src.y < 0.0 || src.x >= img_w || src.y >= img_h {
            continue;
        }
        let texel = image.get_pixel(src.x as u32, src.y as u32);
        *pixel = blend_over(*texel, *pixel);
    }

    Ok(surface)
}

/// Source-over compositing of `src` onto an opaque `dst`.
fn blend_over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let alpha = src[3] as u32;
    if alpha == 255 {
        return src;
    }
    let mix = |s: u8, d: u8| ((s as u32 * alpha + d as u32 * (255 - alpha) + 127) / 255) as u8;
    Rgba([mix(src[0], dst[0]), mix(src[1], dst[1]), mix(src[2], dst[2]), 255])
}

/// Encode an RGBA buffer as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Write an RGBA buffer to `path` as PNG regardless of the extension.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    tracing::info!(path = %path.display(), "saved PNG");
    Ok(())
}

/// Decode any supported image file into RGBA.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path)?;
    Ok(img.to_rgba8())
}
