use crate::consts::TOOLTIP_MARGIN;
use crate::geometry::{Point, Rect};

/// Top-left position for an info popup of `popup_size` (width, height)
/// anchored on `icon`.
///
/// Prefers sitting above the icon, horizontally centred. Falls back to below
/// the icon when it would cross the top edge, and is pushed back inside the
/// viewport horizontally.
pub fn place_tooltip(icon: Rect, popup_size: (f32, f32), viewport_width: f32) -> Point {
    let (popup_w, popup_h) = popup_size;

    let mut top = icon.top() - popup_h - TOOLTIP_MARGIN;
    if top < 0.0 {
        top = icon.bottom() + TOOLTIP_MARGIN;
    }

    let mut left = icon.left() + icon.width / 2.0 - popup_w / 2.0;
    let max_left = viewport_width - popup_w - TOOLTIP_MARGIN;
    if left > max_left {
        left = max_left;
    }
    if left < 0.0 {
        left = TOOLTIP_MARGIN;
    }

    Point::new(left, top)
}
