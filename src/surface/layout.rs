// SPDX-License-Identifier: MPL-2.0
//! Pure geometry for the toast surface.
//!
//! The surface sizes itself to its text content within a fixed maximum
//! content width plus fixed margins, horizontally centered, with its center
//! vertically anchored at a fixed fraction of the display height. Text
//! measurement itself is the text widget's concern; these functions take a
//! measured text size and produce the surface frame.

use crate::design_tokens::sizing;
use iced::Size;

/// The width available to the text once margins are taken out of the
/// maximum content width.
#[must_use]
pub fn max_text_width() -> f32 {
    sizing::TOAST_CONTENT_MAX_WIDTH - 2.0 * sizing::TOAST_MARGIN
}

/// Returns the surface frame for a measured text size: the text plus the
/// fixed margin on every side.
#[must_use]
pub fn content_frame(text: Size) -> Size {
    Size::new(
        text.width + 2.0 * sizing::TOAST_MARGIN,
        text.height + 2.0 * sizing::TOAST_MARGIN,
    )
}

/// Vertical position of the surface center for a given display height and
/// anchor fraction, rounded to a whole pixel.
#[must_use]
pub fn anchor_center_y(display_height: f32, anchor: f32) -> f32 {
    (anchor * display_height).round()
}

/// Splits the vertical space around the surface into fill portions so the
/// surface center lands on the anchor fraction without knowing the display
/// height. Returns `(above, below)` out of 100 parts.
#[must_use]
pub fn fill_portions(anchor: f32) -> (u16, u16) {
    let above = (anchor.clamp(0.0, 1.0) * 100.0).round() as u16;
    (above, 100 - above)
}
