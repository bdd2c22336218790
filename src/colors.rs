//! Color helpers for the indicator strip.
//!
//! The completion sweep walks a 16-bit color wheel (0..65536 maps onto
//! 0..360 degrees of hue) so that cell offsets and frame steps stay integral.

use palette::{FromColor, Hsv, Srgb};

/// Unlit cell.
pub const OFF: Srgb = Srgb::new(0.0, 0.0, 0.0);

/// Steps in one full turn of the color wheel.
pub const WHEEL_STEPS: u32 = 65536;

/// Wheel advance between two animation frames.
pub const FRAME_HUE_STEP: u32 = 256;

/// Creates an RGB color from HSV (Hue, Saturation, Value) components.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Srgb {
    let hsv = Hsv::new(hue, saturation, value);
    Srgb::from_color(hsv)
}

/// Creates an RGB color from a wheel position at full saturation and value.
#[inline]
pub fn wheel(position: u32) -> Srgb {
    let degrees = (position % WHEEL_STEPS) as f32 * 360.0 / WHEEL_STEPS as f32;
    hsv(degrees, 1.0, 1.0)
}

/// Wheel position of `cell` on `frame` of the completion sweep.
///
/// Cells are spread evenly around the wheel and the whole strip rotates by
/// [`FRAME_HUE_STEP`] each frame.
#[inline]
pub fn sweep_position(cell: usize, cells: usize, frame: u32) -> u32 {
    let steps = WHEEL_STEPS as u64;
    let offset = cell as u64 * steps / cells.max(1) as u64;
    let rotation = frame as u64 * FRAME_HUE_STEP as u64;
    ((offset + rotation) % steps) as u32
}
