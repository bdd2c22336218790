//! Progress rendering on the indicator strip and the text display.
//!
//! Defines the [`PixelStrip`] and [`TextDisplay`] hardware traits, the
//! [`ProgressSink`] seam the controller talks to, and [`StripProgress`], the
//! blocking implementation used on the board.

use crate::colors::{self, OFF};
use crate::config::{
    ANIMATION_FRAME_DELAY_MS, ANIMATION_FRAMES, COMPLETION_TEXT, COUNT_LABEL, ConfigError,
    ControllerConfig, PROGRESS_COLOR,
};
use core::fmt::Write;
use embedded_hal::delay::DelayNs;
use palette::Srgb;

/// Trait for abstracting an addressable pixel strip.
///
/// Implement this for your LED driver (WS2812 over SPI, RMT, PIO, etc.).
/// Color components are in the range 0.0-1.0; convert to the driver's native
/// format. Handle any hardware errors internally - these methods cannot fail.
pub trait PixelStrip {
    /// Number of addressable cells.
    fn len(&self) -> usize;

    /// Returns true if the strip has no cells.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sets one cell in the frame buffer. Out-of-range indices are ignored.
    fn set_pixel(&mut self, index: usize, color: Srgb);

    /// Pushes the frame buffer to the strip.
    fn show(&mut self);
}

/// Trait for abstracting a buffered text display.
pub trait TextDisplay {
    /// Clears the frame buffer.
    fn clear(&mut self);

    /// Draws a line of text into the frame buffer.
    fn write_text(&mut self, text: &str);

    /// Flushes the frame buffer to the panel.
    fn commit(&mut self);
}

/// Visual output the controller renders the counter through.
pub trait ProgressSink {
    /// Count that lights the whole strip. Must equal the counter threshold.
    fn threshold(&self) -> u32;

    /// Shows `count` as lit cells and as a numeric readout.
    fn render(&mut self, count: u32);

    /// Replaces the readout with the completion text.
    fn render_completion_message(&mut self);

    /// Plays the completion animation and returns once it is finished.
    fn run_completion_animation(&mut self);
}

/// Number of cells lit for `count` out of `threshold`, rounded to nearest and
/// clamped to `cells`.
///
/// `threshold` of zero lights nothing.
pub fn lit_cells(count: u32, threshold: u32, cells: usize) -> usize {
    if threshold == 0 {
        return 0;
    }

    let scaled = count as u64 * cells as u64;
    let threshold = threshold as u64;
    let rounded = (scaled * 2 + threshold) / (threshold * 2);
    (rounded as usize).min(cells)
}

/// Readout length: label plus the widest `u32`.
const READOUT_CAPACITY: usize = 24;

/// [`ProgressSink`] backed by a pixel strip and a text display.
///
/// The completion animation blocks the caller for
/// `frames * frame_delay_ms` milliseconds.
///
/// # Type Parameters
/// * `P` - Pixel strip
/// * `T` - Text display
/// * `D` - Delay provider for the animation frame interval
pub struct StripProgress<P: PixelStrip, T: TextDisplay, D: DelayNs> {
    strip: P,
    display: T,
    delay: D,
    threshold: u32,
    frames: u32,
    frame_delay_ms: u32,
}

impl<P: PixelStrip, T: TextDisplay, D: DelayNs> StripProgress<P, T, D> {
    /// Creates a sink mapping `0..=config.threshold()` onto the whole strip.
    pub fn for_config(
        strip: P,
        display: T,
        delay: D,
        config: &ControllerConfig,
    ) -> Result<Self, ConfigError> {
        Self::new(strip, display, delay, config.threshold())
    }

    /// Creates a sink mapping `0..=threshold` onto the whole strip.
    pub fn new(strip: P, display: T, delay: D, threshold: u32) -> Result<Self, ConfigError> {
        if threshold == 0 {
            return Err(ConfigError::ZeroThreshold);
        }
        if strip.is_empty() {
            return Err(ConfigError::ZeroCells);
        }

        Ok(Self {
            strip,
            display,
            delay,
            threshold,
            frames: ANIMATION_FRAMES,
            frame_delay_ms: ANIMATION_FRAME_DELAY_MS,
        })
    }

    /// Overrides the completion animation length and pacing.
    pub fn animation(mut self, frames: u32, frame_delay_ms: u32) -> Self {
        self.frames = frames;
        self.frame_delay_ms = frame_delay_ms;
        self
    }

    /// Number of cells on the strip.
    pub fn cells(&self) -> usize {
        self.strip.len()
    }

    /// Releases the owned peripherals.
    pub fn release(self) -> (P, T, D) {
        (self.strip, self.display, self.delay)
    }

    fn draw_readout(&mut self, count: u32) {
        let mut text: heapless::String<READOUT_CAPACITY> = heapless::String::new();
        let _ = write!(text, "{}{}", COUNT_LABEL, count);

        self.display.clear();
        self.display.write_text(&text);
        self.display.commit();
    }
}

impl<P: PixelStrip, T: TextDisplay, D: DelayNs> ProgressSink for StripProgress<P, T, D> {
    fn threshold(&self) -> u32 {
        self.threshold
    }

    fn render(&mut self, count: u32) {
        let cells = self.strip.len();
        let lit = lit_cells(count, self.threshold, cells);

        for index in 0..cells {
            let color = if index < lit { PROGRESS_COLOR } else { OFF };
            self.strip.set_pixel(index, color);
        }
        self.strip.show();

        self.draw_readout(count);
    }

    fn render_completion_message(&mut self) {
        self.display.clear();
        self.display.write_text(COMPLETION_TEXT);
        self.display.commit();
    }

    fn run_completion_animation(&mut self) {
        let cells = self.strip.len();

        for frame in 0..self.frames {
            for index in 0..cells {
                let position = colors::sweep_position(index, cells, frame);
                self.strip.set_pixel(index, colors::wheel(position));
            }
            self.strip.show();
            self.delay.delay_ms(self.frame_delay_ms);
        }
    }
}
