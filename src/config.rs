//! Compile-time defaults and the runtime configuration built from them.

use crate::types::Tone;
use palette::Srgb;

/// How long the raw button level must hold before it is accepted.
pub const DEBOUNCE_WINDOW_MS: u64 = 20;

/// Presses needed to reach the goal.
pub const PRESS_THRESHOLD: u32 = 1000;

/// Number of cells on the indicator strip.
pub const INDICATOR_CELLS: usize = 16;

/// Short confirmation beep played on every accepted press.
pub const BEEP: Tone = Tone::new(1000, 100);

/// Ascending melody played when the goal is reached.
pub const VICTORY_MELODY: [Tone; 3] = [
    Tone::new(1200, 200),
    Tone::new(1500, 200),
    Tone::new(1800, 300),
];

/// Frames in the completion hue sweep.
pub const ANIMATION_FRAMES: u32 = 256;

/// Pause between two frames of the hue sweep.
pub const ANIMATION_FRAME_DELAY_MS: u32 = 30;

/// Settling time around every direction switch of the bus transceiver.
pub const GUARD_DELAY_US: u32 = 10;

/// Symbol rate of the status bus. Applied by the board when the UART is set up.
pub const BAUD_RATE: u32 = 9600;

/// Color of a lit progress cell.
pub const PROGRESS_COLOR: Srgb = Srgb::new(0.0, 1.0, 0.0);

/// Readout shown once the goal is reached.
pub const COMPLETION_TEXT: &str = "Goal Reached!";

/// Prefix of the count readout.
pub const COUNT_LABEL: &str = "Count: ";

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Threshold of zero would fire the goal on every press and divide by zero
    /// when mapping progress.
    ZeroThreshold,

    /// Indicator strip reports no cells.
    ZeroCells,

    /// Progress sink maps a different threshold than the counter uses.
    ThresholdMismatch {
        /// Threshold of the counter configuration.
        counter: u32,
        /// Threshold the progress sink maps onto the strip.
        progress: u32,
    },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroThreshold => write!(f, "press threshold must be at least 1"),
            ConfigError::ZeroCells => write!(f, "indicator strip must have at least one cell"),
            ConfigError::ThresholdMismatch { counter, progress } => write!(
                f,
                "progress sink threshold {} does not match counter threshold {}",
                progress, counter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Counter and input settings.
///
/// Fields are private so a zero threshold can only be rejected, never built:
///
/// ```compile_fail
/// let config = press_counter::ControllerConfig {
///     threshold: 0,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    threshold: u32,
    debounce_window_ms: u64,
    beep: Tone,
    victory_melody: &'static [Tone],
}

impl ControllerConfig {
    /// Creates a configuration with the given threshold and default everything else.
    pub fn new(threshold: u32) -> Result<Self, ConfigError> {
        if threshold == 0 {
            return Err(ConfigError::ZeroThreshold);
        }

        Ok(Self {
            threshold,
            ..Self::default()
        })
    }

    /// Overrides the debounce window.
    pub fn with_debounce_window_ms(mut self, window_ms: u64) -> Self {
        self.debounce_window_ms = window_ms;
        self
    }

    /// Overrides the victory melody.
    pub fn with_victory_melody(mut self, melody: &'static [Tone]) -> Self {
        self.victory_melody = melody;
        self
    }

    /// Presses needed to reach the goal. Never zero.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Debounce stability window.
    pub fn debounce_window_ms(&self) -> u64 {
        self.debounce_window_ms
    }

    /// Tone played on every accepted press.
    pub fn beep(&self) -> Tone {
        self.beep
    }

    /// Melody played when the goal is reached.
    pub fn victory_melody(&self) -> &'static [Tone] {
        self.victory_melody
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            threshold: PRESS_THRESHOLD,
            debounce_window_ms: DEBOUNCE_WINDOW_MS,
            beep: BEEP,
            victory_melody: &VICTORY_MELODY,
        }
    }
}
