//! Core value types shared by the input filter, the controller and the outputs.

/// Logic level of the pushbutton line.
///
/// The button is wired to ground with a pull-up, so `High` is released and
/// `Low` is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonLevel {
    /// Released (pull-up idle).
    High,
    /// Pressed.
    Low,
}

impl ButtonLevel {
    /// Maps an active-low pin reading to a level.
    #[inline]
    pub fn from_is_low(is_low: bool) -> Self {
        if is_low { ButtonLevel::Low } else { ButtonLevel::High }
    }

    /// Returns true for the pressed level.
    #[inline]
    pub fn is_pressed(self) -> bool {
        self == ButtonLevel::Low
    }
}

/// An accepted transition of the debounced button level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeEvent {
    /// High to low: the button was pressed.
    Falling,
    /// Low to high: the button was released.
    Rising,
}

/// Transceiver direction of the half-duplex bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusDirection {
    /// Driver enabled, bytes may be clocked out.
    Transmit,
    /// Driver released, line left to the other party.
    Receive,
}

/// A single buzzer note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tone {
    /// Square-wave frequency.
    pub frequency_hz: u32,

    /// How long the note sounds.
    pub duration_ms: u32,
}

impl Tone {
    /// Creates a new tone.
    #[inline]
    pub const fn new(frequency_hz: u32, duration_ms: u32) -> Self {
        Self {
            frequency_hz,
            duration_ms,
        }
    }
}
