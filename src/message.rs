//! Status line sent over the bus after every accepted press.

use core::fmt::{self, Write};
use heapless::String;

/// Enough room for `COUNT:` plus the widest `u32` and the newline.
pub const MESSAGE_CAPACITY: usize = 24;

/// An immutable `COUNT:<value>\n` record, built fresh for each transmission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusMessage {
    value: u32,
}

impl StatusMessage {
    /// Creates the message for a counter value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self { value }
    }

    /// Counter value carried by this message.
    #[inline]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Renders the wire text.
    pub fn encode(&self) -> String<MESSAGE_CAPACITY> {
        let mut text = String::new();
        // Capacity covers every u32, so the write cannot overflow.
        let _ = write!(text, "{}", self);
        text
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "COUNT:{}", self.value)
    }
}
