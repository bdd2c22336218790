//! Half-duplex status bus.
//!
//! Provides [`DirectionalBus`], which wraps a write-only serial transport and
//! the transceiver's direction line. Every transmission follows the same
//! turnaround: switch to transmit, settle, write, settle, switch back to receive.
//! The bus is never left in transmit between calls.

use crate::config::GUARD_DELAY_US;
use crate::types::BusDirection;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

/// Trait for abstracting the serial transmitter.
///
/// Implement this for your UART. Writes are fire-and-forget: handle any
/// hardware errors internally. The call must return only once the bytes
/// have left the shift register, otherwise the direction switch that follows
/// truncates the frame.
pub trait SerialTx {
    /// Clocks out `bytes` on the wire.
    fn write_bytes(&mut self, bytes: &[u8]);
}

/// Destination for status text.
pub trait StatusBus {
    /// Sends one message.
    fn send(&mut self, message: &str);
}

/// Serial transport plus direction control line.
///
/// # Type Parameters
/// * `S` - Serial transmitter
/// * `P` - Direction pin (high = transmit)
/// * `D` - Delay provider for the guard delays
pub struct DirectionalBus<S: SerialTx, P: OutputPin, D: DelayNs> {
    serial: S,
    direction_pin: P,
    delay: D,
    direction: BusDirection,
    guard_delay_us: u32,
}

impl<S: SerialTx, P: OutputPin, D: DelayNs> DirectionalBus<S, P, D> {
    /// Creates a bus and drives the direction line to receive.
    pub fn new(serial: S, direction_pin: P, delay: D) -> Self {
        Self::with_guard_delay(serial, direction_pin, delay, GUARD_DELAY_US)
    }

    /// Creates a bus with a custom guard delay.
    pub fn with_guard_delay(
        serial: S,
        mut direction_pin: P,
        delay: D,
        guard_delay_us: u32,
    ) -> Self {
        let _ = direction_pin.set_low();

        Self {
            serial,
            direction_pin,
            delay,
            direction: BusDirection::Receive,
            guard_delay_us,
        }
    }

    /// Current transceiver direction.
    pub fn direction(&self) -> BusDirection {
        self.direction
    }

    /// Guard delay applied on each side of a write.
    pub fn guard_delay_us(&self) -> u32 {
        self.guard_delay_us
    }

    /// Releases the owned peripherals.
    pub fn release(self) -> (S, P, D) {
        (self.serial, self.direction_pin, self.delay)
    }

    fn set_direction(&mut self, direction: BusDirection) {
        // A failed pin write is not recoverable here and the line state is
        // tracked as commanded.
        let _ = match direction {
            BusDirection::Transmit => self.direction_pin.set_high(),
            BusDirection::Receive => self.direction_pin.set_low(),
        };
        self.direction = direction;
    }
}

impl<S: SerialTx, P: OutputPin, D: DelayNs> StatusBus for DirectionalBus<S, P, D> {
    fn send(&mut self, message: &str) {
        self.set_direction(BusDirection::Transmit);
        self.delay.delay_us(self.guard_delay_us);

        self.serial.write_bytes(message.as_bytes());

        self.delay.delay_us(self.guard_delay_us);
        self.set_direction(BusDirection::Receive);
    }
}
