//! Audible feedback through a single-channel buzzer.

use crate::types::Tone;
use embedded_hal::delay::DelayNs;

/// Trait for abstracting a square-wave tone generator.
///
/// Implement this for your PWM or LEDC channel. Handle any hardware errors
/// internally - these methods cannot fail.
pub trait ToneGenerator {
    /// Starts a tone that keeps sounding until [`stop`](Self::stop).
    fn start(&mut self, frequency_hz: u32);

    /// Starts a tone that the hardware silences after `duration_ms` without
    /// further calls.
    fn start_timed(&mut self, frequency_hz: u32, duration_ms: u32);

    /// Silences the output.
    fn stop(&mut self);
}

/// Audible output the controller drives.
pub trait FeedbackSink {
    /// Plays a short tone that stops by itself. Returns right after issuing it.
    fn beep(&mut self, frequency_hz: u32, duration_ms: u32);

    /// Starts a continuous tone.
    fn tone(&mut self, frequency_hz: u32);

    /// Stops any tone.
    fn silence(&mut self);

    /// Blocks the caller for `duration_ms`.
    fn hold(&mut self, duration_ms: u32);

    /// Plays `melody` note by note, holding each for its duration, then silences.
    /// Blocks until the last note has finished.
    fn play_melody(&mut self, melody: &[Tone]) {
        for note in melody {
            self.tone(note.frequency_hz);
            self.hold(note.duration_ms);
        }
        self.silence();
    }
}

/// [`FeedbackSink`] backed by a tone generator and a blocking delay.
pub struct Buzzer<G: ToneGenerator, D: DelayNs> {
    generator: G,
    delay: D,
}

impl<G: ToneGenerator, D: DelayNs> Buzzer<G, D> {
    /// Creates a buzzer and makes sure it starts silent.
    pub fn new(mut generator: G, delay: D) -> Self {
        generator.stop();
        Self { generator, delay }
    }

    /// Releases the owned peripherals.
    pub fn release(self) -> (G, D) {
        (self.generator, self.delay)
    }
}

impl<G: ToneGenerator, D: DelayNs> FeedbackSink for Buzzer<G, D> {
    fn beep(&mut self, frequency_hz: u32, duration_ms: u32) {
        self.generator.start_timed(frequency_hz, duration_ms);
    }

    fn tone(&mut self, frequency_hz: u32) {
        self.generator.start(frequency_hz);
    }

    fn silence(&mut self) {
        self.generator.stop();
    }

    fn hold(&mut self, duration_ms: u32) {
        self.delay.delay_ms(duration_ms);
    }
}
