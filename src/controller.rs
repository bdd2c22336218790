//! Counter orchestration.
//!
//! Provides [`CounterController`], which owns the press counter and the
//! debounce filter, and fans every accepted press out to the progress sink,
//! the feedback sink and the status bus. Reaching the threshold runs the
//! victory sequence and starts counting again from zero.

use crate::bus::StatusBus;
use crate::config::{ConfigError, ControllerConfig};
use crate::debounce::Debouncer;
use crate::feedback::FeedbackSink;
use crate::message::StatusMessage;
use crate::progress::ProgressSink;
use crate::time::{TimeInstant, TimeSource};
use crate::types::{ButtonLevel, EdgeEvent};
use embedded_hal::digital::InputPin;

/// Owns the counter and every output it drives.
///
/// All state is mutated synchronously from the polling loop. The victory
/// sequence blocks that loop until it completes, so presses made during the
/// animation are not counted.
///
/// # Type Parameters
/// * `I` - Time instant type
/// * `P` - Progress sink (pixel strip and display)
/// * `F` - Feedback sink (buzzer)
/// * `B` - Status bus
pub struct CounterController<I: TimeInstant, P: ProgressSink, F: FeedbackSink, B: StatusBus> {
    progress: P,
    feedback: F,
    bus: B,
    debouncer: Debouncer<I>,
    config: ControllerConfig,
    value: u32,
    goals_reached: u32,
}

impl<I: TimeInstant, P: ProgressSink, F: FeedbackSink, B: StatusBus> CounterController<I, P, F, B> {
    /// Creates a controller at zero and shows the idle readout.
    ///
    /// Fails with [`ConfigError::ThresholdMismatch`] if the progress sink maps a
    /// different threshold than `config`.
    pub fn new(
        mut progress: P,
        feedback: F,
        bus: B,
        config: ControllerConfig,
        now: I,
    ) -> Result<Self, ConfigError> {
        if progress.threshold() != config.threshold() {
            return Err(ConfigError::ThresholdMismatch {
                counter: config.threshold(),
                progress: progress.threshold(),
            });
        }

        progress.render(0);

        Ok(Self {
            progress,
            feedback,
            bus,
            debouncer: Debouncer::with_window_ms(config.debounce_window_ms(), now),
            config,
            value: 0,
            goals_reached: 0,
        })
    }

    /// Samples the button pin and the clock, then runs [`poll`](Self::poll).
    ///
    /// The pin is active low. A failed read skips this sample.
    pub fn service<Pin: InputPin, T: TimeSource<I>>(
        &mut self,
        pin: &mut Pin,
        time_source: &T,
    ) -> Option<EdgeEvent> {
        let Ok(is_low) = pin.is_low() else {
            return None;
        };

        self.poll(ButtonLevel::from_is_low(is_low), time_source.now())
    }

    /// Feeds one raw sample through the debounce filter and acts on the result.
    ///
    /// A falling edge counts as a press. A rising edge is returned to the caller
    /// but does not touch the counter.
    pub fn poll(&mut self, raw_level: ButtonLevel, now: I) -> Option<EdgeEvent> {
        let edge = self.debouncer.poll(raw_level, now)?;

        match edge {
            EdgeEvent::Falling => self.on_press_edge(),
            EdgeEvent::Rising => {
                #[cfg(feature = "defmt")]
                defmt::debug!("release accepted");
            }
        }

        Some(edge)
    }

    /// Counts one press and updates every output.
    ///
    /// When the count reaches the threshold the victory sequence runs and the
    /// counter returns to zero before this call returns.
    pub fn on_press_edge(&mut self) {
        self.value = self.value.saturating_add(1);

        #[cfg(feature = "defmt")]
        defmt::info!("press accepted, count = {}", self.value);

        self.progress.render(self.value);

        let beep = self.config.beep();
        self.feedback.beep(beep.frequency_hz, beep.duration_ms);

        let message = StatusMessage::new(self.value).encode();
        self.bus.send(&message);

        if self.value >= self.config.threshold() {
            #[cfg(feature = "defmt")]
            defmt::info!("goal of {} reached", self.config.threshold());

            self.run_victory_sequence();
            self.value = 0;
            self.goals_reached = self.goals_reached.saturating_add(1);
            self.progress.render(0);
        }
    }

    /// Plays the melody, shows the completion text, then runs the animation.
    ///
    /// Blocks until all three steps are done. Does not touch the counter.
    pub fn run_victory_sequence(&mut self) {
        self.feedback.play_melody(self.config.victory_melody());
        self.progress.render_completion_message();
        self.progress.run_completion_animation();
    }

    /// Current count.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Count that triggers the victory sequence.
    pub fn threshold(&self) -> u32 {
        self.config.threshold()
    }

    /// Number of times the threshold has been reached since start-up.
    pub fn goals_reached(&self) -> u32 {
        self.goals_reached
    }

    /// Debounced button level.
    pub fn button_level(&self) -> ButtonLevel {
        self.debouncer.accepted_level()
    }

    /// Returns a reference to the progress sink.
    pub fn progress(&self) -> &P {
        &self.progress
    }

    /// Returns a reference to the feedback sink.
    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    /// Returns a reference to the status bus.
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Releases the owned outputs.
    pub fn release(self) -> (P, F, B) {
        (self.progress, self.feedback, self.bus)
    }
}
