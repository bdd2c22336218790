#![cfg_attr(not(feature = "std"), no_std)]

//! Debounced pushbutton counter with fan-out to four outputs.
//!
//! # Core Concepts
//!
//! - **`Debouncer`**: Filters the raw active-low button line into accepted edges using a wall-clock stability window
//! - **`CounterController`**: Owns the counter, reacts to presses and runs the victory sequence at the threshold
//! - **`ProgressSink`**: Renders the count on a pixel strip and text display (`StripProgress` for hardware)
//! - **`FeedbackSink`**: Beeps and melodies on a buzzer (`Buzzer` for hardware)
//! - **`DirectionalBus`**: Half-duplex serial bus carrying `COUNT:<n>\n` status lines
//! - **`PixelStrip`**, **`TextDisplay`**, **`ToneGenerator`**, **`SerialTx`**: Traits to implement for your hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Direction control and blocking waits use `embedded-hal` 1.0 (`OutputPin`,
//! `DelayNs`), and the button may be sampled through any `InputPin`.

pub use palette::Srgb;

pub mod bus;
pub mod colors;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod feedback;
pub mod message;
pub mod progress;
pub mod time;
pub mod types;

pub use bus::{DirectionalBus, SerialTx, StatusBus};
pub use config::{ConfigError, ControllerConfig};
pub use controller::CounterController;
pub use debounce::Debouncer;
pub use feedback::{Buzzer, FeedbackSink, ToneGenerator};
pub use message::StatusMessage;
pub use progress::{PixelStrip, ProgressSink, StripProgress, TextDisplay, lit_cells};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{BusDirection, ButtonLevel, EdgeEvent, Tone};
