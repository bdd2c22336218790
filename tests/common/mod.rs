//! Shared test infrastructure for press-counter integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::{Cell, RefCell};
use core::convert::Infallible;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use palette::Srgb;
use press_counter::{
    Buzzer, ControllerConfig, CounterController, DirectionalBus, PixelStrip, SerialTx,
    StripProgress, TextDisplay, TimeDuration, TimeInstant, TimeSource, ToneGenerator,
};
use std::rc::Rc;

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Shared Event Journal
// ============================================================================

/// Everything a mock peripheral was asked to do, in call order
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Frame(Vec<Srgb>),
    DisplayClear,
    DisplayText(String),
    DisplayCommit,
    ToneStart(u32),
    ToneTimed(u32, u32),
    ToneStop,
    DelayUs(u32),
    DelayMs(u32),
    DirectionHigh,
    DirectionLow,
    Serial(Vec<u8>),
}

#[derive(Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<Event>>>);

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.0.borrow().iter().filter(|e| pred(e)).count()
    }

    /// All bytes written to the serial port, concatenated
    pub fn serial_output(&self) -> Vec<u8> {
        self.0
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Serial(bytes) => Some(bytes.clone()),
                _ => None,
            })
            .flatten()
            .collect()
    }

    /// The most recently pushed strip frame
    pub fn last_frame(&self) -> Option<Vec<Srgb>> {
        self.0.borrow().iter().rev().find_map(|e| match e {
            Event::Frame(cells) => Some(cells.clone()),
            _ => None,
        })
    }

    /// The most recent line of text drawn on the display
    pub fn last_text(&self) -> Option<String> {
        self.0.borrow().iter().rev().find_map(|e| match e {
            Event::DisplayText(text) => Some(text.clone()),
            _ => None,
        })
    }
}

// ============================================================================
// Mock Peripherals
// ============================================================================

pub struct MockStrip {
    cells: Vec<Srgb>,
    journal: Journal,
}

impl MockStrip {
    pub fn new(len: usize, journal: &Journal) -> Self {
        Self {
            cells: vec![Srgb::new(0.0, 0.0, 0.0); len],
            journal: journal.clone(),
        }
    }
}

impl PixelStrip for MockStrip {
    fn len(&self) -> usize {
        self.cells.len()
    }

    fn set_pixel(&mut self, index: usize, color: Srgb) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = color;
        }
    }

    fn show(&mut self) {
        self.journal.record(Event::Frame(self.cells.clone()));
    }
}

pub struct MockDisplay {
    journal: Journal,
}

impl MockDisplay {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
        }
    }
}

impl TextDisplay for MockDisplay {
    fn clear(&mut self) {
        self.journal.record(Event::DisplayClear);
    }

    fn write_text(&mut self, text: &str) {
        self.journal.record(Event::DisplayText(text.into()));
    }

    fn commit(&mut self) {
        self.journal.record(Event::DisplayCommit);
    }
}

pub struct MockToneGenerator {
    journal: Journal,
}

impl MockToneGenerator {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
        }
    }
}

impl ToneGenerator for MockToneGenerator {
    fn start(&mut self, frequency_hz: u32) {
        self.journal.record(Event::ToneStart(frequency_hz));
    }

    fn start_timed(&mut self, frequency_hz: u32, duration_ms: u32) {
        self.journal.record(Event::ToneTimed(frequency_hz, duration_ms));
    }

    fn stop(&mut self) {
        self.journal.record(Event::ToneStop);
    }
}

pub struct MockSerial {
    journal: Journal,
}

impl MockSerial {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
        }
    }
}

impl SerialTx for MockSerial {
    fn write_bytes(&mut self, bytes: &[u8]) {
        self.journal.record(Event::Serial(bytes.to_vec()));
    }
}

/// Direction control pin
pub struct MockPin {
    journal: Journal,
}

impl MockPin {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
        }
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.journal.record(Event::DirectionLow);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.journal.record(Event::DirectionHigh);
        Ok(())
    }
}

/// Button input pin with a settable level
pub struct MockButton {
    pressed: bool,
}

impl MockButton {
    pub fn new() -> Self {
        Self { pressed: false }
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

impl ErrorType for MockButton {
    type Error = Infallible;
}

impl InputPin for MockButton {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.pressed)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.pressed)
    }
}

/// Delay that returns immediately and records the requested wait
pub struct MockDelay {
    journal: Journal,
}

impl MockDelay {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
        }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.journal.record(Event::DelayUs(ns / 1_000));
    }

    fn delay_us(&mut self, us: u32) {
        self.journal.record(Event::DelayUs(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.journal.record(Event::DelayMs(ms));
    }
}

// ============================================================================
// Assembled Controller
// ============================================================================

pub type TestProgress = StripProgress<MockStrip, MockDisplay, MockDelay>;
pub type TestFeedback = Buzzer<MockToneGenerator, MockDelay>;
pub type TestBus = DirectionalBus<MockSerial, MockPin, MockDelay>;
pub type TestController = CounterController<TestInstant, TestProgress, TestFeedback, TestBus>;

pub const CELLS: usize = 16;

pub fn build_progress(threshold: u32, journal: &Journal) -> TestProgress {
    StripProgress::new(
        MockStrip::new(CELLS, journal),
        MockDisplay::new(journal),
        MockDelay::new(journal),
        threshold,
    )
    .unwrap()
}

pub fn build_bus(journal: &Journal) -> TestBus {
    DirectionalBus::new(
        MockSerial::new(journal),
        MockPin::new(journal),
        MockDelay::new(journal),
    )
}

/// Controller with the default outputs wired to one journal, created at `clock.now()`
pub fn build_controller(
    config: ControllerConfig,
    clock: &MockTimeSource,
) -> (TestController, Journal) {
    let journal = Journal::new();
    let progress = StripProgress::for_config(
        MockStrip::new(CELLS, &journal),
        MockDisplay::new(&journal),
        MockDelay::new(&journal),
        &config,
    )
    .unwrap();
    let feedback = Buzzer::new(MockToneGenerator::new(&journal), MockDelay::new(&journal));
    let bus = build_bus(&journal);
    let controller =
        CounterController::new(progress, feedback, bus, config, clock.now()).unwrap();
    journal.clear();
    (controller, journal)
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub const GREEN: Srgb = Srgb::new(0.0, 1.0, 0.0);
pub const BLACK: Srgb = Srgb::new(0.0, 0.0, 0.0);

/// Compare two colors with floating-point tolerance
pub fn colors_equal(a: Srgb, b: Srgb) -> bool {
    const EPSILON: f32 = 0.001;
    (a.red - b.red).abs() < EPSILON
        && (a.green - b.green).abs() < EPSILON
        && (a.blue - b.blue).abs() < EPSILON
}

/// Number of cells showing the progress color
pub fn lit_in(frame: &[Srgb]) -> usize {
    frame.iter().filter(|c| colors_equal(**c, GREEN)).count()
}
