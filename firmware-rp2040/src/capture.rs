//! GPIO edge-timing pulse capture for an active-low IR receiver module.
//!
//! A 38 kHz receiver (TSOP-style) idles high and pulls its data pin low
//! for the duration of each carrier burst. This module measures those
//! mark/space durations by polling the pin against `embassy_time::Instant`
//! and records them into a [`PulseBuffer`], lead mark first.

use embassy_rp::gpio::{Input, Level};
use embassy_time::{Duration, Instant};
use remote_core::PulseBuffer;

/// How long a blocking capture waits for a first mark before giving up.
const IDLE_TIMEOUT_US: u64 = 150_000;

/// A mark longer than this means a stuck or shorted line, not a frame.
const MARK_TIMEOUT_US: u64 = 12_000;

/// A space longer than this ends the frame (the longest in-frame space,
/// the 4.5 ms NEC header gap, is well below it).
const FRAME_GAP_US: u64 = 6_000;

/// Owns the receiver pin and records raw pulse trains off it.
///
/// Exclusive ownership of the pin is enforced by construction: the GPIO
/// peripheral moves into the `Input`, and the `Input` moves in here, so a
/// second capture instance on the same receiver cannot exist.
pub struct IrCapture<'d> {
    pin: Input<'d>,
}

impl<'d> IrCapture<'d> {
    /// Take ownership of the receiver pin (configured with `Pull::Up`).
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }

    /// Record one pulse train.
    ///
    /// Non-blocking mode returns `None` immediately while the line idles
    /// high. Blocking mode waits up to the idle timeout for a first mark;
    /// `None` after that timeout means idle, same as non-blocking.
    pub fn record(&mut self, blocking: bool) -> Option<PulseBuffer> {
        if self.pin.is_high() {
            if !blocking {
                return None;
            }
            self.wait_for_level(Level::Low, IDLE_TIMEOUT_US)?;
        }

        let mut pulses = PulseBuffer::new();
        let mut level = Level::Low;
        loop {
            let timeout = match level {
                Level::Low => MARK_TIMEOUT_US,
                Level::High => FRAME_GAP_US,
            };
            match self.time_level(level, timeout) {
                Some(us) => {
                    if pulses.push(us.min(u16::MAX as u64) as u16).is_err() {
                        // Train longer than the buffer; return what fits
                        // and let demodulation reject it.
                        break;
                    }
                    level = match level {
                        Level::Low => Level::High,
                        Level::High => Level::Low,
                    };
                }
                // Frame gap (or a stuck line): the train is over.
                None => break,
            }
        }
        Some(pulses)
    }

    /// Poll until the pin reaches `level` or the timeout expires.
    fn wait_for_level(&self, level: Level, timeout_us: u64) -> Option<()> {
        let start = Instant::now();
        let timeout = Duration::from_micros(timeout_us);
        loop {
            if self.current_level() == level {
                return Some(());
            }
            if start.elapsed() > timeout {
                return None;
            }
        }
    }

    /// Measure how long the pin stays at `level`, in microseconds.
    ///
    /// Returns `None` when the level outlasts the timeout.
    fn time_level(&self, level: Level, timeout_us: u64) -> Option<u64> {
        let start = Instant::now();
        let timeout = Duration::from_micros(timeout_us);
        loop {
            if self.current_level() != level {
                return Some(start.elapsed().as_micros());
            }
            if start.elapsed() > timeout {
                return None;
            }
        }
    }

    fn current_level(&self) -> Level {
        if self.pin.is_high() {
            Level::High
        } else {
            Level::Low
        }
    }
}
