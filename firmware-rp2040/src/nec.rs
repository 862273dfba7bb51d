//! NEC-family envelope demodulation.
//!
//! All three supported remote families transmit with the NEC timing
//! envelope: a 9 ms lead mark, a 4.5 ms header space (2.25 ms for a repeat
//! frame), pulse-distance data bits (560 µs mark, then a short space for 0
//! or a long space for 1), and a trailing stop mark. Bits are packed
//! MSB-first into bytes in arrival order; payload length varies by remote
//! (16 bits for the Lego handset, 32 for the NEC mini and Apple remotes).

use embassy_rp::gpio::Input;
use remote_core::{DecodeError, DecodeOutcome, FrameBytes, PulseBuffer, PulseDecoder};

use crate::capture::IrCapture;

// Lead mark: nominally 9000 µs.
const LEAD_MARK_MIN: u16 = 8_000;
const LEAD_MARK_MAX: u16 = 10_000;

// Header space: nominally 4500 µs.
const LEAD_SPACE_MIN: u16 = 3_500;
const LEAD_SPACE_MAX: u16 = 5_000;

// Repeat-frame space: nominally 2250 µs.
const REPEAT_SPACE_MIN: u16 = 2_000;
const REPEAT_SPACE_MAX: u16 = 2_700;

// Data bit mark: nominally 560 µs.
const BIT_MARK_MIN: u16 = 200;
const BIT_MARK_MAX: u16 = 1_000;

// Data bit space: 560 µs for a 0, 1690 µs for a 1.
const BIT_SPACE_MIN: u16 = 200;
const BIT_SPACE_MAX: u16 = 2_500;
const ONE_SPACE_THRESHOLD: u16 = 1_200;

/// Demodulate a captured pulse train.
///
/// Pure function over the durations; the outcome covers every way a train
/// can fail to carry a payload, so callers never see a panic from here.
pub fn demodulate(pulses: &[u16]) -> DecodeOutcome {
    let Some((&lead_mark, rest)) = pulses.split_first() else {
        return DecodeOutcome::Idle;
    };
    if !(LEAD_MARK_MIN..=LEAD_MARK_MAX).contains(&lead_mark) {
        return DecodeOutcome::Failed(DecodeError::Envelope);
    }

    let Some((&lead_space, rest)) = rest.split_first() else {
        return DecodeOutcome::Failed(DecodeError::Truncated);
    };
    if (REPEAT_SPACE_MIN..=REPEAT_SPACE_MAX).contains(&lead_space) {
        return DecodeOutcome::Repeat;
    }
    if !(LEAD_SPACE_MIN..=LEAD_SPACE_MAX).contains(&lead_space) {
        return DecodeOutcome::Failed(DecodeError::Envelope);
    }

    // What remains is (mark, space) pairs plus the trailing stop mark.
    let Some((_stop, data)) = rest.split_last() else {
        return DecodeOutcome::Failed(DecodeError::Truncated);
    };
    let bits = data.len() / 2;
    if data.len() % 2 != 0 || bits == 0 || bits % 8 != 0 {
        return DecodeOutcome::Failed(DecodeError::Truncated);
    }

    let mut frame = FrameBytes::new();
    let mut byte = 0u8;
    for (i, pair) in data.chunks_exact(2).enumerate() {
        let (mark, space) = (pair[0], pair[1]);
        if !(BIT_MARK_MIN..=BIT_MARK_MAX).contains(&mark)
            || !(BIT_SPACE_MIN..=BIT_SPACE_MAX).contains(&space)
        {
            return DecodeOutcome::Failed(DecodeError::BitTiming);
        }
        byte = (byte << 1) | u8::from(space > ONE_SPACE_THRESHOLD);
        if i % 8 == 7 {
            if frame.push(byte).is_err() {
                return DecodeOutcome::Failed(DecodeError::OutOfMemory);
            }
            byte = 0;
        }
    }
    DecodeOutcome::Frame(frame)
}

/// The RP2040 pulse decoder: edge-timing capture plus NEC demodulation.
///
/// Implements [`PulseDecoder`], so a
/// [`RemoteControl`](remote_core::RemoteControl) built around it runs the
/// whole capture-to-code pipeline on hardware.
pub struct NecIrDecoder<'d> {
    capture: IrCapture<'d>,
}

impl<'d> NecIrDecoder<'d> {
    /// Build a decoder around the receiver pin (active low, `Pull::Up`).
    pub fn new(pin: Input<'d>) -> Self {
        Self {
            capture: IrCapture::new(pin),
        }
    }
}

impl PulseDecoder for NecIrDecoder<'_> {
    fn capture(&mut self, blocking: bool) -> Option<PulseBuffer> {
        self.capture.record(blocking)
    }

    fn demodulate(&mut self, pulses: &PulseBuffer) -> DecodeOutcome {
        demodulate(pulses)
    }
}
