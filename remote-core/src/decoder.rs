//! Pulse decoder boundary: buffers, outcomes, and the decoder trait.
//!
//! The hardware half of the system - capturing pulse timings off the
//! receiver and demodulating them into bytes - sits behind the
//! [`PulseDecoder`] trait, so the orchestration in
//! [`RemoteControl`](crate::RemoteControl) can be exercised on host with a
//! scripted decoder. Every per-call failure mode is a value of
//! [`DecodeOutcome`]; implementations never panic across this boundary.

use heapless::Vec;

/// Capacity of a captured pulse train, in mark/space durations.
pub const MAX_PULSES: usize = 120;

/// Capacity of a demodulated frame, in bytes.
pub const MAX_FRAME_BYTES: usize = 4;

/// One captured pulse train: alternating mark/space durations in
/// microseconds, lead mark first.
pub type PulseBuffer = Vec<u16, MAX_PULSES>;

/// One demodulated frame: 2 bytes (Lego-style) or 4 (NEC/Apple style).
pub type FrameBytes = Vec<u8, MAX_FRAME_BYTES>;

/// Reason a pulse train failed to demodulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// Lead mark/space did not match the NEC-family envelope.
    Envelope,
    /// A data bit's mark or space fell outside the valid range.
    BitTiming,
    /// The train ended before a whole number of bytes was decoded.
    Truncated,
    /// The pulse train or frame would not fit its buffer.
    OutOfMemory,
}

impl DecodeError {
    /// Short diagnostic name for debug traces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DecodeError::Envelope => "envelope mismatch",
            DecodeError::BitTiming => "bad bit timing",
            DecodeError::Truncated => "truncated frame",
            DecodeError::OutOfMemory => "out of memory",
        }
    }
}

/// Outcome of demodulating one captured pulse train.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[must_use]
pub enum DecodeOutcome {
    /// Nothing to decode (empty or noise-only train).
    Idle,
    /// NEC repeat frame: "same as the previous command", no payload.
    Repeat,
    /// The train did not demodulate.
    Failed(DecodeError),
    /// A complete payload frame.
    Frame(FrameBytes),
}

/// Boundary trait for the pulse capture and demodulation stage.
///
/// An implementation owns the physical receiver for the process lifetime;
/// the design assumes one instance per receiver, with no sharing. All
/// implementations must be `no_std` compatible with no heap allocation.
pub trait PulseDecoder {
    /// Capture the next pulse train.
    ///
    /// `blocking = true` suspends the caller until a train arrives or the
    /// receiver's idle timeout elapses; `blocking = false` returns `None`
    /// immediately when no signal is pending. `None` means idle - an
    /// expected steady-state condition, not an error.
    fn capture(&mut self, blocking: bool) -> Option<PulseBuffer>;

    /// Demodulate a captured train per the NEC-family timing envelope.
    fn demodulate(&mut self, pulses: &PulseBuffer) -> DecodeOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_names() {
        let errors = [
            DecodeError::Envelope,
            DecodeError::BitTiming,
            DecodeError::Truncated,
            DecodeError::OutOfMemory,
        ];
        for err in errors {
            assert!(!err.as_str().is_empty());
        }
    }

    #[test]
    fn test_frame_capacity() {
        let mut frame = FrameBytes::new();
        for byte in [255u8, 2, 207, 48] {
            frame.push(byte).unwrap();
        }
        // A fifth byte does not fit; the decoder reports OutOfMemory
        // instead of growing.
        assert!(frame.push(0).is_err());
    }
}
