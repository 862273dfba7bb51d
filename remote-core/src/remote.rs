//! RemoteControl: polls a pulse decoder and resolves frames to codes.

use remote_proto::{resolve, LogicalCode};

use crate::decoder::{DecodeOutcome, PulseDecoder};
use crate::trace::debug_line;

/// Polls an IR pulse decoder and maps whatever it hears to a
/// [`LogicalCode`].
///
/// One instance owns one decoder (and through it, one physical receiver)
/// for the process lifetime. The caller drives a loop around
/// [`code`](RemoteControl::code); any inter-poll delay belongs to the
/// caller, not to this type.
///
/// # Error Handling
///
/// Every per-call failure - idle receiver, repeat frame, malformed train,
/// buffer exhaustion, short frame - is absorbed here and reduced to
/// [`LogicalCode::Unknown`]. The polling application never observes a
/// panic or error from decoding.
pub struct RemoteControl<D> {
    decoder: D,
    debug: bool,
}

impl<D: PulseDecoder> RemoteControl<D> {
    /// Create a remote control around a pulse decoder, debug traces off.
    pub fn new(decoder: D) -> Self {
        Self::with_debug(decoder, false)
    }

    /// Create a remote control with the debug trace channel switched on or
    /// off. Traces never affect control flow or return values.
    pub fn with_debug(decoder: D, debug: bool) -> Self {
        Self { decoder, debug }
    }

    /// Poll for the next remote command.
    ///
    /// With `blocking = false` this never suspends: it returns
    /// [`LogicalCode::Unknown`] immediately when no pulse train is
    /// pending. With `blocking = true` it waits until the decoder captures
    /// a train or its idle timeout elapses. A caller wanting cancellable
    /// waits should poll with `blocking = false`.
    pub fn code(&mut self, blocking: bool) -> LogicalCode {
        let Some(pulses) = self.decoder.capture(blocking) else {
            return LogicalCode::Unknown;
        };
        if self.debug {
            debug_line!("remote: captured {} pulses", pulses.len());
        }

        match self.decoder.demodulate(&pulses) {
            DecodeOutcome::Idle => LogicalCode::Unknown,
            DecodeOutcome::Repeat => {
                // No last-command state is kept, so a repeat cannot be
                // resolved to its referent.
                if self.debug {
                    debug_line!("remote: repeat frame");
                }
                LogicalCode::Unknown
            }
            DecodeOutcome::Failed(err) => {
                if self.debug {
                    debug_line!("remote: decode failed: {}", err.as_str());
                }
                LogicalCode::Unknown
            }
            DecodeOutcome::Frame(frame) => {
                let code = resolve(&frame);
                if self.debug {
                    debug_line!(
                        "remote: {} byte frame -> code {}",
                        frame.len(),
                        code.raw()
                    );
                }
                code
            }
        }
    }

    /// Get a reference to the decoder.
    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    /// Get a mutable reference to the decoder.
    pub fn decoder_mut(&mut self) -> &mut D {
        &mut self.decoder
    }

    /// Decompose into the underlying decoder.
    pub fn into_inner(self) -> D {
        self.decoder
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec;
    use std::vec::Vec;

    use super::*;
    use crate::decoder::{DecodeError, FrameBytes, PulseBuffer};

    /// Scripted decoder: plays back capture results and demodulation
    /// outcomes, counting calls to each stage.
    struct MockDecoder {
        captures: Vec<Option<PulseBuffer>>,
        outcomes: Vec<DecodeOutcome>,
        capture_calls: usize,
        demodulate_calls: usize,
    }

    impl MockDecoder {
        fn new(captures: Vec<Option<PulseBuffer>>, outcomes: Vec<DecodeOutcome>) -> Self {
            Self {
                captures,
                outcomes,
                capture_calls: 0,
                demodulate_calls: 0,
            }
        }
    }

    impl PulseDecoder for MockDecoder {
        fn capture(&mut self, _blocking: bool) -> Option<PulseBuffer> {
            let next = self.captures.get(self.capture_calls).cloned().flatten();
            self.capture_calls += 1;
            next
        }

        fn demodulate(&mut self, _pulses: &PulseBuffer) -> DecodeOutcome {
            let next = self
                .outcomes
                .get(self.demodulate_calls)
                .cloned()
                .unwrap_or(DecodeOutcome::Idle);
            self.demodulate_calls += 1;
            next
        }
    }

    fn pulses() -> PulseBuffer {
        PulseBuffer::from_slice(&[9000, 4500, 560, 560, 560, 1690]).unwrap()
    }

    fn frame(bytes: &[u8]) -> FrameBytes {
        FrameBytes::from_slice(bytes).unwrap()
    }

    #[test]
    fn test_idle_capture_skips_demodulation() {
        let mut remote = RemoteControl::new(MockDecoder::new(vec![None], vec![]));
        assert_eq!(remote.code(false), LogicalCode::Unknown);
        assert_eq!(remote.decoder().capture_calls, 1);
        assert_eq!(remote.decoder().demodulate_calls, 0);
    }

    #[test]
    fn test_frame_resolves_to_code() {
        let outcome = DecodeOutcome::Frame(frame(&[255, 2, 207, 48]));
        let mut remote = RemoteControl::new(MockDecoder::new(vec![Some(pulses())], vec![outcome]));
        assert_eq!(remote.code(false), LogicalCode::Zero);
    }

    #[test]
    fn test_repeat_frame_is_unknown() {
        let mut remote = RemoteControl::new(MockDecoder::new(
            vec![Some(pulses())],
            vec![DecodeOutcome::Repeat],
        ));
        assert_eq!(remote.code(false), LogicalCode::Unknown);
    }

    #[test]
    fn test_decode_failures_are_contained() {
        let failures = [
            DecodeError::Envelope,
            DecodeError::BitTiming,
            DecodeError::Truncated,
            DecodeError::OutOfMemory,
        ];
        for err in failures {
            let mut remote = RemoteControl::new(MockDecoder::new(
                vec![Some(pulses())],
                vec![DecodeOutcome::Failed(err)],
            ));
            assert_eq!(remote.code(false), LogicalCode::Unknown);
        }
    }

    #[test]
    fn test_short_frame_is_contained() {
        // A one-byte frame cannot be indexed by any classification rule;
        // it must come back Unknown, not panic.
        let outcome = DecodeOutcome::Frame(frame(&[255]));
        let mut remote = RemoteControl::new(MockDecoder::new(vec![Some(pulses())], vec![outcome]));
        assert_eq!(remote.code(false), LogicalCode::Unknown);
    }

    #[test]
    fn test_identical_frames_yield_identical_codes() {
        let outcomes = vec![
            DecodeOutcome::Frame(frame(&[255, 2, 95, 160])),
            DecodeOutcome::Frame(frame(&[255, 2, 95, 160])),
        ];
        let captures = vec![Some(pulses()), Some(pulses())];
        let mut remote = RemoteControl::new(MockDecoder::new(captures, outcomes));
        assert_eq!(remote.code(false), LogicalCode::Up);
        assert_eq!(remote.code(false), LogicalCode::Up);
    }

    #[test]
    fn test_debug_flag_does_not_change_result() {
        let make = |debug| {
            RemoteControl::with_debug(
                MockDecoder::new(
                    vec![Some(pulses())],
                    vec![DecodeOutcome::Frame(frame(&[255, 2, 111, 144]))],
                ),
                debug,
            )
        };
        assert_eq!(make(false).code(false), make(true).code(false));
    }

    #[test]
    fn test_into_inner_returns_decoder() {
        let remote = RemoteControl::new(MockDecoder::new(vec![], vec![]));
        let decoder = remote.into_inner();
        assert_eq!(decoder.capture_calls, 0);
    }
}
