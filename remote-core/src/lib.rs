//! Platform-agnostic IR remote decoding traits and orchestration.
//!
//! This crate provides the core abstractions for turning infrared remote
//! presses into [`LogicalCode`] values without any platform-specific
//! dependencies. It can be used both in embedded `no_std` environments and
//! on host for testing.
//!
//! # Overview
//!
//! The crate is organized into two modules:
//!
//! - [`decoder`]: The hardware boundary ([`PulseDecoder`], [`DecodeOutcome`],
//!   the [`PulseBuffer`]/[`FrameBytes`] buffers)
//! - [`remote`]: The orchestrator ([`RemoteControl`])
//!
//! and re-exports the protocol layer from [`remote_proto`]
//! ([`LogicalCode`], [`classify`], [`resolve`], the code tables).
//!
//! # Control flow
//!
//! One call to [`RemoteControl::code`] runs one poll: capture a pulse
//! train (or bail out idle), demodulate it to bytes behind the
//! [`PulseDecoder`] trait, classify the bytes by protocol shape, and
//! resolve the derived key through the static code table. Every failure
//! along the way collapses to [`LogicalCode::Unknown`]; the only error
//! that ever crosses to the caller is a failed hardware acquisition at
//! construction time, which belongs to the decoder implementation.
//!
//! # Example
//!
//! ```
//! use remote_core::{DecodeOutcome, FrameBytes, LogicalCode, PulseBuffer,
//!                   PulseDecoder, RemoteControl};
//!
//! // A canned decoder standing in for real hardware.
//! struct Canned;
//!
//! impl PulseDecoder for Canned {
//!     fn capture(&mut self, _blocking: bool) -> Option<PulseBuffer> {
//!         Some(PulseBuffer::from_slice(&[9000, 4500, 560, 560]).unwrap())
//!     }
//!     fn demodulate(&mut self, _pulses: &PulseBuffer) -> DecodeOutcome {
//!         DecodeOutcome::Frame(FrameBytes::from_slice(&[255, 2, 207, 48]).unwrap())
//!     }
//! }
//!
//! let mut remote = RemoteControl::new(Canned);
//! assert_eq!(remote.code(false), LogicalCode::Zero);
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Route debug traces to defmt (for embedded logging)
//! - **`log`**: Route debug traces to `log` (for host applications)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations;
//! pulse trains and frames live in fixed-capacity `heapless` buffers.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod decoder;
pub mod remote;
mod trace;

// Re-export main types at crate root
pub use decoder::{
    DecodeError, DecodeOutcome, FrameBytes, PulseBuffer, PulseDecoder, MAX_FRAME_BYTES, MAX_PULSES,
};
pub use remote::RemoteControl;

// Re-export the protocol layer so consumers only need this crate
pub use remote_proto::{classify, lookup_key, resolve, table, FrameShape, LogicalCode};
