//! IR remote receiver and decoder for RP2040.
//!
//! This crate provides the embedded implementation of the remote decoder:
//! it captures pulse trains from an IR receiver module on a GPIO pin,
//! demodulates them per the NEC-family envelope, and hands the bytes to
//! [`remote_core`] for classification and code lookup.
//!
//! # Hardware Configuration
//!
//! | Function        | GPIO | Description                              |
//! |-----------------|------|------------------------------------------|
//! | IR receiver OUT | 15   | 38 kHz receiver data pin (active low)    |
//!
//! The receiver module idles high; configure the pin with `Pull::Up`.
//!
//! # Architecture
//!
//! Decoding is a synchronous, cooperative polling pipeline driven from a
//! single task: the demo binary calls
//! [`RemoteControl::code`](remote_core::RemoteControl::code) with
//! `blocking = false` on a fixed cadence, and every stage failure
//! collapses to `LogicalCode::Unknown` rather than an error. No state is
//! shared between polls.
//!
//! # Modules
//!
//! - [`capture`]: GPIO edge-timing pulse capture ([`IrCapture`])
//! - [`nec`]: NEC envelope demodulation ([`NecIrDecoder`])
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent watchdog reset)
//!
//! # Re-exports
//!
//! This crate re-exports the public items of [`remote_core`] for
//! convenience, so consumers only need to depend on this crate.

#![no_std]

// Re-export core types for convenience
pub use remote_core::{
    classify, lookup_key, resolve, DecodeError, DecodeOutcome, FrameBytes, FrameShape,
    LogicalCode, PulseBuffer, PulseDecoder, RemoteControl, MAX_FRAME_BYTES, MAX_PULSES,
};

pub mod capture;
pub mod nec;

pub use capture::IrCapture;
pub use nec::NecIrDecoder;
