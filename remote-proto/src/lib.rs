//! IR remote protocol classification and code tables.
//!
//! This crate provides the chip-agnostic half of an infrared remote
//! decoder: given a demodulated byte frame, it determines which remote
//! family produced it, derives a 16-bit lookup key, and resolves the key to
//! a protocol-independent [`LogicalCode`]. It has no knowledge of pulse
//! timing or hardware - feeding it bytes is the caller's problem.
//!
//! # Supported remotes
//!
//! Classification is structural (frame length plus header bytes), checked
//! in a fixed priority order:
//!
//! | Shape                            | Remote family            | Lookup key                     |
//! |----------------------------------|--------------------------|--------------------------------|
//! | 2 bytes                          | Lego Power Functions     | `(frame[1] << 8) \| frame[0]`  |
//! | 4 bytes, `frame[0..2] == [136, 30]` | Apple remote          | `(frame[2] << 8) \| frame[3]`  |
//! | 4 bytes, `frame[0] == 255` or `frame[1] == 2` | NEC mini remote | `(frame[2] << 8) \| frame[3]` |
//!
//! Anything else resolves to [`LogicalCode::Unknown`]. The Apple header is
//! strictly more specific than the NEC mini header, so it must be (and is)
//! checked first.
//!
//! # Example
//!
//! ```
//! use remote_proto::{resolve, LogicalCode};
//!
//! // NEC mini remote, digit 0
//! assert_eq!(resolve(&[255, 2, 207, 48]), LogicalCode::Zero);
//!
//! // Garbage never panics, it resolves to Unknown
//! assert_eq!(resolve(&[1, 2, 3]), LogicalCode::Unknown);
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod classify;
pub mod codes;
pub mod resolve;
pub mod table;

// Re-export main types at crate root
pub use classify::{classify, lookup_key, FrameShape};
pub use codes::LogicalCode;
pub use resolve::resolve;
pub use table::lookup;
