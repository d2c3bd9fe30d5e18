// Copyright (c) 2026 the huffcore authors
// SPDX-License-Identifier: GPL-3.0-only

//! Embedded-payload framing for LSB steganography.
//!
//! This module owns the in-band container that pairs a Huffman-compressed
//! message with its code table (`frame`), plus the capacity arithmetic a
//! host needs before embedding. The sample-level work — reading a cover
//! image, substituting least-significant bits, writing the stego image —
//! belongs to the host; everything here operates on caller-supplied buffers.

pub mod error;
pub mod frame;

pub use error::FrameError;
pub use frame::{build_frame, bytes_to_bits, bits_to_bytes, parse_frame, ParsedFrame};

/// Number of cover samples (one embeddable bit each) required to hold the
/// full frame for `message`.
///
/// # Errors
/// [`FrameError::MessageTooLarge`] if the message exceeds the frame's
/// length fields.
pub fn required_bits(message: &str) -> Result<usize, FrameError> {
    Ok(build_frame(message)?.len() * 8)
}

/// Whether `message`'s frame fits a cover medium offering `capacity_bits`
/// embeddable samples.
pub fn fits_capacity(message: &str, capacity_bits: usize) -> Result<bool, FrameError> {
    Ok(required_bits(message)? <= capacity_bits)
}
