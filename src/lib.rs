// Copyright (c) 2026 the huffcore authors
// SPDX-License-Identifier: GPL-3.0-only

//! # huffcore
//!
//! Pure-Rust Huffman coding engine with bit-level serialization, plus the
//! payload frame format used to hide Huffman-compressed messages in the
//! least-significant bits of a cover medium.
//!
//! Two collaborating components:
//!
//! - **Code building** (`huffman` module): count symbol frequencies, build a
//!   prefix-free binary code, derive forward/inverse code tables.
//! - **Bitstream codec** (`huffman` module): encode a symbol sequence into a
//!   bitstring with a code table, decode it back, and pack/unpack the
//!   bitstring into a padded, byte-addressable container.
//!
//! The compressed container carries no embedded tree: the code table is a
//! separate JSON artifact that must travel alongside the payload. The `stego`
//! module provides the self-delimiting frame that bundles both for in-band
//! embedding (one bit per cover sample; the sample-level LSB substitution
//! itself is the host's job).
//!
//! # Quick start
//!
//! ```rust
//! use huffcore::huffman;
//!
//! let compressed = huffman::compress("abracadabra").unwrap();
//! let restored = huffman::decompress(&compressed.packed, &compressed.book).unwrap();
//! assert_eq!(restored, "abracadabra");
//! ```

pub mod huffman;
pub mod stego;

pub use huffman::bitio::{BitString, PackedBits};
pub use huffman::code::CodeBook;
pub use huffman::error::HuffmanError;
pub use huffman::tree::{FrequencyTable, HuffmanTree};
pub use huffman::{compress, decompress, Compressed, CompressionStats};
pub use stego::error::FrameError;
pub use stego::frame::{build_frame, parse_frame, ParsedFrame};
pub use stego::required_bits;
