// Copyright (c) 2026 the huffcore authors
// SPDX-License-Identifier: GPL-3.0-only

//! Embedded-payload frame construction and parsing.
//!
//! The frame is the self-delimiting in-band container that bundles a
//! Huffman-compressed message with its code table for LSB embedding:
//!
//! ```text
//! [8 bytes] ASCII decimal length T of the JSON code table, zero-padded
//! [T bytes] JSON code table (symbol → code string)
//! [8 bytes] ASCII decimal length L of the encoded message, in BITS
//! [M bytes] packed message bits, MSB-first, M = ceil(L/8), last byte
//!           zero-padded
//! [3 bytes] terminator sentinel "END"
//! ```
//!
//! The whole frame is bit-serialized (MSB-first, one bit per cover sample)
//! by the embedding host; [`bytes_to_bits`] / [`bits_to_bytes`] do that
//! conversion. Parsing is driven by the two length fields, with the sentinel
//! verified at its computed position — scanning for the first "END" would
//! false-trigger when the packed message bytes happen to spell it.

use crate::huffman::bitio::PackedBits;
use crate::huffman::code::CodeBook;
use crate::huffman::codec::{decode, encode};
use crate::huffman::error::HuffmanError;
use crate::huffman::tree::{FrequencyTable, HuffmanTree};
use crate::stego::error::FrameError;

/// Width of each decimal length field.
pub const LEN_DIGITS: usize = 8;

/// Largest value an 8-digit decimal length field can carry.
pub const MAX_FIELD_VALUE: usize = 99_999_999;

/// Terminator sentinel closing the frame.
pub const SENTINEL: &[u8; 3] = b"END";

/// Fixed overhead: two length fields plus the sentinel = 19 bytes.
/// The code table and message sections are variable-length.
pub const FRAME_FIXED_OVERHEAD: usize = 2 * LEN_DIGITS + SENTINEL.len();

/// A parsed frame: the recovered message and the code table it carried.
#[derive(Debug, Clone)]
pub struct ParsedFrame {
    pub message: String,
    pub book: CodeBook,
}

/// Compress `message` and assemble the embedded-payload frame.
///
/// An empty message is valid: the table section is `{}` and the message
/// section is empty.
///
/// # Errors
/// [`FrameError::MessageTooLarge`] if the JSON table or the encoded bit
/// count does not fit an 8-digit decimal field.
pub fn build_frame(message: &str) -> Result<Vec<u8>, FrameError> {
    let freqs = FrequencyTable::from_text(message);
    let tree = HuffmanTree::build(&freqs);
    let book = CodeBook::from_tree(tree.as_ref());
    let bits = encode(message, &book)?;

    let table_json = book.to_json();
    if table_json.len() > MAX_FIELD_VALUE || bits.len() > MAX_FIELD_VALUE {
        return Err(FrameError::MessageTooLarge);
    }

    // The packed bytes are the bitstring grouped MSB-first with the last
    // byte zero-padded; the bit length field makes the padding recoverable.
    let message_bytes = bits.pack().bytes;

    let mut frame =
        Vec::with_capacity(FRAME_FIXED_OVERHEAD + table_json.len() + message_bytes.len());
    frame.extend_from_slice(format!("{:08}", table_json.len()).as_bytes());
    frame.extend_from_slice(table_json.as_bytes());
    frame.extend_from_slice(format!("{:08}", bits.len()).as_bytes());
    frame.extend_from_slice(&message_bytes);
    frame.extend_from_slice(SENTINEL);
    Ok(frame)
}

/// Parse a payload frame, decode its message, and return both the message
/// and the embedded code table.
///
/// `data` may extend past the frame (an LSB extraction yields the whole
/// cover channel); trailing bytes after the sentinel are ignored.
///
/// # Errors
/// - [`FrameError::Truncated`] if `data` ends before the frame does.
/// - [`FrameError::BadLengthField`] if a length field is not 8 ASCII digits.
/// - [`FrameError::MissingSentinel`] if "END" is not at its computed place.
/// - [`FrameError::BadCodeTable`] if the JSON table fails validation.
pub fn parse_frame(data: &[u8]) -> Result<ParsedFrame, FrameError> {
    let table_len = read_len_field(data, 0)?;
    let bits_off = LEN_DIGITS + table_len;
    let table_raw = data
        .get(LEN_DIGITS..bits_off)
        .ok_or(FrameError::Truncated)?;

    let bit_len = read_len_field(data, bits_off)?;
    let msg_off = bits_off + LEN_DIGITS;
    let msg_byte_len = bit_len.div_ceil(8);
    let message_bytes = data
        .get(msg_off..msg_off + msg_byte_len)
        .ok_or(FrameError::Truncated)?;

    let sentinel_off = msg_off + msg_byte_len;
    match data.get(sentinel_off..sentinel_off + SENTINEL.len()) {
        None => return Err(FrameError::Truncated),
        Some(s) if s != SENTINEL => return Err(FrameError::MissingSentinel),
        Some(_) => {}
    }

    let table_json = std::str::from_utf8(table_raw)
        .map_err(|_| HuffmanError::MalformedCodeTable("table is not valid UTF-8"))?;
    let book = CodeBook::from_json(table_json)?;

    let packed = PackedBits {
        pad_len: ((8 - bit_len % 8) % 8) as u8,
        bytes: message_bytes.to_vec(),
    };
    let bits = packed.unpack()?;
    let message = decode(&bits, &book);

    Ok(ParsedFrame { message, book })
}

/// Read an 8-digit zero-padded decimal length field at `offset`.
fn read_len_field(data: &[u8], offset: usize) -> Result<usize, FrameError> {
    let field = data
        .get(offset..offset + LEN_DIGITS)
        .ok_or(FrameError::Truncated)?;
    let mut value = 0usize;
    for &b in field {
        if !b.is_ascii_digit() {
            return Err(FrameError::BadLengthField);
        }
        value = value * 10 + (b - b'0') as usize;
    }
    Ok(value)
}

/// Expand bytes to bits, MSB first within each byte: one bit per cover
/// sample for the embedding host.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for bit_pos in (0..8).rev() {
            bits.push((byte >> bit_pos) & 1);
        }
    }
    bits
}

/// Regroup a bit sequence (MSB first) into bytes. A trailing partial byte
/// is zero-padded.
pub fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(bits.len().div_ceil(8));
    for chunk in bits.chunks(8) {
        let mut byte = 0u8;
        for (i, &bit) in chunk.iter().enumerate() {
            byte |= (bit & 1) << (7 - i);
        }
        bytes.push(byte);
    }
    bytes
}
