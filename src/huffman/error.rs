// Copyright (c) 2026 the huffcore authors
// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the Huffman codec.

use std::fmt;

/// Errors that can occur while encoding, decoding, or unpacking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanError {
    /// Encode-time: a symbol in the input has no entry in the code table.
    /// Only possible when the caller supplies a table not derived from
    /// these exact symbols.
    SymbolNotInTable(char),
    /// The stored padding count is outside 0–7.
    InvalidPadLen(u8),
    /// The stored padding count exceeds the number of packed bits.
    PaddingExceedsPayload { pad_len: u8, bit_len: usize },
    /// A bitstring or code contains a character other than '0' or '1'.
    InvalidBitChar(char),
    /// A serialized code table failed validation.
    MalformedCodeTable(&'static str),
}

impl fmt::Display for HuffmanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SymbolNotInTable(s) => write!(f, "symbol {s:?} not in code table"),
            Self::InvalidPadLen(p) => write!(f, "invalid padding count: {p} (must be 0-7)"),
            Self::PaddingExceedsPayload { pad_len, bit_len } => {
                write!(f, "padding count {pad_len} exceeds payload of {bit_len} bits")
            }
            Self::InvalidBitChar(c) => write!(f, "invalid bit character {c:?} (must be '0' or '1')"),
            Self::MalformedCodeTable(msg) => write!(f, "malformed code table: {msg}"),
        }
    }
}

impl std::error::Error for HuffmanError {}

pub type Result<T> = std::result::Result<T, HuffmanError>;
