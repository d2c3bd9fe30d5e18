// Copyright (c) 2026 the huffcore authors
// SPDX-License-Identifier: GPL-3.0-only

//! Bitstream encoding and greedy prefix-free decoding.

use crate::huffman::bitio::BitString;
use crate::huffman::code::CodeBook;
use crate::huffman::error::{HuffmanError, Result};

/// Encode a symbol sequence by concatenating per-symbol codes in input
/// order.
///
/// # Errors
/// [`HuffmanError::SymbolNotInTable`] if any input symbol has no entry.
/// This can only happen when the book was not derived from these exact
/// symbols.
pub fn encode(text: &str, book: &CodeBook) -> Result<BitString> {
    let mut bits = BitString::new();
    for symbol in text.chars() {
        match book.code(symbol) {
            Some(code) => bits.push_code(code),
            None => return Err(HuffmanError::SymbolNotInTable(symbol)),
        }
    }
    Ok(bits)
}

/// Decode a bitstring by greedy accumulate-and-match against the inverse
/// table.
///
/// Scans one bit at a time; whenever the accumulated candidate exactly
/// matches a code, the symbol is emitted and the accumulator reset. Because
/// the table is prefix-free this is unambiguous: an exact concatenation of
/// valid codes always yields the unique original sequence.
///
/// A trailing non-matching residue is silently discarded. That is policy,
/// not an error: a caller feeding bits that were padded but never unpacked
/// must not see spurious symbols from the padding run.
pub fn decode(bits: &BitString, book: &CodeBook) -> String {
    let mut out = String::new();
    let mut candidate = String::new();
    for bit in bits.as_str().chars() {
        candidate.push(bit);
        if let Some(symbol) = book.symbol_for(&candidate) {
            out.push(symbol);
            candidate.clear();
        }
    }
    out
}
