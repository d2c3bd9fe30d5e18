// Copyright (c) 2026 the huffcore authors
// SPDX-License-Identifier: GPL-3.0-only

//! Huffman coding pipeline.
//!
//! Control flow for a compress call: count frequencies → build tree → derive
//! code tables → encode symbols to bits → pack bits to padded bytes. Each
//! stage feeds the next; no stage is skipped. Decompression reverses the
//! byte and bit stages but requires the [`CodeBook`] produced at compress
//! time — the container format carries no embedded tree.
//!
//! [`compress`] runs the whole chain as one atomic unit per input. Codes
//! derived from one input are invalid for decoding another unless explicitly
//! paired with it, so a concurrent host must keep each pipeline's artifacts
//! together.
//!
//! All operations are pure, synchronous, in-memory transforms; there is no
//! streaming or adaptive mode.

pub mod bitio;
pub mod code;
pub mod codec;
pub mod error;
pub mod tree;

use serde::Serialize;

pub use bitio::{BitString, PackedBits};
pub use code::CodeBook;
pub use codec::{decode, encode};
pub use error::{HuffmanError, Result};
pub use tree::{FrequencyTable, HuffmanTree};

/// Size accounting for one compress call.
///
/// `original_bits` uses a fixed 8-bits-per-symbol baseline; it is a
/// reporting figure, not a storage size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompressionStats {
    pub original_bits: usize,
    pub compressed_bits: usize,
    /// compressed / original; 0 for empty input.
    pub ratio: f64,
    /// Percentage saved relative to the 8-bit baseline.
    pub savings_pct: f64,
    pub distinct_symbols: usize,
}

/// Everything a compress call produces: the packed payload, the code table
/// that must travel with it, and size statistics.
#[derive(Debug, Clone)]
pub struct Compressed {
    pub packed: PackedBits,
    pub book: CodeBook,
    pub stats: CompressionStats,
}

/// Compress a text buffer: frequencies → tree → codes → encode → pack.
///
/// Empty input is not an error: it yields an empty book, a zero-length
/// packed payload (container form = the single header byte `0x00`), and
/// all-zero statistics.
pub fn compress(text: &str) -> Result<Compressed> {
    let freqs = FrequencyTable::from_text(text);
    let tree = HuffmanTree::build(&freqs);
    let book = CodeBook::from_tree(tree.as_ref());
    let bits = encode(text, &book)?;

    let symbol_count = text.chars().count();
    let original_bits = symbol_count * 8;
    let compressed_bits = bits.len();
    // Both figures stay zero for empty input; there is nothing to save.
    let (ratio, savings_pct) = if original_bits > 0 {
        let ratio = compressed_bits as f64 / original_bits as f64;
        (ratio, (1.0 - ratio) * 100.0)
    } else {
        (0.0, 0.0)
    };
    let stats = CompressionStats {
        original_bits,
        compressed_bits,
        ratio,
        savings_pct,
        distinct_symbols: freqs.len(),
    };

    Ok(Compressed {
        packed: bits.pack(),
        book,
        stats,
    })
}

/// Decompress a packed payload using the code table produced when it was
/// compressed.
///
/// # Errors
/// Propagates unpack failures ([`HuffmanError::InvalidPadLen`],
/// [`HuffmanError::PaddingExceedsPayload`]). Decoding itself cannot fail:
/// padding was stripped during unpack and any trailing residue is dropped.
pub fn decompress(packed: &PackedBits, book: &CodeBook) -> Result<String> {
    let bits = packed.unpack()?;
    Ok(decode(&bits, book))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compress_decompress_roundtrip() {
        let text = "the quick brown fox jumps over the lazy dog";
        let compressed = compress(text).unwrap();
        let restored = decompress(&compressed.packed, &compressed.book).unwrap();
        assert_eq!(restored, text);
    }

    #[test]
    fn empty_input_policy() {
        let compressed = compress("").unwrap();
        assert!(compressed.book.is_empty());
        assert_eq!(compressed.packed.pad_len, 0);
        assert!(compressed.packed.bytes.is_empty());
        assert_eq!(compressed.packed.to_container_bytes(), vec![0x00]);
        assert_eq!(compressed.stats.original_bits, 0);
        assert_eq!(compressed.stats.compressed_bits, 0);
        assert_eq!(compressed.stats.ratio, 0.0);
        assert_eq!(compressed.stats.savings_pct, 0.0);
        assert_eq!(compressed.stats.distinct_symbols, 0);
        assert_eq!(decompress(&compressed.packed, &compressed.book).unwrap(), "");
    }

    #[test]
    fn stats_are_consistent() {
        let text = "abracadabra";
        let compressed = compress(text).unwrap();
        let s = compressed.stats;
        assert_eq!(s.original_bits, 11 * 8);
        assert_eq!(s.distinct_symbols, 5);
        assert_eq!(s.ratio, s.compressed_bits as f64 / s.original_bits as f64);
        // Skewed multi-symbol alphabet must not expand.
        assert!(s.compressed_bits <= s.original_bits);
        assert!(s.savings_pct > 0.0);
    }

    #[test]
    fn stats_serialize_for_host_display() {
        // Hosts (the GUI layer) show the stats block; it must serialize as
        // a flat JSON object.
        let stats = compress("abracadabra").unwrap().stats;
        let json = serde_json::to_string(&stats).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["original_bits"], 88);
        assert_eq!(value["distinct_symbols"], 5);
        assert_eq!(value["compressed_bits"], stats.compressed_bits);
    }

    #[test]
    fn roundtrip_through_container_bytes() {
        let text = "compression without the tree embedded";
        let compressed = compress(text).unwrap();
        let container = compressed.packed.to_container_bytes();
        let json = compressed.book.to_json();

        // Receiver side: only the container bytes and the JSON artifact.
        let packed = PackedBits::from_container_bytes(&container).unwrap();
        let book = CodeBook::from_json(&json).unwrap();
        assert_eq!(decompress(&packed, &book).unwrap(), text);
    }

    #[test]
    fn foreign_book_rejected_at_encode() {
        let other = compress("xyz").unwrap();
        assert!(matches!(
            encode("abc", &other.book),
            Err(HuffmanError::SymbolNotInTable(_))
        ));
    }
}
