// Copyright (c) 2026 the huffcore authors
// SPDX-License-Identifier: GPL-3.0-only

//! Bit-level serialization: bitstrings, MSB-first byte packing, and the
//! padded on-disk container.
//!
//! A [`BitString`] is a logical '0'/'1' sequence whose length need not be a
//! multiple of 8. Packing appends `pad_len = (8 - len mod 8) mod 8` zero
//! bits and groups the result MSB-first, 8 bits per byte. The container form
//! prepends a single header byte holding `pad_len`:
//!
//! ```text
//! byte 0:     pad_len (0-7)
//! bytes 1..N: packed bitstream, MSB-first, last byte zero-padded
//! ```
//!
//! Stripping the last `pad_len` bits after unpacking recovers the original
//! bitstring exactly. The container is meaningless without the paired code
//! table, which is persisted separately.

use std::fmt;

use crate::huffman::error::{HuffmanError, Result};

/// An ordered sequence of '0'/'1' characters; the concatenation of
/// per-symbol codes in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitString {
    bits: String,
}

impl BitString {
    pub fn new() -> Self {
        BitString::default()
    }

    /// Parse from a textual bit sequence.
    ///
    /// # Errors
    /// [`HuffmanError::InvalidBitChar`] on any character other than '0'/'1'.
    pub fn from_bits(s: &str) -> Result<Self> {
        match s.chars().find(|&c| c != '0' && c != '1') {
            Some(c) => Err(HuffmanError::InvalidBitChar(c)),
            None => Ok(BitString { bits: s.to_string() }),
        }
    }

    pub fn push_bit(&mut self, bit: bool) {
        self.bits.push(if bit { '1' } else { '0' });
    }

    /// Append a code string. Caller guarantees the code is over {'0','1'};
    /// codes taken from a [`CodeBook`](crate::CodeBook) always are.
    pub(crate) fn push_code(&mut self, code: &str) {
        debug_assert!(code.chars().all(|c| c == '0' || c == '1'));
        self.bits.push_str(code);
    }

    /// Length in bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.bits
    }

    /// Iterate bits as booleans.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.chars().map(|c| c == '1')
    }

    /// Pack into bytes, MSB-first, zero-padding up to the next byte
    /// boundary. Output byte count = ceil(len/8); `pad_len` is in 0–7.
    pub fn pack(&self) -> PackedBits {
        let pad_len = ((8 - self.bits.len() % 8) % 8) as u8;
        let mut bytes = Vec::with_capacity(self.bits.len().div_ceil(8));

        let mut byte = 0u8;
        let mut used = 0u8;
        for bit in self.iter() {
            byte = (byte << 1) | (bit as u8);
            used += 1;
            if used == 8 {
                bytes.push(byte);
                byte = 0;
                used = 0;
            }
        }
        if used > 0 {
            bytes.push(byte << (8 - used));
        }

        PackedBits { pad_len, bytes }
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bits)
    }
}

/// A bitstring in packed form: the padding count and the MSB-first bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBits {
    /// Number of zero bits appended before packing (0–7).
    pub pad_len: u8,
    /// Packed bitstream, 8 bits per byte, MSB-first.
    pub bytes: Vec<u8>,
}

impl PackedBits {
    /// Expand back to the original bitstring, dropping the last `pad_len`
    /// bits.
    ///
    /// # Errors
    /// - [`HuffmanError::InvalidPadLen`] if `pad_len > 7`.
    /// - [`HuffmanError::PaddingExceedsPayload`] if `pad_len` is larger than
    ///   the packed bit count (a truncated or inconsistent buffer).
    pub fn unpack(&self) -> Result<BitString> {
        if self.pad_len > 7 {
            return Err(HuffmanError::InvalidPadLen(self.pad_len));
        }
        let bit_len = self.bytes.len() * 8;
        if self.pad_len as usize > bit_len {
            return Err(HuffmanError::PaddingExceedsPayload {
                pad_len: self.pad_len,
                bit_len,
            });
        }

        let mut bits = String::with_capacity(bit_len);
        for &byte in &self.bytes {
            for bit_pos in (0..8).rev() {
                bits.push(if (byte >> bit_pos) & 1 == 1 { '1' } else { '0' });
            }
        }
        bits.truncate(bit_len - self.pad_len as usize);
        Ok(BitString { bits })
    }

    /// Serialize to the persisted container form: `[pad_len][bytes...]`.
    /// An empty bitstring serializes to the single header byte `0x00`.
    pub fn to_container_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + self.bytes.len());
        out.push(self.pad_len);
        out.extend_from_slice(&self.bytes);
        out
    }

    /// Parse the persisted container form.
    ///
    /// An empty slice is treated as an empty payload, not an error (a
    /// zero-length compressed file decodes to the empty bitstring).
    ///
    /// # Errors
    /// [`HuffmanError::InvalidPadLen`] if the header byte exceeds 7.
    pub fn from_container_bytes(data: &[u8]) -> Result<PackedBits> {
        let (&pad_len, bytes) = match data.split_first() {
            Some(split) => split,
            None => {
                return Ok(PackedBits {
                    pad_len: 0,
                    bytes: Vec::new(),
                })
            }
        };
        if pad_len > 7 {
            return Err(HuffmanError::InvalidPadLen(pad_len));
        }
        Ok(PackedBits {
            pad_len,
            bytes: bytes.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_non_binary_chars() {
        assert!(matches!(
            BitString::from_bits("0102"),
            Err(HuffmanError::InvalidBitChar('2'))
        ));
        assert!(BitString::from_bits("01a").is_err());
    }

    #[test]
    fn pack_whole_bytes_no_padding() {
        let bits = BitString::from_bits("1010010111110000").unwrap();
        let packed = bits.pack();
        assert_eq!(packed.pad_len, 0);
        assert_eq!(packed.bytes, vec![0xA5, 0xF0]);
    }

    #[test]
    fn pack_13_bits_pads_3() {
        // Boundary case: 13 bits → pad_len = 3, 2 payload bytes.
        let bits = BitString::from_bits("1010010111110").unwrap();
        let packed = bits.pack();
        assert_eq!(packed.pad_len, 3);
        assert_eq!(packed.bytes.len(), 2);
        // 10100101 11110_000
        assert_eq!(packed.bytes, vec![0xA5, 0xF0]);
        assert_eq!(packed.to_container_bytes()[0], 0x03);
        assert_eq!(packed.unpack().unwrap().as_str(), "1010010111110");
    }

    #[test]
    fn pack_unpack_law() {
        for s in ["", "0", "1", "01", "0000000", "11111111", "101001011111000011"] {
            let bits = BitString::from_bits(s).unwrap();
            assert_eq!(bits.pack().unpack().unwrap(), bits, "law failed for {s:?}");
        }
    }

    #[test]
    fn empty_bitstring_packs_to_lone_header() {
        let packed = BitString::new().pack();
        assert_eq!(packed.pad_len, 0);
        assert!(packed.bytes.is_empty());
        assert_eq!(packed.to_container_bytes(), vec![0x00]);
    }

    #[test]
    fn container_roundtrip() {
        let bits = BitString::from_bits("110100111").unwrap();
        let packed = bits.pack();
        let container = packed.to_container_bytes();
        let restored = PackedBits::from_container_bytes(&container).unwrap();
        assert_eq!(restored, packed);
        assert_eq!(restored.unpack().unwrap(), bits);
    }

    #[test]
    fn empty_container_is_empty_payload() {
        let packed = PackedBits::from_container_bytes(&[]).unwrap();
        assert_eq!(packed.pad_len, 0);
        assert!(packed.bytes.is_empty());
        assert!(packed.unpack().unwrap().is_empty());
    }

    #[test]
    fn bad_pad_len_rejected() {
        assert!(matches!(
            PackedBits::from_container_bytes(&[8, 0xFF]),
            Err(HuffmanError::InvalidPadLen(8))
        ));
        let packed = PackedBits { pad_len: 9, bytes: vec![0xFF] };
        assert!(packed.unpack().is_err());
    }

    #[test]
    fn padding_larger_than_payload_rejected() {
        let packed = PackedBits { pad_len: 3, bytes: vec![] };
        assert!(matches!(
            packed.unpack(),
            Err(HuffmanError::PaddingExceedsPayload { pad_len: 3, bit_len: 0 })
        ));
    }

    #[test]
    fn display_matches_source() {
        let bits = BitString::from_bits("0101").unwrap();
        assert_eq!(bits.to_string(), "0101");
    }
}
