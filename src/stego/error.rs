// Copyright (c) 2026 the huffcore authors
// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the embedded-payload frame.

use std::fmt;

use crate::huffman::error::HuffmanError;

/// Errors that can occur while building or parsing a payload frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// A length field would not fit its 8 decimal digits.
    MessageTooLarge,
    /// The data ends before the frame does.
    Truncated,
    /// A length field is not 8 ASCII decimal digits.
    BadLengthField,
    /// The terminator sentinel is missing or misplaced.
    MissingSentinel,
    /// The embedded code table failed validation.
    BadCodeTable(HuffmanError),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MessageTooLarge => write!(f, "message too large for frame length fields"),
            Self::Truncated => write!(f, "payload frame truncated"),
            Self::BadLengthField => write!(f, "unparsable frame length field"),
            Self::MissingSentinel => write!(f, "frame terminator sentinel missing"),
            Self::BadCodeTable(e) => write!(f, "bad embedded code table: {e}"),
        }
    }
}

impl std::error::Error for FrameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::BadCodeTable(e) => Some(e),
            _ => None,
        }
    }
}

impl From<HuffmanError> for FrameError {
    fn from(e: HuffmanError) -> Self {
        Self::BadCodeTable(e)
    }
}
