// Copyright (c) 2026 the huffcore authors
// SPDX-License-Identifier: GPL-3.0-only

//! Code table derivation and the JSON code-table artifact.
//!
//! A [`CodeBook`] holds the forward mapping (symbol → '0'/'1' code string)
//! and its exact inverse. Because only leaves carry symbols, the forward
//! table is prefix-free by construction, which is what makes greedy decoding
//! unambiguous.
//!
//! The compressed container format carries no embedded tree, so the book is
//! serialized separately as a JSON object (keys = symbols, values = code
//! strings) and must travel alongside the payload.

use std::collections::HashMap;

use crate::huffman::error::{HuffmanError, Result};
use crate::huffman::tree::{HuffNode, HuffmanTree};

/// Forward and inverse prefix-free code tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBook {
    codes: HashMap<char, String>,
    inverse: HashMap<String, char>,
}

impl CodeBook {
    /// Derive both tables from a tree by iterative depth-first traversal,
    /// appending '0' along left edges and '1' along right edges.
    ///
    /// An absent tree yields an empty book (the empty-input case). A leaf
    /// reached with an empty accumulated path records `"0"`, covering the
    /// single-symbol tree.
    pub fn from_tree(tree: Option<&HuffmanTree>) -> CodeBook {
        let mut book = CodeBook::default();
        let tree = match tree {
            Some(t) => t,
            None => return book,
        };

        let mut stack = vec![(tree.root(), String::new())];
        while let Some((id, path)) = stack.pop() {
            match tree.node(id) {
                HuffNode::Leaf { symbol, .. } => {
                    let code = if path.is_empty() { "0".to_string() } else { path };
                    book.inverse.insert(code.clone(), *symbol);
                    book.codes.insert(*symbol, code);
                }
                HuffNode::Internal { left, right, .. } => {
                    if let Some(right) = right {
                        let mut p = path.clone();
                        p.push('1');
                        stack.push((*right, p));
                    }
                    let mut p = path;
                    p.push('0');
                    stack.push((*left, p));
                }
            }
        }
        book
    }

    /// Code string for `symbol`, if present.
    pub fn code(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// Symbol for an exact code string, if present.
    pub fn symbol_for(&self, code: &str) -> Option<char> {
        self.inverse.get(code).copied()
    }

    /// Number of symbols in the book.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate `(symbol, code)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.codes.iter().map(|(&s, c)| (s, c.as_str()))
    }

    /// True if no code is a prefix of another. Holds by construction for
    /// books derived from a tree; checked explicitly on deserialization.
    pub fn is_prefix_free(&self) -> bool {
        for (sym_a, a) in self.iter() {
            for (sym_b, b) in self.iter() {
                if sym_a != sym_b && b.starts_with(a) {
                    return false;
                }
            }
        }
        true
    }

    /// Serialize the forward table as a JSON object.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.codes).expect("code table serialization should not fail")
    }

    /// Parse and validate a JSON code-table artifact.
    ///
    /// # Errors
    /// [`HuffmanError::MalformedCodeTable`] if the JSON does not parse as a
    /// symbol → code-string object, any code is empty or contains characters
    /// other than '0'/'1', two symbols share a code (the inverse would be
    /// lossy), or the table is not prefix-free.
    pub fn from_json(json: &str) -> Result<CodeBook> {
        let codes: HashMap<char, String> = serde_json::from_str(json)
            .map_err(|_| HuffmanError::MalformedCodeTable("not a symbol-to-code JSON object"))?;

        let mut inverse = HashMap::with_capacity(codes.len());
        for (&symbol, code) in &codes {
            if code.is_empty() {
                return Err(HuffmanError::MalformedCodeTable("empty code string"));
            }
            if code.chars().any(|c| c != '0' && c != '1') {
                return Err(HuffmanError::MalformedCodeTable("code contains non-binary character"));
            }
            if inverse.insert(code.clone(), symbol).is_some() {
                return Err(HuffmanError::MalformedCodeTable("two symbols share one code"));
            }
        }

        let book = CodeBook { codes, inverse };
        if !book.is_prefix_free() {
            return Err(HuffmanError::MalformedCodeTable("table is not prefix-free"));
        }
        Ok(book)
    }
}
