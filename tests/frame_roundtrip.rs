// Copyright (c) 2026 the huffcore authors
// SPDX-License-Identifier: GPL-3.0-only

//! Round-trip integration tests for the embedded-payload frame, including
//! the bit-serialized form a host embeds one bit per cover sample.

use huffcore::stego::{build_frame, bits_to_bytes, bytes_to_bits, parse_frame, required_bits};
use huffcore::FrameError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[test]
fn frame_roundtrip_basic() {
    let message = "Hello, steganography!";
    let frame = build_frame(message).unwrap();
    let parsed = parse_frame(&frame).unwrap();
    assert_eq!(parsed.message, message);
}

#[test]
fn frame_roundtrip_empty_message() {
    let frame = build_frame("").unwrap();
    let parsed = parse_frame(&frame).unwrap();
    assert_eq!(parsed.message, "");
}

#[test]
fn frame_roundtrip_unicode() {
    let message = "mensaje oculto: ñandú 🦤";
    let frame = build_frame(message).unwrap();
    assert_eq!(parse_frame(&frame).unwrap().message, message);
}

#[test]
fn frame_roundtrip_random_messages() {
    let alphabet: Vec<char> = "abcdefghij KLMNOP.!".chars().collect();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..30 {
        let len = rng.gen_range(0..500);
        let message: String = (0..len)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
            .collect();
        let frame = build_frame(&message).unwrap();
        assert_eq!(parse_frame(&frame).unwrap().message, message);
    }
}

#[test]
fn extracted_channel_with_cover_tail_parses() {
    // Simulate extraction from a cover channel: the frame's bits followed
    // by whatever noise the rest of the image carries.
    let message = "buried in noise";
    let frame = build_frame(message).unwrap();

    let mut channel_bits = bytes_to_bits(&frame);
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..1000 {
        channel_bits.push(rng.gen_range(0..=1u8));
    }

    let extracted = bits_to_bytes(&channel_bits);
    let parsed = parse_frame(&extracted).unwrap();
    assert_eq!(parsed.message, message);
}

#[test]
fn recovered_book_matches_message_alphabet() {
    let parsed = parse_frame(&build_frame("abracadabra").unwrap()).unwrap();
    for s in ['a', 'b', 'r', 'c', 'd'] {
        assert!(parsed.book.code(s).is_some(), "missing code for {s:?}");
    }
    assert_eq!(parsed.book.len(), 5);
}

#[test]
fn corrupted_table_byte_detected() {
    let mut frame = build_frame("some message").unwrap();
    frame[10] = 0xFF; // inside the JSON table
    assert!(matches!(parse_frame(&frame), Err(FrameError::BadCodeTable(_))));
}

#[test]
fn truncation_anywhere_is_an_error() {
    let frame = build_frame("truncate me").unwrap();
    for cut in [0, 3, 8, frame.len() / 2, frame.len() - 1] {
        assert!(
            parse_frame(&frame[..cut]).is_err(),
            "truncation at {cut} accepted"
        );
    }
}

#[test]
fn required_bits_scales_with_message() {
    let short = required_bits("hi").unwrap();
    let long = required_bits(&"hi there, this is a longer message".repeat(10)).unwrap();
    assert!(long > short);
    // Always 8 bits per frame byte.
    assert_eq!(short % 8, 0);
    assert_eq!(long % 8, 0);
}
