//! Comparison against a trusted reference implementation
//!
//! The fixtures under `tests/data/` hold the output of Python's
//! `base64.a85encode` for deterministic inputs of 10, 100 and 1000 bytes
//! (byte i is `(i * 7 + 13) % 256`). Line wrapping is incidental, so our
//! output is compared with whitespace stripped.

use ascii85::{Encoder, decode};

const REF_10: &[u8] = include_bytes!("data/ref_10.a85");
const REF_100: &[u8] = include_bytes!("data/ref_100.a85");
const REF_1000: &[u8] = include_bytes!("data/ref_1000.a85");

fn test_data(size: usize) -> Vec<u8> {
    (0..size).map(|i| ((i * 7 + 13) % 256) as u8).collect()
}

fn encode_stripped(input: &[u8]) -> Vec<u8> {
    let mut output = Vec::new();
    ascii85::encode(input, &mut output).unwrap();
    output.retain(|b| !b" \t\r\n".contains(b));
    output
}

#[test]
fn test_encode_matches_reference() {
    for (size, reference) in [(10, REF_10), (100, REF_100), (1000, REF_1000)] {
        assert_eq!(
            encode_stripped(&test_data(size)),
            reference,
            "size {}",
            size
        );
    }
}

#[test]
fn test_decode_of_reference_matches_input() {
    for (size, reference) in [(10, REF_10), (100, REF_100), (1000, REF_1000)] {
        let mut decoded = Vec::new();
        decode(reference, &mut decoded).unwrap();
        assert_eq!(decoded, test_data(size), "size {}", size);
    }
}

#[test]
fn test_unwrapped_encode_matches_reference_exactly() {
    let mut output = Vec::new();
    Encoder::new()
        .no_wrap()
        .encode(&test_data(1000)[..], &mut output)
        .unwrap();
    assert_eq!(output, REF_1000);
}
