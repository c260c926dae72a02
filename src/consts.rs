//! Common constants and utilities for ASCII85 encoding/decoding

/// First character of the 85-symbol alphabet (digit 0)
pub(crate) const ALPHABET_FIRST: u8 = b'!';

/// Last character of the 85-symbol alphabet (digit 84)
pub(crate) const ALPHABET_LAST: u8 = b'u';

/// Shorthand character for a full all-zero group
pub(crate) const ZERO_SHORTHAND: u8 = b'z';

/// Input bytes per full group
pub(crate) const GROUP_BYTES: usize = 4;

/// Output symbols per full group
pub(crate) const GROUP_SYMBOLS: usize = 5;

/// Powers of 85 for digit extraction, most significant first
pub(crate) const POW85: [u32; 5] = [85 * 85 * 85 * 85, 85 * 85 * 85, 85 * 85, 85, 1];

/// Default column to wrap encoded output at
pub(crate) const LINE_LENGTH: usize = 76;

/// Whitespace the decoder skips: space, tab, LF, CR
#[inline]
pub(crate) fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}
