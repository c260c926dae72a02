//! ASCII85 decoding functionality

use std::io::{BufRead, BufReader, ErrorKind, Read, Write};

use crate::consts::{
    ALPHABET_FIRST, ALPHABET_LAST, GROUP_BYTES, GROUP_SYMBOLS, ZERO_SHORTHAND, is_whitespace,
};
use crate::error::{DecodeError, Result};

/// Combine up to 5 base-85 digits into the 32-bit group value
///
/// Accumulates wide so that out-of-range groups (digits summing past
/// `u32::MAX`) are caught instead of wrapping.
#[inline]
fn group_value(digits: &[u8; GROUP_SYMBOLS]) -> Result<u32> {
    let mut value: u64 = 0;
    for &digit in digits {
        value = value * 85 + digit as u64;
    }
    if value > u32::MAX as u64 {
        return Err(DecodeError::ValueOverflow);
    }
    Ok(value as u32)
}

/// Decode ASCII85 text from a reader and write raw bytes to a writer
///
/// The input is scanned in one pass with a group buffer of at most 5
/// digits, so arbitrarily large streams decode in constant memory.
/// Space, tab, LF and CR are skipped and never count toward a group;
/// everything else outside `!`..=`u` and `z` is rejected.
///
/// The `z` shorthand is only valid at a group boundary and expands to 4
/// zero bytes. A complete 5-digit group emits its 32-bit value big-endian;
/// a value above `u32::MAX` is malformed. At end of input a tail of k
/// digits (2 <= k <= 4) is padded with `u` and emits the first k-1 bytes;
/// a single leftover digit cannot represent any byte and is an error.
///
/// # Returns
/// Number of decoded bytes written
///
/// # Example
/// ```
/// use ascii85::decode;
///
/// let mut output = Vec::new();
/// decode(&b"87cURDZ"[..], &mut output).unwrap();
/// assert_eq!(output, b"Hello");
/// ```
pub fn decode<R: Read, W: Write>(reader: R, mut writer: W) -> Result<usize> {
    let mut reader = BufReader::new(reader);
    let mut digits = [0u8; GROUP_SYMBOLS];
    let mut digits_len = 0;
    let mut bytes_written = 0;

    loop {
        let consumed = {
            let buf = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if buf.is_empty() {
                break;
            }

            for &byte in buf {
                if is_whitespace(byte) {
                    continue;
                }

                if byte == ZERO_SHORTHAND {
                    if digits_len != 0 {
                        return Err(DecodeError::MisplacedShorthand);
                    }
                    writer.write_all(&[0; GROUP_BYTES])?;
                    bytes_written += GROUP_BYTES;
                    continue;
                }

                if !(ALPHABET_FIRST..=ALPHABET_LAST).contains(&byte) {
                    return Err(DecodeError::InvalidCharacter(byte));
                }

                digits[digits_len] = byte - ALPHABET_FIRST;
                digits_len += 1;
                if digits_len == GROUP_SYMBOLS {
                    let value = group_value(&digits)?;
                    writer.write_all(&value.to_be_bytes())?;
                    bytes_written += GROUP_BYTES;
                    digits_len = 0;
                }
            }

            buf.len()
        };
        reader.consume(consumed);
    }

    match digits_len {
        0 => {}
        1 => return Err(DecodeError::TruncatedGroup),
        _ => {
            // Pad with the maximum digit so the real leading bytes are
            // unaffected, then drop the bytes the padding stood in for.
            digits[digits_len..].fill(84);
            let value = group_value(&digits)?;
            writer.write_all(&value.to_be_bytes()[..digits_len - 1])?;
            bytes_written += digits_len - 1;
        }
    }

    Ok(bytes_written)
}
