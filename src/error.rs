//! Error types for ASCII85 operations

use std::fmt;
use std::io;

/// Main error type for ASCII85 operations
///
/// Encoding is total over all byte streams and can only fail with `Io`;
/// the remaining variants describe malformed encoded input seen by the
/// decoder.
#[derive(Debug)]
pub enum DecodeError {
    /// I/O error occurred
    Io(io::Error),
    /// Character outside the `!`..=`u` alphabet that is not whitespace
    InvalidCharacter(u8),
    /// `z` shorthand in the middle of a group
    MisplacedShorthand,
    /// Input ended with a single leftover digit
    TruncatedGroup,
    /// A 5-digit group decodes to a value above `u32::MAX`
    ValueOverflow,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Io(err) => write!(f, "I/O error: {}", err),
            DecodeError::InvalidCharacter(byte) => {
                if byte.is_ascii_graphic() {
                    write!(f, "invalid character in input data: '{}'", *byte as char)
                } else {
                    write!(f, "invalid character in input data: {:#04x}", byte)
                }
            }
            DecodeError::MisplacedShorthand => {
                write!(f, "'z' shorthand is only valid at a group boundary")
            }
            DecodeError::TruncatedGroup => {
                write!(f, "input ends with a single digit, group is truncated")
            }
            DecodeError::ValueOverflow => {
                write!(f, "group value exceeds the 32-bit range")
            }
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for DecodeError {
    fn from(err: io::Error) -> Self {
        DecodeError::Io(err)
    }
}

/// A specialized `Result` type for ASCII85 operations
pub type Result<T> = std::result::Result<T, DecodeError>;
