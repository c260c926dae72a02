//! Streaming ASCII85 (Base85) encoder/decoder
//!
//! ASCII85 maps each 4-byte group to 5 printable characters drawn from the
//! 85-symbol alphabet `!`..=`u`, with the single character `z` standing in
//! for a full group of zero bytes. A final partial group of 1-3 bytes maps
//! to 2-4 characters. Both transforms stream over [`std::io::Read`] and
//! [`std::io::Write`] with a constant-size group buffer, so input size is
//! unbounded.
//!
//! Encoding is total; decoding rejects malformed text with a typed
//! [`DecodeError`] instead of silently coercing it.
//!
//! # Example
//! ```
//! let mut encoded = Vec::new();
//! ascii85::encode(&b"Hello"[..], &mut encoded).unwrap();
//!
//! let mut decoded = Vec::new();
//! ascii85::decode(&encoded[..], &mut decoded).unwrap();
//! assert_eq!(decoded, b"Hello");
//! ```

mod consts;
mod decode;
mod encode;
mod error;

pub use decode::decode;
pub use encode::{Encoder, encode};
pub use error::{DecodeError, Result};
