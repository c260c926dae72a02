//! ASCII85 encoding functionality

use std::io::{self, ErrorKind, Read, Write};

use crate::consts::{
    ALPHABET_FIRST, GROUP_BYTES, GROUP_SYMBOLS, LINE_LENGTH, POW85, ZERO_SHORTHAND,
};

/// Encoder with configurable options
#[derive(Debug, Clone)]
pub struct Encoder {
    line_length: Option<usize>,
}

impl Default for Encoder {
    fn default() -> Self {
        Self {
            line_length: Some(LINE_LENGTH),
        }
    }
}

impl Encoder {
    /// Create a new encoder with default settings
    ///
    /// Default settings:
    /// - Line wrapping at 76 characters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line length for encoded output
    ///
    /// A length of 0 disables wrapping.
    pub fn line_length(mut self, length: usize) -> Self {
        self.line_length = if length == 0 { None } else { Some(length) };
        self
    }

    /// Disable line wrapping entirely
    pub fn no_wrap(mut self) -> Self {
        self.line_length = None;
        self
    }

    /// Encode raw data from a reader and write ASCII85 text to a writer
    ///
    /// Input is consumed in 4-byte groups, each interpreted as a big-endian
    /// 32-bit value and emitted as 5 base-85 digits (`!`..=`u`), or as the
    /// single shorthand `z` for an all-zero group. A final partial group of
    /// n bytes is zero-padded and emitted as n+1 digits, never as `z`.
    ///
    /// Encoding is total: every byte stream is valid input, so the only
    /// possible failure is I/O.
    ///
    /// # Returns
    /// Number of bytes read from input
    ///
    /// # Example
    /// ```
    /// use ascii85::Encoder;
    ///
    /// let mut output = Vec::new();
    /// Encoder::new().no_wrap().encode(&b"Hello"[..], &mut output).unwrap();
    /// assert_eq!(output, b"87cURDZ");
    /// ```
    pub fn encode<R: Read, W: Write>(&self, mut reader: R, mut writer: W) -> io::Result<usize> {
        let mut chunk = [0u8; 8192];
        let mut group = [0u8; GROUP_BYTES];
        let mut group_len = 0;
        let mut column = 0;
        let mut bytes_read = 0;

        loop {
            let n = match reader.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            bytes_read += n;

            for &byte in &chunk[..n] {
                group[group_len] = byte;
                group_len += 1;
                if group_len == GROUP_BYTES {
                    self.write_group(&mut writer, &group, GROUP_BYTES, &mut column)?;
                    group_len = 0;
                }
            }
        }

        if group_len > 0 {
            group[group_len..].fill(0);
            self.write_group(&mut writer, &group, group_len, &mut column)?;
        }

        if self.line_length.is_some() && column > 0 {
            writer.write_all(b"\n")?;
        }

        Ok(bytes_read)
    }

    /// Emit the symbols for one group of `len` real bytes (zero-padded to 4)
    fn write_group<W: Write>(
        &self,
        writer: &mut W,
        group: &[u8; GROUP_BYTES],
        len: usize,
        column: &mut usize,
    ) -> io::Result<()> {
        let value = u32::from_be_bytes(*group);

        let mut symbols = [0u8; GROUP_SYMBOLS];
        let count = if value == 0 && len == GROUP_BYTES {
            // The shorthand stands for exactly 4 zero bytes, so a padded
            // final group must spell its digits out.
            symbols[0] = ZERO_SHORTHAND;
            1
        } else {
            for (symbol, pow) in symbols.iter_mut().zip(POW85) {
                *symbol = ALPHABET_FIRST + ((value / pow) % 85) as u8;
            }
            len + 1
        };

        match self.line_length {
            Some(width) => {
                for &symbol in &symbols[..count] {
                    writer.write_all(&[symbol])?;
                    *column += 1;
                    if *column == width {
                        writer.write_all(b"\n")?;
                        *column = 0;
                    }
                }
            }
            None => writer.write_all(&symbols[..count])?,
        }

        Ok(())
    }
}

/// Encode data with default settings (wrapping at 76 characters)
///
/// This is a convenience function equivalent to `Encoder::new().encode(reader, writer)`
pub fn encode<R: Read, W: Write>(reader: R, writer: W) -> io::Result<usize> {
    Encoder::new().encode(reader, writer)
}
