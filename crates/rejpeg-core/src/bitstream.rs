//! Decoding of the bitstream dumps written by the encoder simulation.
//!
//! The scan data arrives either as a plain binary file or as text with one hex token per
//! line. Depending on the producer a token is a run of bytes (`FFD8`) or a single 32 bit
//! word that has to be written out big endian (`0A0B0C0D`, also `0xA0B0C0D`).

use std::fmt;
use std::str::FromStr;

use byteorder::{BigEndian, ByteOrder};

use crate::error::RejpegError;
use crate::result::Result;

/// Width of a word in [`BitstreamEncoding::HexWords`] dumps.
pub const WORD_SIZE: usize = 4;

/// How a bitstream dump is encoded. It is chosen by the caller, never guessed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BitstreamEncoding {
    /// One hex string per line, decoded to bytes as written.
    #[default]
    HexBytes,
    /// One hex number per line, each written as a 4 byte big endian word.
    HexWords,
    /// The file content is the scan data itself.
    Raw,
}

impl BitstreamEncoding {
    /// Borrows `data` as a bitstream of this encoding. Hex dumps must be UTF-8 text.
    pub fn source(self, data: &[u8]) -> Result<BitstreamSource<'_>> {
        Ok(match self {
            BitstreamEncoding::HexBytes => BitstreamSource::HexBytes(std::str::from_utf8(data)?),
            BitstreamEncoding::HexWords => BitstreamSource::HexWords(std::str::from_utf8(data)?),
            BitstreamEncoding::Raw => BitstreamSource::Raw(data),
        })
    }
}

impl FromStr for BitstreamEncoding {
    type Err = RejpegError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "hex-bytes" | "bytes" => Ok(BitstreamEncoding::HexBytes),
            "hex-words" | "words" => Ok(BitstreamEncoding::HexWords),
            "raw" | "bin" => Ok(BitstreamEncoding::Raw),
            _ => Err(RejpegError::InvalidEncoding(s.to_owned())),
        }
    }
}

impl fmt::Display for BitstreamEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BitstreamEncoding::HexBytes => "hex-bytes",
            BitstreamEncoding::HexWords => "hex-words",
            BitstreamEncoding::Raw => "raw",
        })
    }
}

/// Encoded scan data, borrowed from wherever the caller loaded it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitstreamSource<'a> {
    HexBytes(&'a str),
    HexWords(&'a str),
    Raw(&'a [u8]),
}

impl BitstreamSource<'_> {
    pub fn encoding(&self) -> BitstreamEncoding {
        match self {
            BitstreamSource::HexBytes(_) => BitstreamEncoding::HexBytes,
            BitstreamSource::HexWords(_) => BitstreamEncoding::HexWords,
            BitstreamSource::Raw(_) => BitstreamEncoding::Raw,
        }
    }

    /// Decodes the whole source into raw scan bytes.
    ///
    /// Blank lines are skipped. The first line that does not decode aborts with
    /// [`RejpegError::DecodeError`], nothing decoded so far is returned.
    pub fn decode(&self) -> Result<Vec<u8>> {
        match self {
            BitstreamSource::HexBytes(text) => decode_lines(text, text.len() / 2, decode_hex_bytes),
            BitstreamSource::HexWords(text) => decode_lines(text, text.len() / 2, decode_hex_word),
            BitstreamSource::Raw(bytes) => Ok(bytes.to_vec()),
        }
    }
}

type LineDecoder = fn(&str, &mut Vec<u8>) -> std::result::Result<(), String>;

fn decode_lines(text: &str, capacity: usize, decode_line: LineDecoder) -> Result<Vec<u8>> {
    let mut decoded = Vec::with_capacity(capacity);
    let mut lines = 0;

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        decode_line(line, &mut decoded).map_err(|reason| RejpegError::DecodeError {
            line: idx + 1,
            reason,
        })?;
        lines += 1;
    }
    log::trace!("decoded {} lines into {} bytes", lines, decoded.len());

    Ok(decoded)
}

fn hex_digit(c: char) -> std::result::Result<u8, String> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| format!("'{}' is not a hex digit", c))
}

/// `A1B2` or `A1 B2` to `[0xA1, 0xB2]`. Whitespace may only sit between byte pairs.
fn decode_hex_bytes(line: &str, out: &mut Vec<u8>) -> std::result::Result<(), String> {
    let mut high = None;
    for (position, c) in line.chars().enumerate() {
        match high {
            None if c.is_ascii_whitespace() => {}
            None => high = Some(hex_digit(c)?),
            Some(_) if c.is_ascii_whitespace() => {
                return Err(format!("whitespace inside a byte at position {}", position));
            }
            Some(nibble) => {
                out.push((nibble << 4) | hex_digit(c)?);
                high = None;
            }
        }
    }
    match high {
        Some(_) => Err("odd number of hex digits".to_owned()),
        None => Ok(()),
    }
}

/// `0A0B0C0D` (or `A0B0C0D`, `0xA0B0C0D`) to `[0x0A, 0x0B, 0x0C, 0x0D]`.
fn decode_hex_word(line: &str, out: &mut Vec<u8>) -> std::result::Result<(), String> {
    let digits = line
        .strip_prefix("0x")
        .or_else(|| line.strip_prefix("0X"))
        .unwrap_or(line);
    if digits.is_empty() {
        return Err("no hex digits".to_owned());
    }
    if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(format!("'{}' is not a hex digit", c));
    }
    let word = u32::from_str_radix(digits, 16)
        .map_err(|_| format!("'{}' does not fit into a {} byte word", digits, WORD_SIZE))?;

    let mut buf = [0u8; WORD_SIZE];
    BigEndian::write_u32(&mut buf, word);
    out.extend_from_slice(&buf);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_bytes_are_appended_in_line_order() {
        let src = BitstreamSource::HexBytes("FFD8\nA1B2\n");
        assert_eq!(src.decode().unwrap(), vec![0xFF, 0xD8, 0xA1, 0xB2]);
    }

    #[test]
    fn hex_bytes_allow_any_even_length_and_inner_spaces() {
        let src = BitstreamSource::HexBytes("ff\r\n  0102 03 \n\n\t\nabcdef");
        assert_eq!(
            src.decode().unwrap(),
            vec![0xFF, 0x01, 0x02, 0x03, 0xAB, 0xCD, 0xEF]
        );
    }

    #[test]
    fn hex_bytes_reject_odd_length() {
        let err = BitstreamSource::HexBytes("FFD8\nABC\n").decode().unwrap_err();
        assert!(matches!(err, RejpegError::DecodeError { line: 2, .. }));
    }

    #[test]
    fn hex_bytes_reject_whitespace_inside_a_byte() {
        for line in ["F FD8", "A 1", "A\t1"] {
            let err = BitstreamSource::HexBytes(line).decode().unwrap_err();
            assert!(
                matches!(err, RejpegError::DecodeError { line: 1, .. }),
                "{:?} gave {:?}",
                line,
                err
            );
        }
        let err = BitstreamSource::HexBytes("FFD8\nF FD8\n")
            .decode()
            .unwrap_err();
        assert!(matches!(err, RejpegError::DecodeError { line: 2, .. }));
    }

    #[test]
    fn hex_bytes_reject_non_hex() {
        let err = BitstreamSource::HexBytes("\n\nZZ").decode().unwrap_err();
        match err {
            RejpegError::DecodeError { line, reason } => {
                assert_eq!(line, 3);
                assert!(reason.contains('Z'));
            }
            e => panic!("unexpected error {:?}", e),
        }
    }

    #[test]
    fn hex_words_are_four_bytes_big_endian() {
        let src = BitstreamSource::HexWords("0A0B0C0D\n1\n\n0xFFFFFFFF\n");
        assert_eq!(
            src.decode().unwrap(),
            vec![
                0x0A, 0x0B, 0x0C, 0x0D, //
                0x00, 0x00, 0x00, 0x01, //
                0xFF, 0xFF, 0xFF, 0xFF,
            ]
        );
    }

    #[test]
    fn hex_words_tolerate_leading_zeros() {
        let src = BitstreamSource::HexWords("000000000A0B0C0D");
        assert_eq!(src.decode().unwrap(), vec![0x0A, 0x0B, 0x0C, 0x0D]);
    }

    #[test]
    fn hex_words_reject_overflow_and_garbage() {
        let err = BitstreamSource::HexWords("100000000").decode().unwrap_err();
        assert!(matches!(err, RejpegError::DecodeError { line: 1, .. }));

        let err = BitstreamSource::HexWords("01\n+1").decode().unwrap_err();
        assert!(matches!(err, RejpegError::DecodeError { line: 2, .. }));

        let err = BitstreamSource::HexWords("0x").decode().unwrap_err();
        assert!(matches!(err, RejpegError::DecodeError { line: 1, .. }));
    }

    #[test]
    fn raw_is_taken_verbatim() {
        let data = [0x00, 0x0A, 0xFF, 0xD9];
        assert_eq!(BitstreamSource::Raw(&data).decode().unwrap(), data.to_vec());
    }

    #[test]
    fn empty_sources_decode_to_nothing() {
        assert!(BitstreamSource::HexBytes("").decode().unwrap().is_empty());
        assert!(BitstreamSource::HexWords("\n \n").decode().unwrap().is_empty());
    }

    #[test]
    fn encoding_selects_the_source() {
        let data = b"FFD8";
        assert_eq!(
            BitstreamEncoding::HexWords.source(data).unwrap(),
            BitstreamSource::HexWords("FFD8")
        );
        assert_eq!(
            BitstreamEncoding::Raw.source(data).unwrap(),
            BitstreamSource::Raw(b"FFD8")
        );
        assert!(matches!(
            BitstreamEncoding::HexBytes.source(&[0xFF, 0xFE]),
            Err(RejpegError::InvalidTextData(_))
        ));
    }

    #[test]
    fn encoding_names() {
        assert_eq!("hex-words".parse::<BitstreamEncoding>().unwrap(), BitstreamEncoding::HexWords);
        assert_eq!("RAW".parse::<BitstreamEncoding>().unwrap(), BitstreamEncoding::Raw);
        assert_eq!(BitstreamEncoding::default().to_string(), "hex-bytes");
        assert!(matches!(
            "base64".parse::<BitstreamEncoding>(),
            Err(RejpegError::InvalidEncoding(_))
        ));
    }
}
