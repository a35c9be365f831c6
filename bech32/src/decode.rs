// SPDX-FileCopyrightText: © 2023 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use core::fmt;

use heapless::{String, Vec};

use crate::{
    charset,
    checksum::{verify_checksum, CHECKSUM_LEN},
    encode::is_printable,
    MAX_DATA_LEN, MAX_HRP_LEN, MAX_LEN, SEPARATOR,
};

/// The different errors that can be returned when decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum DecodeError {
    /// The string is longer than [`MAX_LEN`].
    StringLengthExceeded {
        /// Length of the string, in bytes.
        length: usize,
    },
    /// The string contains a character outside of the printable ASCII range.
    NonPrintableCharacter {
        /// Byte position of the character.
        position: usize,
    },
    /// The string mixes upper case and lower case letters.
    InvalidCase,
    /// The string does not contain the separator.
    NoChecksumMarker,
    /// The human-readable part is empty.
    IncorrectHrpSize,
    /// The data part is too short to hold a checksum.
    IncorrectChecksumSize,
    /// The data part contains a character that is not in the alphabet.
    InvalidCharacter {
        /// Byte position of the character.
        position: usize,
    },
    /// The checksum doesn't validate.
    ChecksumMismatch,
    /// Not enough space to decode the payload into.
    NotEnoughSpace {
        /// Available space to decode the payload.
        available: usize,
        /// Needed space to decode the payload.
        needed: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::StringLengthExceeded { length } => write!(
                f,
                "String is {length} characters long, maximum is {MAX_LEN}"
            ),
            DecodeError::NonPrintableCharacter { position } => {
                write!(f, "Non printable character found at position {position}")
            }
            DecodeError::InvalidCase => write!(f, "String mixes upper and lower case"),
            DecodeError::NoChecksumMarker => write!(f, "Separator '{SEPARATOR}' not found"),
            DecodeError::IncorrectHrpSize => write!(f, "Human-readable part is empty"),
            DecodeError::IncorrectChecksumSize => {
                write!(f, "Data part is shorter than the checksum")
            }
            DecodeError::InvalidCharacter { position } => {
                write!(f, "Invalid data character found at position {position}")
            }
            DecodeError::ChecksumMismatch => write!(f, "Checksum is invalid"),
            DecodeError::NotEnoughSpace { available, needed } => write!(
                f,
                "Not enough space to decode the payload, needed {needed} but only {available} bytes available"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}

/// A validated Bech32 string.
///
/// Holds the human-readable part in lower case and the data words, checksum
/// included, without allocating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    hrp: String<MAX_HRP_LEN>,
    data: Vec<u8, MAX_DATA_LEN>,
}

impl Decoded {
    /// The human-readable part, in lower case.
    pub fn hrp(&self) -> &str {
        &self.hrp
    }

    /// The payload words, without the checksum.
    pub fn data(&self) -> &[u8] {
        &self.data[..self.data.len() - CHECKSUM_LEN]
    }

    /// The checksum words.
    pub fn checksum(&self) -> &[u8] {
        &self.data[self.data.len() - CHECKSUM_LEN..]
    }

    /// Split into the human-readable part and the payload words.
    #[cfg(feature = "alloc")]
    pub fn into_parts(self) -> (alloc::string::String, alloc::vec::Vec<u8>) {
        let payload = self.data().to_vec();
        (alloc::string::String::from(self.hrp.as_str()), payload)
    }
}

/// Checks length, characters and case, then splits the string at the last
/// separator.
fn split(encoded: &str) -> Result<(&str, &str), DecodeError> {
    let length = encoded.len();
    if length > MAX_LEN {
        return Err(DecodeError::StringLengthExceeded { length });
    }

    let mut has_lower = false;
    let mut has_upper = false;
    for (position, c) in encoded.bytes().enumerate() {
        if !is_printable(c) {
            return Err(DecodeError::NonPrintableCharacter { position });
        }

        has_lower |= c.is_ascii_lowercase();
        has_upper |= c.is_ascii_uppercase();
    }

    if has_lower && has_upper {
        return Err(DecodeError::InvalidCase);
    }

    let position = encoded
        .rfind(SEPARATOR)
        .ok_or(DecodeError::NoChecksumMarker)?;

    if position < 1 {
        return Err(DecodeError::IncorrectHrpSize);
    }

    if position + SEPARATOR.len_utf8() + CHECKSUM_LEN > length {
        return Err(DecodeError::IncorrectChecksumSize);
    }

    Ok((&encoded[..position], &encoded[position + 1..]))
}

fn parse_inner(encoded: &str) -> Result<Decoded, DecodeError> {
    let (hrp, data_part) = split(encoded)?;
    let offset = hrp.len() + 1;

    let mut data = Vec::new();
    for (i, c) in data_part.bytes().enumerate() {
        let word = charset::decode_char(c).ok_or(DecodeError::InvalidCharacter {
            position: offset + i,
        })?;
        data.push(word)
            .map_err(|_| DecodeError::StringLengthExceeded {
                length: encoded.len(),
            })?;
    }

    let mut lower = String::new();
    for c in hrp.chars() {
        lower
            .push(c.to_ascii_lowercase())
            .map_err(|_| DecodeError::StringLengthExceeded {
                length: encoded.len(),
            })?;
    }

    if !verify_checksum(&lower, &data) {
        return Err(DecodeError::ChecksumMismatch);
    }

    Ok(Decoded { hrp: lower, data })
}

/// Parse and validate a Bech32 string without allocating.
///
/// # Examples
///
/// ```
/// # use foundation_bech32::parse;
/// let decoded = parse("A12UEL5L").unwrap();
/// assert_eq!(decoded.hrp(), "a");
/// assert!(decoded.data().is_empty());
/// ```
///
/// # Errors
///
/// Validation stops at the first failing check and returns the matching
/// [`DecodeError`].
pub fn parse(encoded: &str) -> Result<Decoded, DecodeError> {
    match parse_inner(encoded) {
        Ok(decoded) => {
            debug!(
                "decoded bech32 string, hrp length {}, payload length {}",
                decoded.hrp.len(),
                decoded.data().len()
            );
            Ok(decoded)
        }
        Err(e) => {
            trace!("bech32 decode rejected: {}", e);
            Err(e)
        }
    }
}

/// Decode a Bech32 string into its lower case human-readable part and
/// payload words.
///
/// # Examples
///
/// ```
/// # use foundation_bech32::decode;
/// let (hrp, data) = decode("abcdef1qpzry9x8gf2tvdw0s3jn54khce6mua7lmqqqxw").unwrap();
/// assert_eq!(hrp, "abcdef");
/// assert_eq!(data, (0..32).collect::<Vec<u8>>());
/// ```
///
/// # Errors
///
/// See [`parse`].
#[cfg(feature = "alloc")]
pub fn decode(
    encoded: &str,
) -> Result<(alloc::string::String, alloc::vec::Vec<u8>), DecodeError> {
    parse(encoded).map(Decoded::into_parts)
}

/// Decode the payload of a Bech32 string onto an existing slice.
///
/// If the return value of this method is `Ok(n)`, then `n` is the number of
/// words written into `result`.
///
/// # Errors
///
/// See [`parse`]. Returns [`DecodeError::NotEnoughSpace`] if the payload is
/// larger than `result`.
pub fn decode_to_slice(encoded: &str, result: &mut [u8]) -> Result<usize, DecodeError> {
    let decoded = parse(encoded)?;
    let data = decoded.data();

    if data.len() > result.len() {
        return Err(DecodeError::NotEnoughSpace {
            available: result.len(),
            needed: data.len(),
        });
    }

    result[..data.len()].copy_from_slice(data);
    Ok(data.len())
}

/// Validate a Bech32 string and return the length of its payload, in words.
pub fn validate(encoded: &str) -> Result<usize, DecodeError> {
    parse(encoded).map(|decoded| decoded.data().len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let decoded = parse("a12uel5l").unwrap();
        assert_eq!(decoded.hrp(), "a");
        assert_eq!(decoded.data(), &[] as &[u8]);
        assert_eq!(decoded.checksum(), &[10, 28, 25, 31, 20, 31]);

        let decoded = parse("?1ezyfcl").unwrap();
        assert_eq!(decoded.hrp(), "?");
    }

    #[test]
    fn test_hrp_may_contain_separator() {
        let decoded =
            parse("an83characterlonghumanreadablepartthatcontainsthenumber1andtheexcludedcharactersbio1tt5tgs")
                .unwrap();
        assert_eq!(decoded.hrp().len(), 83);
        assert!(decoded.data().is_empty());
    }

    #[test]
    fn test_length() {
        let long = "a".repeat(MAX_LEN + 1);
        assert_eq!(
            parse(&long),
            Err(DecodeError::StringLengthExceeded { length: 91 })
        );
    }

    #[test]
    fn test_non_printable() {
        assert_eq!(
            parse(" 1nwldj5"),
            Err(DecodeError::NonPrintableCharacter { position: 0 })
        );
        assert_eq!(
            parse("\u{7f}1axkwrx"),
            Err(DecodeError::NonPrintableCharacter { position: 0 })
        );
        assert_eq!(
            parse("de1lg7wt\u{ff}"),
            Err(DecodeError::NonPrintableCharacter { position: 8 })
        );
    }

    #[test]
    fn test_mixed_case() {
        assert_eq!(parse("a12UEL5L"), Err(DecodeError::InvalidCase));
        assert_eq!(parse("A12uel5l"), Err(DecodeError::InvalidCase));
    }

    #[test]
    fn test_structure() {
        assert_eq!(parse("pzry9x0s0muk"), Err(DecodeError::NoChecksumMarker));
        assert_eq!(parse("1pzry9x0s0muk"), Err(DecodeError::IncorrectHrpSize));
        assert_eq!(parse("10a06t8"), Err(DecodeError::IncorrectHrpSize));
        assert_eq!(parse("li1dgmt3"), Err(DecodeError::IncorrectChecksumSize));
        assert_eq!(parse("a1"), Err(DecodeError::IncorrectChecksumSize));
    }

    #[test]
    fn test_invalid_character() {
        assert_eq!(
            parse("x1b4n0q5v"),
            Err(DecodeError::InvalidCharacter { position: 2 })
        );
    }

    #[test]
    fn test_checksum_mismatch() {
        // Checksum computed over the upper case human-readable part.
        assert_eq!(parse("A1G7SGD8"), Err(DecodeError::ChecksumMismatch));
        assert_eq!(parse("a12uel5m"), Err(DecodeError::ChecksumMismatch));
    }

    #[test]
    fn test_decode_to_slice() {
        let encoded = "abcdef1qpzry9x8gf2tvdw0s3jn54khce6mua7lmqqqxw";

        let mut buf = [0u8; 32];
        assert_eq!(decode_to_slice(encoded, &mut buf), Ok(32));
        for (i, &w) in buf.iter().enumerate() {
            assert_eq!(usize::from(w), i);
        }

        let mut buf = [0u8; 31];
        assert_eq!(
            decode_to_slice(encoded, &mut buf),
            Err(DecodeError::NotEnoughSpace {
                available: 31,
                needed: 32
            })
        );
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            validate("abcdef1qpzry9x8gf2tvdw0s3jn54khce6mua7lmqqqxw"),
            Ok(32)
        );
        assert_eq!(validate("a12uel5l"), Ok(0));
        assert_eq!(validate("a1"), Err(DecodeError::IncorrectChecksumSize));
    }
}
