// SPDX-FileCopyrightText: © 2023 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use core::fmt;

use crate::{
    charset::{self, MAX_WORD},
    checksum::{create_checksum, CHECKSUM_LEN},
    MAX_HRP_LEN, SEPARATOR,
};

/// Calculate the length of the Bech32 string for a human-readable part and
/// `data_len` data words.
///
/// This includes the separator and the checksum.
pub const fn encoded_len(hrp: &str, data_len: usize) -> usize {
    hrp.len() + SEPARATOR.len_utf8() + data_len + CHECKSUM_LEN
}

/// The errors that can be returned when encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum EncodeError {
    /// The human-readable part is empty.
    IncorrectHrpSize,
    /// The human-readable part contains a character outside of the printable
    /// ASCII range.
    InvalidCharacter {
        /// Byte position of the character in the human-readable part.
        position: usize,
    },
    /// A data word does not fit in 5 bits.
    InvalidWord {
        /// Position of the word in the payload.
        position: usize,
        /// The offending value.
        word: u8,
    },
    /// Not enough space to encode the string into.
    NotEnoughSpace {
        /// Available space to encode the string.
        available: usize,
        /// Needed space to encode the string.
        needed: usize,
    },
    /// The underlying writer returned an error.
    Format,
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::IncorrectHrpSize => write!(f, "Human-readable part is empty"),
            EncodeError::InvalidCharacter { position } => write!(
                f,
                "Human-readable part contains an invalid character at position {position}"
            ),
            EncodeError::InvalidWord { position, word } => {
                write!(f, "Data word {word} at position {position} is not 5 bits")
            }
            EncodeError::NotEnoughSpace { available, needed } => write!(
                f,
                "Not enough space to encode the string, needed {needed} but only {available} bytes available"
            ),
            EncodeError::Format => write!(f, "Failed to write the encoded string"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EncodeError {}

impl From<fmt::Error> for EncodeError {
    fn from(_: fmt::Error) -> Self {
        EncodeError::Format
    }
}

/// Checks the encoder preconditions before anything is written.
fn check(hrp: &str, data: &[u8]) -> Result<(), EncodeError> {
    if hrp.is_empty() {
        trace!("bech32 encode rejected: empty human-readable part");
        return Err(EncodeError::IncorrectHrpSize);
    }

    if let Some(position) = hrp.bytes().position(|c| !is_printable(c)) {
        trace!("bech32 encode rejected: invalid hrp character at {}", position);
        return Err(EncodeError::InvalidCharacter { position });
    }

    if let Some(position) = data.iter().position(|&w| w > MAX_WORD) {
        trace!("bech32 encode rejected: invalid data word at {}", position);
        return Err(EncodeError::InvalidWord {
            position,
            word: data[position],
        });
    }

    Ok(())
}

pub(crate) const fn is_printable(c: u8) -> bool {
    matches!(c, 33..=126)
}

/// Iterator over the characters of the encoded string, after the validation
/// of the inputs.
fn encoder<'a>(
    hrp: &'a heapless::String<MAX_HRP_LEN>,
    data: &'a [u8],
    checksum: &'a [u8; CHECKSUM_LEN],
) -> impl Iterator<Item = char> + 'a {
    hrp.chars()
        .chain(core::iter::once(SEPARATOR))
        .chain(data.iter().chain(checksum.iter()).map(|&w| {
            debug_assert!(w <= MAX_WORD);
            char::from(charset::CHARSET[usize::from(w & MAX_WORD)])
        }))
}

/// Canonical lower case form of the human-readable part.
///
/// A human-readable part longer than [`MAX_HRP_LEN`] can never be decoded so
/// it is rejected as well.
fn lowercase_hrp(hrp: &str) -> Result<heapless::String<MAX_HRP_LEN>, EncodeError> {
    let mut lower = heapless::String::new();
    for c in hrp.chars() {
        lower
            .push(c.to_ascii_lowercase())
            .map_err(|_| EncodeError::IncorrectHrpSize)?;
    }
    Ok(lower)
}

/// Encode a human-readable part and 5-bit data words to a [`fmt::Write`].
///
/// The human-readable part is written in lower case. Nothing is written if
/// the inputs are invalid.
///
/// # Errors
///
/// Returns an error if `hrp` is empty, longer than [`MAX_HRP_LEN`] or
/// contains non printable characters, if any of the words in `data` is
/// bigger than 31, or if writing to `fmt` fails.
pub fn encode_to_fmt(hrp: &str, data: &[u8], fmt: &mut dyn fmt::Write) -> Result<(), EncodeError> {
    check(hrp, data)?;
    let hrp = lowercase_hrp(hrp)?;
    let checksum = create_checksum(&hrp, data);

    for c in encoder(&hrp, data, &checksum) {
        fmt.write_char(c)?;
    }

    Ok(())
}

/// Encode a human-readable part and 5-bit data words into an existing slice.
///
/// The return value of this method is `n` and is the number of bytes written
/// into `result`.
///
/// # Errors
///
/// Same as [`encode_to_fmt`], and [`EncodeError::NotEnoughSpace`] if
/// `result` is too small.
pub fn encode_to_slice(hrp: &str, data: &[u8], result: &mut [u8]) -> Result<usize, EncodeError> {
    check(hrp, data)?;

    let needed = encoded_len(hrp, data.len());
    if needed > result.len() {
        return Err(EncodeError::NotEnoughSpace {
            available: result.len(),
            needed,
        });
    }

    let hrp = lowercase_hrp(hrp)?;
    let checksum = create_checksum(&hrp, data);

    let mut n = 0;
    for c in encoder(&hrp, data, &checksum) {
        // Every character is ASCII at this point.
        result[n] = c as u8;
        n += 1;
    }

    debug_assert!(n == needed);
    Ok(n)
}

/// Encode a human-readable part and 5-bit data words as a Bech32 string.
///
/// # Examples
///
/// ```
/// # use foundation_bech32::encode;
/// assert_eq!(encode("a", &[]).unwrap(), "a12uel5l");
/// assert_eq!(encode("BC", &[0, 1, 2]).unwrap(), encode("bc", &[0, 1, 2]).unwrap());
/// ```
///
/// # Errors
///
/// See [`encode_to_fmt`].
#[cfg(feature = "alloc")]
pub fn encode(hrp: &str, data: &[u8]) -> Result<alloc::string::String, EncodeError> {
    let mut result = alloc::string::String::with_capacity(encoded_len(hrp, data.len()));
    encode_to_fmt(hrp, data, &mut result)?;
    Ok(result)
}
